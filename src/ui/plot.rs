use eframe::egui::{self, Color32, Context, RichText, Ui};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Text, VLine};

use crate::color::ColorMap;
use crate::scene::SceneSpec;
use crate::state::{AppState, Intent};

const AXIS_COLOR: Color32 = Color32::GRAY;

// ---------------------------------------------------------------------------
// Axis scaling
// ---------------------------------------------------------------------------

/// Finite min/max of an axis; `(0, 0)` when there is nothing finite.
pub fn axis_range(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 0.0))
}

/// Map `v` into [0, 1] along `range`. A flat axis puts everything mid-height.
pub fn normalize(v: f64, (min, max): (f64, f64)) -> f64 {
    let span = max - min;
    if span.abs() < f64::EPSILON {
        0.5
    } else {
        ((v - min) / span).clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// Parallel-coordinates window
// ---------------------------------------------------------------------------

pub fn projection_window(ctx: &Context, state: &AppState, intents: &mut Vec<Intent>) {
    let mut open = state.windows.projection;
    egui::Window::new("Parallel Coordinates")
        .open(&mut open)
        .default_size([820.0, 520.0])
        .show(ctx, |ui: &mut Ui| match &state.projection {
            Some(view) => {
                if ui.button("Copy plot spec").clicked() {
                    match view.scene.to_json() {
                        Ok(json) => ui.ctx().copy_text(json),
                        Err(e) => log::error!("Failed to serialize scene: {e}"),
                    }
                }
                ui.horizontal_wrapped(|ui: &mut Ui| {
                    for label in &view.scene.labels {
                        if let Some(color) = view.color_map.color_for(label) {
                            ui.label(RichText::new(format!("■ {label}")).color(color.to_color32()));
                        }
                    }
                });
                parallel_coordinates(ui, &view.scene, &view.color_map);
            }
            None => {
                ui.label("No projection available.");
            }
        });
    if !open {
        intents.push(Intent::CloseProjection);
    }
}

/// Draw a scene: one vertical axis per dimension, one polyline per row.
///
/// Rows take their label's colour from `colors`; rows whose label is unknown
/// fall back to sampling the scene's colour scale.
pub fn parallel_coordinates(ui: &mut Ui, scene: &SceneSpec, colors: &ColorMap) {
    let ranges: Vec<(f64, f64)> = scene
        .dimensions
        .iter()
        .map(|axis| axis_range(&axis.values))
        .collect();
    let n_axes = scene.dimensions.len();

    ui.label(RichText::new(&scene.layout.title).size(18.0));

    Plot::new("parallel_coordinates")
        .show_axes([false, false])
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-0.3)
        .include_x(n_axes.saturating_sub(1) as f64 + 0.3)
        .include_y(-0.15)
        .include_y(1.15)
        .show(ui, |plot_ui| {
            for row in 0..scene.row_count() {
                let points: PlotPoints = scene
                    .dimensions
                    .iter()
                    .zip(&ranges)
                    .enumerate()
                    .map(|(i, (axis, &range))| {
                        let v = axis.values.get(row).copied().unwrap_or(0.0);
                        [i as f64, normalize(v, range)]
                    })
                    .collect();

                let name = scene.row_label(row).unwrap_or_default();
                let color = colors
                    .color_for(name)
                    .or_else(|| scene.row_color(row))
                    .map(|c| c.to_color32())
                    .unwrap_or(Color32::LIGHT_BLUE);

                plot_ui.line(Line::new(points).name(name).color(color).width(1.0));
            }

            for (i, (axis, &(min, max))) in scene.dimensions.iter().zip(&ranges).enumerate() {
                let x = i as f64;
                plot_ui.vline(VLine::new(x).color(AXIS_COLOR).width(1.5));
                plot_ui.text(Text::new(
                    PlotPoint::new(x, 1.1),
                    RichText::new(&axis.label).strong(),
                ));
                plot_ui.text(Text::new(PlotPoint::new(x, 1.03), format_tick(max)));
                plot_ui.text(Text::new(PlotPoint::new(x, -0.05), format_tick(min)));
            }
        });
}

fn format_tick(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_range_skips_non_finite_values() {
        assert_eq!(axis_range(&[3.0, f64::INFINITY, -1.0, 2.0]), (-1.0, 3.0));
        assert_eq!(axis_range(&[]), (0.0, 0.0));
    }

    #[test]
    fn normalize_maps_into_unit_interval() {
        assert_eq!(normalize(5.0, (0.0, 10.0)), 0.5);
        assert_eq!(normalize(-3.0, (0.0, 10.0)), 0.0);
        assert_eq!(normalize(f64::INFINITY, (0.0, 10.0)), 1.0);
    }

    #[test]
    fn flat_axis_sits_mid_height() {
        assert_eq!(normalize(4.0, (4.0, 4.0)), 0.5);
    }

    #[test]
    fn ticks_drop_trailing_zeros_for_integers() {
        assert_eq!(format_tick(3.0), "3");
        assert_eq!(format_tick(2.456), "2.46");
    }
}
