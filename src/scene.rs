//! Declarative description of the parallel-coordinates plot.
//!
//! A [`SceneSpec`] holds everything the renderer needs and nothing else: the
//! axes, a per-row colour index and the colour scale that index maps through.
//! It serializes to a parcoords-shaped JSON document.

use serde::ser::{SerializeSeq, SerializeTuple};
use serde::{Serialize, Serializer};

use crate::color::{assign_colors, Rgb};
use crate::projection::{Dimension, Projection};

pub const PLOT_TITLE: &str = "Parallel Coordinates Plot";

// ---------------------------------------------------------------------------
// Color scale
// ---------------------------------------------------------------------------

/// A colour placed at a normalized position in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub position: f64,
    pub color: Rgb,
}

impl Serialize for ColorStop {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.position)?;
        tuple.serialize_element(&self.color.to_string())?;
        tuple.end()
    }
}

/// Ordered colour stops; label `i` of `n` sits at `i / (n - 1)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColorScale {
    stops: Vec<ColorStop>,
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.stops.len()))?;
        for stop in &self.stops {
            seq.serialize_element(stop)?;
        }
        seq.end()
    }
}

impl ColorScale {
    /// One stop per colour. A single colour becomes a single stop at 0.
    pub fn from_colors(colors: &[Rgb]) -> Self {
        let n = colors.len();
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| ColorStop {
                position: scale_position(i, n),
                color,
            })
            .collect();
        ColorScale { stops }
    }

    /// Colour at `position`: exact at a stop, linear in between, clamped to
    /// the end stops outside. `None` only for an empty scale.
    pub fn sample(&self, position: f64) -> Option<Rgb> {
        let first = self.stops.first()?;
        if position <= first.position {
            return Some(first.color);
        }
        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if position <= hi.position {
                let span = hi.position - lo.position;
                let t = if span > 0.0 { (position - lo.position) / span } else { 1.0 };
                return Some(lo.color.lerp(hi.color, t));
            }
        }
        self.stops.last().map(|s| s.color)
    }
}

/// Normalized position of label `index` among `count` labels.
pub fn scale_position(index: usize, count: usize) -> f64 {
    if count > 1 {
        index as f64 / (count - 1) as f64
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub label: String,
    pub values: Vec<f64>,
}

impl From<&Dimension> for Axis {
    fn from(d: &Dimension) -> Self {
        Axis {
            label: d.label.clone(),
            values: d.values.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    /// Per-row class index.
    pub color: Vec<f64>,
    #[serde(rename = "colorscale")]
    pub color_scale: ColorScale,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub margin: Margin,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            title: PLOT_TITLE.to_string(),
            margin: Margin { l: 50, r: 50, t: 100, b: 50 },
        }
    }
}

/// The full plot payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSpec {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub dimensions: Vec<Axis>,
    pub line: LineStyle,
    /// Class labels in colour-index order.
    pub labels: Vec<String>,
    pub layout: Layout,
}

impl SceneSpec {
    pub fn row_count(&self) -> usize {
        self.line.color.len()
    }

    /// Normalized colour-scale position of row `row`.
    pub fn row_position(&self, row: usize) -> f64 {
        let index = self.line.color.get(row).copied().unwrap_or(0.0);
        let count = self.labels.len();
        if count > 1 {
            index / (count - 1) as f64
        } else {
            0.0
        }
    }

    /// Class label of row `row`.
    pub fn row_label(&self, row: usize) -> Option<&str> {
        let index = *self.line.color.get(row)?;
        self.labels.get(index as usize).map(String::as_str)
    }

    /// Colour of row `row`, sampled from the scale.
    pub fn row_color(&self, row: usize) -> Option<Rgb> {
        self.line.color_scale.sample(self.row_position(row))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn build_scene(
    dimensions: &[Dimension],
    class_column: usize,
    labels: &[String],
    colors: &[Rgb],
) -> SceneSpec {
    let color = dimensions
        .get(class_column)
        .map(|d| d.values.clone())
        .unwrap_or_default();

    SceneSpec {
        kind: "parcoords",
        dimensions: dimensions.iter().map(Axis::from).collect(),
        line: LineStyle {
            color,
            color_scale: ColorScale::from_colors(colors),
        },
        labels: labels.to_vec(),
        layout: Layout::default(),
    }
}

/// Colour the projection's labels and build its scene.
pub fn scene_for(projection: &Projection) -> SceneSpec {
    let colors = assign_colors(&projection.labels);
    build_scene(
        &projection.dimensions,
        projection.class_column,
        &projection.labels,
        &colors,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::parse;
    use crate::projection::project;

    fn demo_scene() -> SceneSpec {
        scene_for(&project(&parse("class,x\nA,1\nB,2\nA,3")).unwrap())
    }

    #[test]
    fn scene_carries_axes_and_class_indices() {
        let scene = demo_scene();
        assert_eq!(scene.kind, "parcoords");
        assert_eq!(scene.dimensions.len(), 2);
        assert_eq!(scene.dimensions[1].label, "x");
        assert_eq!(scene.line.color, vec![0.0, 1.0, 0.0]);
        assert_eq!(scene.row_count(), 3);
    }

    #[test]
    fn two_labels_span_the_scale() {
        let scene = demo_scene();
        let stops = &scene.line.color_scale.stops;
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].position, 0.0);
        assert_eq!(stops[0].color, Rgb(255, 0, 0));
        assert_eq!(stops[1].position, 1.0);
        assert_eq!(stops[1].color, Rgb(0, 255, 255));
    }

    #[test]
    fn label_index_round_trips_through_the_scale() {
        let labels: Vec<String> = ["p", "q", "r", "s", "t"].map(String::from).to_vec();
        let colors = assign_colors(&labels);
        let scale = ColorScale::from_colors(&colors);
        for (i, color) in colors.iter().enumerate() {
            assert_eq!(scale.sample(scale_position(i, labels.len())), Some(*color));
        }
    }

    #[test]
    fn row_colors_match_their_label() {
        let scene = demo_scene();
        assert_eq!(scene.row_color(0), Some(Rgb(255, 0, 0)));
        assert_eq!(scene.row_color(1), Some(Rgb(0, 255, 255)));
        assert_eq!(scene.row_color(2), Some(Rgb(255, 0, 0)));
    }

    #[test]
    fn row_labels_follow_class_indices() {
        let scene = demo_scene();
        assert_eq!(scene.row_label(1), Some("B"));
        assert_eq!(scene.row_label(2), Some("A"));
        assert_eq!(scene.row_label(3), None);
    }

    #[test]
    fn scale_and_color_map_agree_on_every_row() {
        let projection = project(&parse("class,x
A,1
B,2
C,3
A,4")).unwrap();
        let scene = scene_for(&projection);
        let map = crate::color::ColorMap::new(&projection.labels);
        for row in 0..scene.row_count() {
            let label = scene.row_label(row).unwrap();
            assert_eq!(map.color_for(label), scene.row_color(row));
        }
    }

    #[test]
    fn single_label_is_one_fixed_stop() {
        let scale = ColorScale::from_colors(&[Rgb(255, 0, 0)]);
        assert_eq!(scale.stops.len(), 1);
        assert_eq!(scale.stops[0].position, 0.0);
        assert_eq!(scale.sample(0.7), Some(Rgb(255, 0, 0)));
    }

    #[test]
    fn empty_scale_samples_nothing() {
        assert_eq!(ColorScale::default().sample(0.0), None);
    }

    #[test]
    fn sample_interpolates_between_stops() {
        let scale = ColorScale::from_colors(&[Rgb(0, 0, 0), Rgb(200, 100, 0)]);
        assert_eq!(scale.sample(0.5), Some(Rgb(100, 50, 0)));
        assert_eq!(scale.sample(2.0), Some(Rgb(200, 100, 0)));
    }

    #[test]
    fn json_uses_css_colors() {
        let json: serde_json::Value = serde_json::from_str(&demo_scene().to_json().unwrap()).unwrap();
        assert_eq!(json["type"], "parcoords");
        assert_eq!(json["line"]["colorscale"][1][1], "rgb(0, 255, 255)");
        assert_eq!(json["line"]["colorscale"][1][0], 1.0);
        assert_eq!(json["dimensions"][0]["values"][1], 1.0);
        assert_eq!(json["layout"]["margin"]["t"], 100);
        assert_eq!(json["layout"]["title"], PLOT_TITLE);
    }
}
