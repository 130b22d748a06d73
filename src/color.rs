use std::collections::HashMap;
use std::fmt;

use eframe::egui::Color32;
use palette::{Hsv, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Rgb – an 8-bit colour with CSS formatting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(self.0, self.1, self.2)
    }

    /// Linear blend towards `other`; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

/// Formats as `rgb(R, G, B)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Fully saturated colour at `hue` (fraction of a turn, 0..1).
pub fn hue_to_rgb(hue: f64) -> Rgb {
    let hsv: Hsv<palette::encoding::Srgb, f64> = Hsv::new(hue * 360.0, 1.0, 1.0);
    let rgb: Srgb<f64> = hsv.into_color();
    let channel = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb(channel(rgb.red), channel(rgb.green), channel(rgb.blue))
}

/// One colour per label, hues evenly spaced: label `i` of `n` gets hue `i / n`.
pub fn assign_colors<S: AsRef<str>>(labels: &[S]) -> Vec<Rgb> {
    let n = labels.len();
    (0..n).map(|i| hue_to_rgb(i as f64 / n as f64)).collect()
}

// ---------------------------------------------------------------------------
// Color mapping: class label → Rgb
// ---------------------------------------------------------------------------

/// Maps the unique labels of the class column to their assigned colours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    colors: Vec<Rgb>,
    index: HashMap<String, usize>,
}

impl ColorMap {
    /// Build a colour map from labels in first-occurrence order.
    pub fn new(labels: &[String]) -> Self {
        let colors = assign_colors(labels);
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.clone(), i))
            .collect();
        ColorMap {
            colors,
            index,
        }
    }

    /// Colour of a known label; `None` for anything else.
    pub fn color_for(&self, label: &str) -> Option<Rgb> {
        self.index.get(label).map(|&i| self.colors[i])
    }
}
