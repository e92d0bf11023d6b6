#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) sRGB-encoded color with components in [0, 1]
pub type Rgba = [f32; 4];

pub const TRANSPARENT: Rgba = [0.0, 0.0, 0.0, 0.0];

/// A color pinned to a fractional position along a color ramp
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Build a ramp of colors spread evenly over [0, 1]
pub fn evenly_spaced_stops(colors: &[Rgba]) -> Vec<ColorStop> {
    match colors.len() {
        0 => vec![],
        1 => vec![ColorStop::new(0.0, colors[0])],
        n => {
            let last = (n - 1) as f32;
            colors
                .iter()
                .enumerate()
                .map(|(i, c)| ColorStop::new(i as f32 / last, *c))
                .collect()
        }
    }
}

/// The 5-stop blue → cyan → green → yellow → red ramp used when no ramp is configured
pub fn default_color_stops() -> Vec<ColorStop> {
    evenly_spaced_stops(&[
        [0.0, 0.0, 1.0, 1.0],
        [0.0, 1.0, 1.0, 1.0],
        [0.0, 1.0, 0.0, 1.0],
        [1.0, 1.0, 0.0, 1.0],
        [1.0, 0.0, 0.0, 1.0],
    ])
}
