use choro_common::types::{ColorStop, Rgba};
use palette::{Mix, Srgba};

use crate::error::ChoroScaleError;

/// Number of entries in a gradient lookup table unless configured otherwise
pub const DEFAULT_RESOLUTION: usize = 256;

/// Fixed-resolution lookup table of colors sampled from a color ramp.
///
/// Entry `k` holds the ramp color at position `k / (len - 1)`. Channels are
/// interpolated linearly on their encoded sRGB values, the same scale the stop
/// offsets are specified on, with no gamma decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientTable {
    colors: Vec<Rgba>,
}

impl GradientTable {
    /// Build a table from an ordered ramp of color stops.
    ///
    /// Positions before the first stop take the first stop's color and
    /// positions after the last stop take the last stop's color. Stops that
    /// share an offset produce a hard edge where the later stop wins.
    /// Resolutions below 2 are raised to 2.
    pub fn build(stops: &[ColorStop], resolution: usize) -> Result<Self, ChoroScaleError> {
        if stops.is_empty() {
            return Err(ChoroScaleError::EmptyColorStops);
        }

        let resolution = resolution.max(2);
        let last = (resolution - 1) as f32;
        let colors = (0..resolution)
            .map(|k| ramp_color_at(stops, k as f32 / last))
            .collect();

        Ok(Self { colors })
    }

    /// Color at fractional position `fraction` ∈ [0, 1].
    ///
    /// The position is floored onto the table and clamped to its ends.
    pub fn sample(&self, fraction: f32) -> Rgba {
        let last = self.colors.len() - 1;
        // Float to int casts saturate: negatives and NaN land on 0
        let index = ((fraction * last as f32).floor() as usize).min(last);
        self.colors[index]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }
}

fn ramp_color_at(stops: &[ColorStop], position: f32) -> Rgba {
    // First stop strictly after the position
    let upper = stops.partition_point(|s| s.offset <= position);
    if upper == 0 {
        return stops[0].color;
    }
    if upper == stops.len() {
        return stops[stops.len() - 1].color;
    }

    let lower = &stops[upper - 1];
    let upper = &stops[upper];
    let t = (position - lower.offset) / (upper.offset - lower.offset);

    let (r, g, b, a) = to_srgba(lower.color)
        .mix(to_srgba(upper.color), t)
        .into_components();
    [r, g, b, a]
}

fn to_srgba(c: Rgba) -> Srgba {
    Srgba::new(c[0], c[1], c[2], c[3])
}
