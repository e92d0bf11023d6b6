use choro_common::{
    column::ColumnSummary,
    types::{default_color_stops, ColorStop, Rgba},
};
use choro_scales::{binning::BinMethod, gradient::DEFAULT_RESOLUTION};
use serde::{Deserialize, Serialize};

use crate::error::ChoroGuidesError;

/// Styling options for a column legend.
///
/// Every field has a default, so partial configurations deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LegendStyle {
    /// Color ramp sampled for bins and gradients
    pub color_stops: Vec<ColorStop>,
    /// Requested number of bins, 0 disables binning
    pub bin_count: usize,
    pub bin_method: BinMethod,
    /// Intermediate labels on a continuous gradient legend
    pub tick_count: usize,
    /// Lower display bound, ignored for constant columns
    pub min_display_value: Option<f64>,
    /// Upper display bound, ignored for constant columns
    pub max_display_value: Option<f64>,
    /// Color of missing data points
    pub default_color: Rgba,
    pub bar_height: f32,
    /// Gap between the boxes of a categorical legend
    pub category_spacing: f32,
    pub tick_color: Rgba,
    /// Number of entries in the gradient lookup table
    pub resolution: usize,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            color_stops: default_color_stops(),
            bin_count: 7,
            bin_method: BinMethod::Auto,
            tick_count: 0,
            min_display_value: None,
            max_display_value: None,
            default_color: [0.5, 0.5, 0.5, 1.0],
            bar_height: 16.0,
            category_spacing: 4.0,
            tick_color: [0.2, 0.2, 0.2, 1.0],
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl LegendStyle {
    pub fn with_color_stops(mut self, color_stops: Vec<ColorStop>) -> Self {
        self.color_stops = color_stops;
        self
    }

    pub fn with_bins(mut self, bin_count: usize, bin_method: BinMethod) -> Self {
        self.bin_count = bin_count;
        self.bin_method = bin_method;
        self
    }

    /// Set the bin method from its configuration name, e.g. `"quantile"`
    pub fn with_bin_method_name(mut self, name: &str) -> Result<Self, ChoroGuidesError> {
        self.bin_method = BinMethod::parse(name)?;
        Ok(self)
    }

    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    pub fn with_display_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_display_value = min;
        self.max_display_value = max;
        self
    }

    /// Minimum and maximum shown on the legend for `column`.
    ///
    /// The configured display bounds only apply when the column is not
    /// constant.
    pub fn display_bounds(&self, column: &ColumnSummary) -> (f64, f64) {
        if column.is_constant() {
            return (column.minimum, column.maximum);
        }
        (
            self.min_display_value.unwrap_or(column.minimum),
            self.max_display_value.unwrap_or(column.maximum),
        )
    }

    /// Check a style loaded from untrusted configuration
    pub fn validate(&self) -> Result<(), ChoroGuidesError> {
        let mut previous_offset = 0.0;
        for stop in &self.color_stops {
            if !(0.0..=1.0).contains(&stop.offset) {
                return Err(ChoroGuidesError::InvalidStyle(format!(
                    "color stop offset {} is outside [0, 1]",
                    stop.offset
                )));
            }
            if stop.offset < previous_offset {
                return Err(ChoroGuidesError::InvalidStyle(format!(
                    "color stop offset {} follows larger offset {}",
                    stop.offset, previous_offset
                )));
            }
            if !stop.color.iter().all(|c| c.is_finite()) {
                return Err(ChoroGuidesError::InvalidStyle(format!(
                    "color stop at {} has a non-finite component",
                    stop.offset
                )));
            }
            previous_offset = stop.offset;
        }

        for (name, bound) in [
            ("min_display_value", self.min_display_value),
            ("max_display_value", self.max_display_value),
        ] {
            if bound.is_some_and(|v| !v.is_finite()) {
                return Err(ChoroGuidesError::InvalidStyle(format!(
                    "{name} must be finite"
                )));
            }
        }
        Ok(())
    }
}
