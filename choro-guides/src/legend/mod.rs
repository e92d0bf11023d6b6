pub mod gradient;
pub mod swatch;

use choro_common::{
    column::{ColumnKind, ColumnSummary},
    types::{ColorStop, Rgba},
};
use choro_scales::gradient::GradientTable;
use serde::Serialize;

use crate::style::LegendStyle;

/// A bin of a numeric column: everything above the previous bin's upper
/// bound, up to and including its own
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    pub upper_bound: f64,
    pub color: Rgba,
}

/// Attach ramp colors to bin boundaries, sampling bin `i` of `n` at `i / (n - 1)`
pub fn color_bins(bounds: &[f64], gradient: &GradientTable) -> Vec<Bin> {
    let last = bounds.len().saturating_sub(1).max(1) as f32;
    bounds
        .iter()
        .enumerate()
        .map(|(i, upper_bound)| Bin {
            upper_bound: *upper_bound,
            color: gradient.sample(i as f32 / last),
        })
        .collect()
}

/// One box or tick of a legend, listed top to bottom
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendItem {
    /// Fill of the box, absent on continuous gradient ticks
    pub color: Option<Rgba>,
    pub title_above: Option<String>,
    pub title_below: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LegendKind {
    /// Continuous bar painted with the ramp itself
    Gradient { stops: Vec<ColorStop> },
    /// Touching boxes for contiguous numeric ranges
    Bins,
    /// Separated boxes for unrelated categories
    Categories,
}

/// Layout hints for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegendHints {
    pub item_spacing: f32,
    pub bar_height: f32,
    pub tick_color: Rgba,
}

/// Everything a renderer needs to draw a legend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSpec {
    pub title: String,
    pub kind: LegendKind,
    pub items: Vec<LegendItem>,
    pub hints: LegendHints,
}

/// Build the legend for a column from its colored bins.
///
/// Returns `None` when there is nothing to show: a single-stop ramp paints
/// every value the same color, and an empty column has no range. Without bins
/// the legend is a continuous gradient; categorical columns list one box per
/// category.
pub fn build_legend(
    title: &str,
    column: &ColumnSummary,
    style: &LegendStyle,
    bins: &[Bin],
) -> Option<LegendSpec> {
    if style.color_stops.len() == 1 || column.is_empty() {
        return None;
    }

    let (minimum, maximum) = style.display_bounds(column);
    let (kind, items, item_spacing) = match column.kind {
        ColumnKind::Categorical => {
            if bins.is_empty() {
                return None;
            }
            (
                LegendKind::Categories,
                swatch::category_items(bins, &column.categories),
                style.category_spacing,
            )
        }
        ColumnKind::Continuous if bins.is_empty() => (
            LegendKind::Gradient {
                stops: style.color_stops.clone(),
            },
            gradient::tick_items(minimum, maximum, style.tick_count),
            0.0,
        ),
        ColumnKind::Continuous => (LegendKind::Bins, swatch::bin_items(bins, minimum), 0.0),
    };

    Some(LegendSpec {
        title: title.to_string(),
        kind,
        items,
        hints: LegendHints {
            item_spacing,
            bar_height: style.bar_height,
            tick_color: style.tick_color,
        },
    })
}
