use choro_scales::format::format_number;

use super::{Bin, LegendItem};

/// One touching box per numeric bin.
///
/// Each box is labeled above with its upper bound, except a last box whose
/// bound repeats the one before it. The first box is labeled below with
/// `minimum` unless its own bound already shows that number.
pub fn bin_items(bins: &[Bin], minimum: f64) -> Vec<LegendItem> {
    let last = bins.len().saturating_sub(1);
    bins.iter()
        .enumerate()
        .map(|(i, bin)| {
            let repeats_previous =
                i > 0 && i == last && bin.upper_bound == bins[i - 1].upper_bound;
            LegendItem {
                color: Some(bin.color),
                title_above: (!repeats_previous).then(|| format_number(bin.upper_bound)),
                title_below: (i == 0 && bin.upper_bound != minimum)
                    .then(|| format_number(minimum)),
            }
        })
        .collect()
}

/// One separated box per category, titled with the label at the bin's index
pub fn category_items(bins: &[Bin], categories: &[String]) -> Vec<LegendItem> {
    bins.iter()
        .enumerate()
        .map(|(i, bin)| LegendItem {
            color: Some(bin.color),
            title_above: Some(categories.get(i).cloned().unwrap_or_default()),
            title_below: None,
        })
        .collect()
}
