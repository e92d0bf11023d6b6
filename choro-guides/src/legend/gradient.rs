use choro_scales::format::format_number;

use super::LegendItem;

/// Labels along a continuous gradient bar.
///
/// The bar from `minimum` to `maximum` is cut into `tick_count + 1` equal
/// segments, one item each, giving `tick_count + 2` labels: every item is
/// labeled above with the value at its top, and the first item also carries
/// `minimum` below it.
pub fn tick_items(minimum: f64, maximum: f64, tick_count: usize) -> Vec<LegendItem> {
    let segments = tick_count + 1;
    (1..=segments)
        .map(|i| {
            let value = minimum + (maximum - minimum) * i as f64 / segments as f64;
            LegendItem {
                color: None,
                title_above: Some(format_number(value)),
                title_below: (i == 1).then(|| format_number(minimum)),
            }
        })
        .collect()
}
