/// Sample quantile of ascending `sorted` values at probability `p` ∈ [0, 1],
/// using linear interpolation between order statistics (R type 7).
///
/// `sorted` must not be empty.
pub fn quantile_r7(sorted: &[f64], p: f64) -> f64 {
    let last = sorted.len() - 1;
    let h = last as f64 * p.clamp(0.0, 1.0);
    let lower = h.floor() as usize;
    if lower >= last {
        return sorted[last];
    }
    let lo = sorted[lower];
    let hi = sorted[lower + 1];
    if lo == hi {
        return lo;
    }
    lo + (h - lower as f64) * (hi - lo)
}

/// Upper boundaries of `bin_count` equal-frequency bins over ascending `sorted`
/// values. Heavily tied data can repeat a boundary, leaving a bin empty.
pub fn quantile_boundaries(sorted: &[f64], bin_count: usize) -> Vec<f64> {
    if sorted.is_empty() {
        return vec![];
    }
    (1..=bin_count)
        .map(|i| quantile_r7(sorted, i as f64 / bin_count as f64))
        .collect()
}
