pub mod ckmeans;
pub mod quantile;

use log::debug;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::error::ChoroScaleError;

pub use ckmeans::{ckmeans, collapse_degenerate_clusters, natural_boundaries};
pub use quantile::{quantile_boundaries, quantile_r7};

/// Sample size above which `BinMethod::Auto` switches from natural clustering
/// to quantiles
pub const AUTO_QUANTILE_THRESHOLD: usize = 1000;

/// Strategy used to partition a numeric column into bins
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BinMethod {
    /// Natural clustering for small samples, quantiles for large ones
    #[default]
    Auto,
    Quantile,
    Ckmeans,
    /// No binning, the column is shown as a continuous gradient
    None,
}

impl BinMethod {
    pub fn parse(name: &str) -> Result<Self, ChoroScaleError> {
        name.parse()
            .map_err(|_| ChoroScaleError::InvalidBinMethod(name.to_string()))
    }
}

/// Compute the upper boundary of every bin for a numeric sample.
///
/// Returns an empty vector when binning is disabled (`BinMethod::None` or a
/// bin count of zero) or when the sample holds no finite values; callers then
/// render a continuous gradient. Otherwise the boundaries are non-decreasing,
/// there are at most `min(requested_bin_count, finite values)` of them, and the
/// last one equals the sample maximum.
pub fn compute_bins(values: &[f64], requested_bin_count: usize, method: BinMethod) -> Vec<f64> {
    if method == BinMethod::None || requested_bin_count == 0 {
        return vec![];
    }

    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return vec![];
    }
    sorted.sort_by(f64::total_cmp);

    let bin_count = requested_bin_count.min(sorted.len());
    let use_quantiles = match method {
        BinMethod::Quantile => true,
        BinMethod::Auto => sorted.len() > AUTO_QUANTILE_THRESHOLD,
        _ => false,
    };

    if use_quantiles {
        debug!(
            "computing {} quantile bins over {} values",
            bin_count,
            sorted.len()
        );
        quantile_boundaries(&sorted, bin_count)
    } else {
        debug!(
            "computing {} natural bins over {} values",
            bin_count,
            sorted.len()
        );
        natural_boundaries(&sorted, bin_count)
    }
}
