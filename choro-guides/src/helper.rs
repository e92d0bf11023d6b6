use std::sync::OnceLock;

use choro_common::{
    column::{ColumnKind, ColumnSummary},
    types::{Rgba, TRANSPARENT},
};
use choro_scales::{binning::compute_bins, gradient::GradientTable};
use log::{debug, warn};

use crate::{
    error::ChoroGuidesError,
    legend::{build_legend, color_bins, Bin, LegendSpec},
    style::LegendStyle,
};

/// Colors and legend for one column under one style.
///
/// The gradient table and the bins are computed on first use and cached for
/// the lifetime of the helper, so value lookups and the legend always agree.
/// Concurrent first callers block on a single computation.
#[derive(Debug)]
pub struct LegendHelper {
    column: Option<ColumnSummary>,
    style: LegendStyle,
    gradient: OnceLock<Option<GradientTable>>,
    bins: OnceLock<Vec<Bin>>,
}

impl LegendHelper {
    pub fn new(column: Option<ColumnSummary>, style: LegendStyle) -> Self {
        Self {
            column,
            style,
            gradient: OnceLock::new(),
            bins: OnceLock::new(),
        }
    }

    /// Like `new`, rejecting styles that fail `LegendStyle::validate`
    pub fn try_new(
        column: Option<ColumnSummary>,
        style: LegendStyle,
    ) -> Result<Self, ChoroGuidesError> {
        style.validate()?;
        Ok(Self::new(column, style))
    }

    pub fn column(&self) -> Option<&ColumnSummary> {
        self.column.as_ref()
    }

    pub fn style(&self) -> &LegendStyle {
        &self.style
    }

    /// Lookup table of the style's ramp, `None` when the ramp has no stops
    pub fn gradient(&self) -> Option<&GradientTable> {
        self.gradient
            .get_or_init(|| {
                match GradientTable::build(&self.style.color_stops, self.style.resolution) {
                    Ok(table) => Some(table),
                    Err(err) => {
                        debug!("{err}, falling back to the default color");
                        None
                    }
                }
            })
            .as_ref()
    }

    /// Colored bins of the column, empty when the column is shown as a
    /// continuous gradient
    pub fn bins(&self) -> &[Bin] {
        self.bins.get_or_init(|| self.compute_bins())
    }

    fn compute_bins(&self) -> Vec<Bin> {
        let (Some(column), Some(gradient)) = (&self.column, self.gradient()) else {
            return vec![];
        };

        let bounds: Vec<f64> = match column.kind {
            // One bin per category, bounded by its integer code
            ColumnKind::Categorical => (0..column.categories.len()).map(|i| i as f64).collect(),
            ColumnKind::Continuous => compute_bins(
                &column.numeric_values(),
                self.style.bin_count,
                self.style.bin_method,
            ),
        };
        debug!("built {} bins for {} column", bounds.len(), column.kind);
        color_bins(&bounds, gradient)
    }

    /// Color of a single value.
    ///
    /// Missing values take the style's default color. With bins, the value
    /// takes the color of the first bin whose upper bound reaches it, or of
    /// the last bin when it exceeds them all. Without bins, the value is
    /// placed between the display bounds and sampled from the gradient.
    pub fn color_for(&self, value: Option<f64>) -> Rgba {
        let (Some(value), Some(column), Some(gradient)) = (
            value.filter(|v| !v.is_nan()),
            &self.column,
            self.gradient(),
        ) else {
            return self.style.default_color;
        };

        let bins = self.bins();
        if bins.is_empty() {
            let (minimum, maximum) = self.style.display_bounds(column);
            let fraction = if maximum > minimum {
                (value - minimum) / (maximum - minimum)
            } else {
                0.0
            };
            return gradient.sample(fraction as f32);
        }

        // Bounds are sorted, so the first bin reaching the value is found by bisection
        let index = match bins.partition_point(|bin| bin.upper_bound < value) {
            i if i == bins.len() => bins.len() - 1,
            i => i,
        };
        match bins.get(index) {
            Some(bin) => bin.color,
            None => {
                warn!(
                    "no bin at index {index} for value {value} among {} bins",
                    bins.len()
                );
                TRANSPARENT
            }
        }
    }

    /// Color of a category label, the default color for unknown labels
    pub fn color_for_category(&self, label: &str) -> Rgba {
        let code = self
            .column
            .as_ref()
            .and_then(|column| column.category_index(label));
        match code {
            Some(code) => self.color_for(Some(code as f64)),
            None => self.style.default_color,
        }
    }

    /// Legend for the column, `None` when there is nothing to show
    pub fn legend(&self, title: &str) -> Option<LegendSpec> {
        let column = self.column.as_ref()?;
        self.gradient()?;
        build_legend(title, column, &self.style, self.bins())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use choro_common::{column::RawValue, types::ColorStop};
    use choro_scales::binning::BinMethod;
    use float_cmp::assert_approx_eq;

    fn numeric_column(values: &[f64]) -> ColumnSummary {
        ColumnSummary::from_values(
            values.iter().map(|v| RawValue::Number(*v)).collect(),
            ColumnKind::Continuous,
        )
    }

    fn two_color_style() -> LegendStyle {
        LegendStyle::default().with_color_stops(vec![
            ColorStop::new(0.0, [0.0, 0.0, 0.0, 1.0]),
            ColorStop::new(1.0, [1.0, 1.0, 1.0, 1.0]),
        ])
    }

    #[test]
    fn test_missing_value_takes_default_color() {
        let helper = LegendHelper::new(Some(numeric_column(&[1.0, 2.0])), LegendStyle::default());
        let default = helper.style().default_color;
        assert_eq!(helper.color_for(None), default);
        assert_eq!(helper.color_for(Some(f64::NAN)), default);

        let unbinned = LegendHelper::new(
            Some(numeric_column(&[1.0, 2.0])),
            LegendStyle::default().with_bins(0, BinMethod::Auto),
        );
        assert_eq!(unbinned.color_for(None), default);

        let no_column = LegendHelper::new(None, LegendStyle::default());
        assert_eq!(no_column.color_for(None), default);
        assert_eq!(no_column.color_for(Some(1.0)), default);
    }

    #[test]
    fn test_lookup_picks_first_bin_reaching_value() {
        let helper = LegendHelper::new(
            Some(numeric_column(&[1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 20.0, 21.0, 22.0])),
            two_color_style().with_bins(3, BinMethod::Ckmeans),
        );
        let bins = helper.bins();
        assert_eq!(
            bins.iter().map(|b| b.upper_bound).collect::<Vec<_>>(),
            vec![3.0, 12.0, 22.0]
        );

        assert_eq!(helper.color_for(Some(-100.0)), bins[0].color);
        assert_eq!(helper.color_for(Some(3.0)), bins[0].color);
        assert_eq!(helper.color_for(Some(3.5)), bins[1].color);
        assert_eq!(helper.color_for(Some(12.0)), bins[1].color);
        assert_eq!(helper.color_for(Some(21.0)), bins[2].color);
        assert_eq!(helper.color_for(Some(1e9)), bins[2].color);
    }

    #[test]
    fn test_unbinned_lookup_samples_gradient() {
        let helper = LegendHelper::new(
            Some(numeric_column(&[0.0, 10.0])),
            two_color_style().with_bins(0, BinMethod::Auto),
        );
        assert!(helper.bins().is_empty());
        assert_eq!(helper.color_for(Some(0.0)), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(helper.color_for(Some(10.0)), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(helper.color_for(Some(-5.0)), [0.0, 0.0, 0.0, 1.0]);
        let gradient = helper.gradient().unwrap();
        assert_eq!(helper.color_for(Some(5.0)), gradient.sample(0.5));
        let mid = helper.color_for(Some(5.0));
        assert_approx_eq!(f32, mid[0], 0.5, epsilon = 0.01);
        assert_approx_eq!(f32, mid[3], 1.0);
    }

    #[test]
    fn test_empty_ramp_falls_back_to_default_color() {
        let helper = LegendHelper::new(
            Some(numeric_column(&[0.0, 10.0])),
            LegendStyle::default().with_color_stops(vec![]),
        );
        assert!(helper.gradient().is_none());
        assert!(helper.bins().is_empty());
        assert_eq!(helper.color_for(Some(4.0)), helper.style().default_color);
        assert_eq!(helper.legend("depth"), None);
    }

    #[test]
    fn test_categorical_lookup() {
        let column = ColumnSummary::from_values(
            vec!["oak".into(), "pine".into(), "elm".into()],
            ColumnKind::Categorical,
        );
        let helper = LegendHelper::new(Some(column), two_color_style());
        let bins = helper.bins();
        assert_eq!(bins.len(), 3);
        assert_eq!(helper.color_for_category("oak"), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(helper.color_for_category("pine"), bins[1].color);
        assert_eq!(helper.color_for_category("elm"), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(
            helper.color_for_category("ash"),
            helper.style().default_color
        );
    }

    #[test]
    fn test_bins_cached() {
        let helper = LegendHelper::new(
            Some(numeric_column(&[1.0, 5.0, 9.0])),
            LegendStyle::default(),
        );
        let first = helper.bins().as_ptr();
        helper.color_for(Some(4.0));
        assert_eq!(helper.bins().as_ptr(), first);
    }

    #[test]
    fn test_try_new_validates_style() {
        let style = LegendStyle::default().with_display_range(None, Some(f64::INFINITY));
        assert!(matches!(
            LegendHelper::try_new(None, style),
            Err(ChoroGuidesError::InvalidStyle(_))
        ));
    }

    #[test]
    fn test_helper_shared_across_threads() {
        let helper = LegendHelper::new(
            Some(numeric_column(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0])),
            LegendStyle::default().with_bins(4, BinMethod::Quantile),
        );
        let colors: Vec<Rgba> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| helper.color_for(Some(5.0))))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(colors.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(colors[0], helper.bins()[2].color);
    }
}
