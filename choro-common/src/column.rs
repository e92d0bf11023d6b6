#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, VariantNames};

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Display, VariantNames)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ColumnKind {
    #[default]
    Continuous,
    Categorical,
}

/// A single cell of a data column, as handed over by the data source
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawValue {
    Number(f64),
    Category(String),
    Missing,
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Category(value.to_string())
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawValue::Missing)
    }
}

/// Summary of a data column: its raw values plus the statistics the data
/// source already computed for it.
///
/// For categorical columns `categories` holds the labels indexed by their
/// integer code, and `minimum`/`maximum` span the codes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnSummary {
    pub values: Vec<RawValue>,
    pub kind: ColumnKind,
    pub minimum: f64,
    pub maximum: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub categories: Vec<String>,
}

impl ColumnSummary {
    /// Summarize raw values, deriving the bounds and category list.
    ///
    /// Continuous columns take their bounds from the finite numbers (0 when
    /// there are none). Categorical columns collect labels in first-seen
    /// order; numbers found in a categorical column are treated as labels.
    pub fn from_values(values: Vec<RawValue>, kind: ColumnKind) -> Self {
        match kind {
            ColumnKind::Continuous => {
                let (minimum, maximum) = values
                    .iter()
                    .filter_map(|v| match v {
                        RawValue::Number(n) if n.is_finite() => Some(*n),
                        _ => None,
                    })
                    .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                        None => Some((v, v)),
                        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                    })
                    .unwrap_or((0.0, 0.0));
                Self {
                    values,
                    kind,
                    minimum,
                    maximum,
                    categories: vec![],
                }
            }
            ColumnKind::Categorical => {
                let mut categories: Vec<String> = Vec::new();
                for value in &values {
                    let label = match value {
                        RawValue::Category(s) => s.clone(),
                        RawValue::Number(n) => n.to_string(),
                        RawValue::Missing => continue,
                    };
                    if !categories.contains(&label) {
                        categories.push(label);
                    }
                }
                let maximum = categories.len().saturating_sub(1) as f64;
                Self {
                    values,
                    kind,
                    minimum: 0.0,
                    maximum,
                    categories,
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether every value collapses to a single number
    pub fn is_constant(&self) -> bool {
        self.minimum == self.maximum
    }

    /// The finite numbers of the column, in column order
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values
            .iter()
            .filter_map(|v| match v {
                RawValue::Number(n) if n.is_finite() => Some(*n),
                _ => None,
            })
            .collect()
    }

    /// Integer code of a category label
    pub fn category_index(&self, label: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == label)
    }
}
