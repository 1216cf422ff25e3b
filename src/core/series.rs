use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Ordered numeric values with a parallel, equally long label sequence.
///
/// The length invariant is checked on construction and on deserialization,
/// so every `SeriesData` in circulation satisfies `values.len() == labels.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeriesData")]
pub struct SeriesData {
    values: Vec<f64>,
    labels: Vec<String>,
}

#[derive(Deserialize)]
struct RawSeriesData {
    values: Vec<f64>,
    labels: Vec<String>,
}

impl TryFrom<RawSeriesData> for SeriesData {
    type Error = ChartError;

    fn try_from(raw: RawSeriesData) -> ChartResult<Self> {
        Self::new(raw.values, raw.labels)
    }
}

/// Outcome of fitting a replacement value array onto an existing label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthAdjustment {
    Exact,
    /// Trailing values without a label were dropped.
    Truncated { dropped: usize },
    /// Missing trailing values were filled with `0.0`.
    Padded { added: usize },
}

impl SeriesData {
    pub fn new<L>(values: Vec<f64>, labels: impl IntoIterator<Item = L>) -> ChartResult<Self>
    where
        L: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if values.len() != labels.len() {
            return Err(ChartError::InvalidData(format!(
                "series length mismatch: {} values for {} labels",
                values.len(),
                labels.len()
            )));
        }
        validate_values(&values)?;
        Ok(Self { values, labels })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            values: Vec::new(),
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Replaces the values while keeping the label set.
    ///
    /// Extra values are truncated and missing ones are padded with `0.0`
    /// so the label set stays authoritative. Non-finite input is rejected
    /// and leaves the series untouched.
    pub fn replace_values(&mut self, mut values: Vec<f64>) -> ChartResult<LengthAdjustment> {
        validate_values(&values)?;
        let expected = self.labels.len();
        let adjustment = match values.len().cmp(&expected) {
            std::cmp::Ordering::Equal => LengthAdjustment::Exact,
            std::cmp::Ordering::Greater => {
                let dropped = values.len() - expected;
                values.truncate(expected);
                LengthAdjustment::Truncated { dropped }
            }
            std::cmp::Ordering::Less => {
                let added = expected - values.len();
                values.resize(expected, 0.0);
                LengthAdjustment::Padded { added }
            }
        };
        self.values = values;
        Ok(adjustment)
    }
}

fn validate_values(values: &[f64]) -> ChartResult<()> {
    if let Some(index) = values.iter().position(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "series value at index {index} must be finite"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{LengthAdjustment, SeriesData};

    fn churn() -> SeriesData {
        SeriesData::new(vec![300.0, 900.0], ["Churned", "Active"]).expect("valid series")
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = SeriesData::new(vec![1.0, 2.0, 3.0], ["a", "b"]).expect_err("mismatch");
        assert!(err.to_string().contains("3 values for 2 labels"));
    }

    #[test]
    fn replace_values_truncates_extra_values() {
        let mut series = churn();
        let adjustment = series
            .replace_values(vec![1.0, 2.0, 3.0, 4.0])
            .expect("replace");
        assert_eq!(adjustment, LengthAdjustment::Truncated { dropped: 2 });
        assert_eq!(series.values(), &[1.0, 2.0]);
    }

    #[test]
    fn replace_values_pads_missing_values_with_zero() {
        let mut series = churn();
        let adjustment = series.replace_values(vec![42.0]).expect("replace");
        assert_eq!(adjustment, LengthAdjustment::Padded { added: 1 });
        assert_eq!(series.values(), &[42.0, 0.0]);
    }

    #[test]
    fn replace_values_rejects_non_finite_without_mutation() {
        let mut series = churn();
        assert!(series.replace_values(vec![f64::NAN, 1.0]).is_err());
        assert_eq!(series.values(), &[300.0, 900.0]);
    }

    #[test]
    fn deserialization_enforces_length_invariant() {
        let bad = r#"{"values":[1.0],"labels":["a","b"]}"#;
        assert!(serde_json::from_str::<SeriesData>(bad).is_err());

        let good = r#"{"values":[1.0,2.0],"labels":["a","b"]}"#;
        let series: SeriesData = serde_json::from_str(good).expect("valid json");
        assert_eq!(series.len(), 2);
    }
}
