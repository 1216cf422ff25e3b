use serde::{Deserialize, Serialize};

use crate::core::SeriesData;

/// Tooltip text policy for one data point.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TooltipFormat {
    /// `label: value`
    #[default]
    Raw,
    /// `label: value unit`
    Count { unit: String },
    /// `label: value unit (share%)` with the share of the series total.
    Share { unit: Option<String> },
    /// `label: value%` for values already expressed in percent.
    Percent,
    /// `label: value*100%` for values expressed as 0..=1 ratios.
    Ratio,
}

impl TooltipFormat {
    /// Formats the tooltip line for `index`, or `None` when out of range.
    #[must_use]
    pub fn format(&self, series: &SeriesData, index: usize) -> Option<String> {
        let value = *series.values().get(index)?;
        let label = series.labels().get(index)?;
        let text = match self {
            Self::Raw => format!("{label}: {value}"),
            Self::Count { unit } => format!("{label}: {value} {unit}"),
            Self::Share { unit } => {
                let share = share_percent(value, series.total());
                match unit {
                    Some(unit) => format!("{label}: {value} {unit} ({share:.1}%)"),
                    None => format!("{label}: {value} ({share:.1}%)"),
                }
            }
            Self::Percent => format!("{label}: {value}%"),
            Self::Ratio => format!("{label}: {:.0}%", value * 100.0),
        };
        Some(text)
    }
}

/// Share of `value` in `total` as a percentage; an empty total yields `0.0`.
#[must_use]
pub fn share_percent(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    value / total * 100.0
}
