use serde::{Deserialize, Serialize};

use crate::core::{ChartStyle, SeriesData, TooltipFormat};
use crate::error::{ChartError, ChartResult};

/// Chart family plus the kind-specific geometry knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Doughnut { cutout_percent: f64 },
    Bar,
    HorizontalBar,
    Line { fill: bool, tension: f64 },
}

impl ChartKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pie => "pie",
            Self::Doughnut { .. } => "doughnut",
            Self::Bar => "bar",
            Self::HorizontalBar => "horizontal bar",
            Self::Line { .. } => "line",
        }
    }

    /// Whether the chart draws cartesian axes (and therefore a grid).
    #[must_use]
    pub const fn has_axes(self) -> bool {
        matches!(self, Self::Bar | Self::HorizontalBar | Self::Line { .. })
    }

    fn validate(self) -> ChartResult<()> {
        match self {
            Self::Doughnut { cutout_percent }
                if !cutout_percent.is_finite() || !(0.0..100.0).contains(&cutout_percent) =>
            {
                Err(ChartError::InvalidData(
                    "doughnut cutout must be finite and in [0, 100)".to_owned(),
                ))
            }
            Self::Line { tension, .. }
                if !tension.is_finite() || !(0.0..=1.0).contains(&tension) =>
            {
                Err(ChartError::InvalidData(
                    "line tension must be finite and in [0, 1]".to_owned(),
                ))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisTitles {
    pub x: Option<String>,
    pub y: Option<String>,
}

/// Fully resolved description of one chart: kind, series, styling and
/// accessibility label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub series: SeriesData,
    pub style: ChartStyle,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(default)]
    pub axis_titles: AxisTitles,
    #[serde(default)]
    pub tooltip: TooltipFormat,
    pub aria_label: String,
}

impl ChartConfig {
    pub fn validate(&self) -> ChartResult<()> {
        self.kind.validate()?;
        self.style.validate()?;
        if self.aria_label.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "accessibility label must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Tooltip text for one data point of the primary series.
    #[must_use]
    pub fn tooltip_text(&self, index: usize) -> Option<String> {
        self.tooltip.format(&self.series, index)
    }
}
