use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Closed set of chart kinds the engine knows how to configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Area,
    Scatter,
    Pie,
    Donut,
    Heatmap,
    Cycleplot,
}

impl ChartType {
    pub const ALL: [ChartType; 8] = [
        ChartType::Line,
        ChartType::Bar,
        ChartType::Area,
        ChartType::Scatter,
        ChartType::Pie,
        ChartType::Donut,
        ChartType::Heatmap,
        ChartType::Cycleplot,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Area => "area",
            Self::Scatter => "scatter",
            Self::Pie => "pie",
            Self::Donut => "donut",
            Self::Heatmap => "heatmap",
            Self::Cycleplot => "cycleplot",
        }
    }

    /// Chart kinds driven by an x-axis column plus a list of series columns.
    #[must_use]
    pub fn uses_series(self) -> bool {
        matches!(self, Self::Line | Self::Bar | Self::Area | Self::Scatter)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ConfigError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|chart_type| chart_type.as_str() == tag)
            .ok_or_else(|| ConfigError::UnsupportedChartType(tag.to_owned()))
    }
}
