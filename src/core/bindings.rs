use serde::{Deserialize, Serialize};

/// Categorical palette handed out to new series in creation order.
pub const SERIES_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PointStyle {
    #[default]
    Circle,
    Square,
    Triangle,
    None,
}

/// One plotted series bound to a dataset column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesConfig {
    pub id: String,
    pub name: String,
    /// Column reference; empty while the user has not picked a column yet.
    pub data_column: String,
    pub color: String,
    pub line_style: LineStyle,
    pub point_style: PointStyle,
    pub line_width: f64,
    pub point_radius: f64,
    pub opacity: f64,
    pub visible: bool,
    /// Positional binding written by older releases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_index: Option<usize>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            data_column: String::new(),
            color: SERIES_PALETTE[0].to_owned(),
            line_style: LineStyle::Solid,
            point_style: PointStyle::Circle,
            line_width: 2.0,
            point_radius: 4.0,
            opacity: 1.0,
            visible: true,
            column_index: None,
        }
    }
}

impl SeriesConfig {
    /// Creates a visible series colored from [`SERIES_PALETTE`] by `palette_index`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        data_column: impl Into<String>,
        palette_index: usize,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data_column: data_column.into(),
            color: SERIES_PALETTE[palette_index % SERIES_PALETTE.len()].to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        !self.data_column.is_empty()
    }
}

/// Column bindings of a chart: the x-axis column, the series list and the
/// cycle-plot keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisBindings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_key: Option<String>,
    pub series_configs: Vec<SeriesConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_key: Option<String>,
}

impl AxisBindings {
    #[must_use]
    pub fn series(&self, series_id: &str) -> Option<&SeriesConfig> {
        self.series_configs.iter().find(|s| s.id == series_id)
    }
}
