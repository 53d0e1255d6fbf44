use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ChartType;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 30.0,
            bottom: 50.0,
            left: 60.0,
        }
    }
}

/// Where an axis domain starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AxisStart {
    /// Derived from the data extent.
    #[default]
    Auto,
    Explicit(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomExtent {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomExtent {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

/// Series color resolved per theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemedColor {
    pub light: String,
    pub dark: String,
}

impl ThemedColor {
    #[must_use]
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }

    /// Picks the variant for `theme`; `Auto` falls back to the light value.
    #[must_use]
    pub fn for_theme(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.dark,
            Theme::Light | Theme::Auto => &self.light,
        }
    }
}

/// Options every chart type carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommonChartOptions {
    pub width: u32,
    pub height: u32,
    pub margin: Margins,
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub show_legend: bool,
    pub show_grid: bool,
    pub show_tooltip: bool,
    pub show_points: bool,
    /// Transition length in milliseconds.
    pub animation_duration: u32,
    pub x_axis_start: AxisStart,
    pub y_axis_start: AxisStart,
    /// Tick label rotation in degrees.
    pub x_axis_rotation: f64,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub zoom_extent: ZoomExtent,
    pub theme: Theme,
    pub background_color: String,
    pub title_font_size: u32,
    pub label_font_size: u32,
    pub legend_font_size: u32,
    pub colors: IndexMap<String, ThemedColor>,
}

impl Default for CommonChartOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            margin: Margins::default(),
            title: String::new(),
            x_axis_label: String::new(),
            y_axis_label: String::new(),
            show_legend: true,
            show_grid: true,
            show_tooltip: true,
            show_points: true,
            animation_duration: 750,
            x_axis_start: AxisStart::Auto,
            y_axis_start: AxisStart::Auto,
            x_axis_rotation: 0.0,
            enable_zoom: false,
            enable_pan: false,
            zoom_extent: ZoomExtent::default(),
            theme: Theme::Auto,
            background_color: "#ffffff".to_owned(),
            title_font_size: 16,
            label_font_size: 12,
            legend_font_size: 12,
            colors: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum CurveKind {
    Linear,
    #[default]
    MonotoneX,
    Step,
    Basis,
    Cardinal,
    Natural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BarType {
    #[default]
    Grouped,
    Stacked,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineOptions {
    pub curve: CurveKind,
    pub line_width: f64,
    pub point_radius: f64,
    /// Series ids hidden from the plot but kept in the legend.
    pub disabled_lines: BTreeSet<String>,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            curve: CurveKind::MonotoneX,
            line_width: 2.0,
            point_radius: 4.0,
            disabled_lines: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AreaOptions {
    pub show_stroke: bool,
    pub curve: CurveKind,
    pub fill_opacity: f64,
}

impl Default for AreaOptions {
    fn default() -> Self {
        Self {
            show_stroke: true,
            curve: CurveKind::MonotoneX,
            fill_opacity: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarOptions {
    pub bar_type: BarType,
    /// Fraction of the band occupied by bars.
    pub bar_width: f64,
    pub bar_spacing: f64,
    pub disabled_bars: BTreeSet<String>,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            bar_type: BarType::Grouped,
            bar_width: 0.8,
            bar_spacing: 0.1,
            disabled_bars: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScatterOptions {
    pub point_radius: f64,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self { point_radius: 5.0 }
    }
}

/// Shared by pie and donut charts. Both keys are required, so an unbound key
/// is the empty string rather than absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PieOptions {
    pub label_key: String,
    pub value_key: String,
    /// Ratio of the outer radius left empty in the middle.
    pub inner_radius: f64,
    pub show_labels: bool,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            label_key: String::new(),
            value_key: String::new(),
            inner_radius: 0.0,
            show_labels: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeatmapOptions {
    pub x_axis_key: Option<String>,
    pub y_axis_key: Option<String>,
    pub value_key: Option<String>,
    pub color_scheme: String,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            x_axis_key: None,
            y_axis_key: None,
            value_key: None,
            color_scheme: "blues".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CycleplotOptions {
    /// Draws the per-period mean across cycles.
    pub show_mean_line: bool,
}

impl Default for CycleplotOptions {
    fn default() -> Self {
        Self {
            show_mean_line: true,
        }
    }
}

/// Chart-type specific part of a configuration, tagged by `chartType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "chartType", rename_all = "lowercase")]
pub enum ChartVariant {
    Line(LineOptions),
    Bar(BarOptions),
    Area(AreaOptions),
    Scatter(ScatterOptions),
    Pie(PieOptions),
    Donut(PieOptions),
    Heatmap(HeatmapOptions),
    Cycleplot(CycleplotOptions),
}

impl ChartVariant {
    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        match self {
            Self::Line(_) => ChartType::Line,
            Self::Bar(_) => ChartType::Bar,
            Self::Area(_) => ChartType::Area,
            Self::Scatter(_) => ChartType::Scatter,
            Self::Pie(_) => ChartType::Pie,
            Self::Donut(_) => ChartType::Donut,
            Self::Heatmap(_) => ChartType::Heatmap,
            Self::Cycleplot(_) => ChartType::Cycleplot,
        }
    }

    /// Label/value keys of pie and donut charts.
    #[must_use]
    pub fn pie_options(&self) -> Option<&PieOptions> {
        match self {
            Self::Pie(options) | Self::Donut(options) => Some(options),
            _ => None,
        }
    }

    #[must_use]
    pub fn heatmap_options(&self) -> Option<&HeatmapOptions> {
        match self {
            Self::Heatmap(options) => Some(options),
            _ => None,
        }
    }
}
