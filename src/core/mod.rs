//! Configuration data model and the defaults factory.

pub mod bindings;
pub mod chart_type;
pub mod config;
pub mod defaults;
pub mod header;
pub mod options;

pub use bindings::{AxisBindings, LineStyle, PointStyle, SERIES_PALETTE, SeriesConfig};
pub use chart_type::ChartType;
pub use config::{ChartConfiguration, ConfigPatch, KeyBindingsPatch};
pub use defaults::{default_chart_config, default_chart_config_for_tag};
pub use header::{ColumnType, DataHeader};
pub use options::{
    AreaOptions, AxisStart, BarOptions, BarType, ChartVariant, CommonChartOptions, CurveKind,
    CycleplotOptions, HeatmapOptions, LineOptions, Margins, PieOptions, ScatterOptions, Theme,
    ThemedColor, ZoomExtent,
};
