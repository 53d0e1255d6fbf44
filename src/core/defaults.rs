use tracing::trace;

use crate::error::ConfigResult;

use super::{
    AreaOptions, AxisBindings, BarOptions, ChartConfiguration, ChartType, ChartVariant,
    CommonChartOptions, CycleplotOptions, HeatmapOptions, LineOptions, PieOptions, ScatterOptions,
};

const DONUT_INNER_RADIUS: f64 = 0.5;

/// Builds a fresh default configuration for `chart_type`.
///
/// Every call returns an independently owned value; nothing is shared between
/// two configurations.
#[must_use]
pub fn default_chart_config(chart_type: ChartType) -> ChartConfiguration {
    trace!(chart_type = %chart_type, "building default chart config");
    let options = match chart_type {
        ChartType::Line => ChartVariant::Line(LineOptions::default()),
        ChartType::Bar => ChartVariant::Bar(BarOptions::default()),
        ChartType::Area => ChartVariant::Area(AreaOptions::default()),
        ChartType::Scatter => ChartVariant::Scatter(ScatterOptions::default()),
        ChartType::Pie => ChartVariant::Pie(PieOptions::default()),
        ChartType::Donut => ChartVariant::Donut(PieOptions {
            inner_radius: DONUT_INNER_RADIUS,
            ..PieOptions::default()
        }),
        ChartType::Heatmap => ChartVariant::Heatmap(HeatmapOptions::default()),
        ChartType::Cycleplot => ChartVariant::Cycleplot(CycleplotOptions::default()),
    };

    let common = match chart_type {
        // Proportional charts have no axes to grid or zoom.
        ChartType::Pie | ChartType::Donut => CommonChartOptions {
            show_grid: false,
            show_points: false,
            height: 400,
            width: 400,
            ..CommonChartOptions::default()
        },
        ChartType::Heatmap => CommonChartOptions {
            show_points: false,
            show_grid: false,
            ..CommonChartOptions::default()
        },
        ChartType::Bar => CommonChartOptions {
            show_points: false,
            ..CommonChartOptions::default()
        },
        ChartType::Line | ChartType::Area | ChartType::Scatter | ChartType::Cycleplot => {
            CommonChartOptions::default()
        }
    };

    ChartConfiguration {
        common,
        options,
        axis_configs: AxisBindings::default(),
        formatter_config: None,
    }
}

/// Parses a chart-type tag and builds its default configuration.
///
/// Unknown tags are a caller bug and surface as
/// [`ConfigError::UnsupportedChartType`](crate::error::ConfigError::UnsupportedChartType).
pub fn default_chart_config_for_tag(tag: &str) -> ConfigResult<ChartConfiguration> {
    let chart_type = tag.parse::<ChartType>()?;
    Ok(default_chart_config(chart_type))
}
