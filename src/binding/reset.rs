use crate::core::{AxisBindings, ChartConfiguration, ChartType, ConfigPatch, KeyBindingsPatch};

/// Builds the patch clearing every column binding of the current chart type.
///
/// Only the binding section relevant to the type is included; merging the
/// patch leaves visual options untouched.
#[must_use]
pub fn build_reset_bindings_patch(config: &ChartConfiguration) -> ConfigPatch {
    let bindings = &config.axis_configs;
    match config.chart_type() {
        ChartType::Line | ChartType::Bar | ChartType::Area | ChartType::Scatter => {
            ConfigPatch::default().with_axis_configs(AxisBindings {
                x_axis_key: None,
                series_configs: Vec::new(),
                ..bindings.clone()
            })
        }
        ChartType::Pie | ChartType::Donut => {
            ConfigPatch::default().with_keys(KeyBindingsPatch::Pie {
                label_key: String::new(),
                value_key: String::new(),
            })
        }
        ChartType::Heatmap => ConfigPatch::default().with_keys(KeyBindingsPatch::Heatmap {
            x_axis_key: None,
            y_axis_key: None,
            value_key: None,
        }),
        ChartType::Cycleplot => ConfigPatch::default().with_axis_configs(AxisBindings {
            cycle_key: None,
            period_key: None,
            value_key: None,
            ..bindings.clone()
        }),
    }
}
