use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ConfigError, ConfigResult};
use crate::format::FormatterConfig;

use super::{AxisBindings, ChartType, ChartVariant, CommonChartOptions, SeriesConfig};

/// Declarative configuration of one chart.
///
/// Serialized as a single flat camelCase object: common options and the
/// variant fields share the top level, the variant is tagged by `chartType`,
/// bindings live under `axisConfigs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfiguration {
    #[serde(flatten)]
    pub common: CommonChartOptions,
    #[serde(flatten)]
    pub options: ChartVariant,
    #[serde(default)]
    pub axis_configs: AxisBindings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter_config: Option<FormatterConfig>,
}

/// Binding keys of the chart types that do not use the series list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum KeyBindingsPatch {
    /// Pie and donut keys; empty strings mean unbound.
    Pie { label_key: String, value_key: String },
    Heatmap {
        x_axis_key: Option<String>,
        y_axis_key: Option<String>,
        value_key: Option<String>,
    },
}

/// Partial update merged into a configuration by [`ChartConfiguration::apply_patch`].
///
/// Every present section replaces the corresponding section wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common: Option<CommonChartOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ChartVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_configs: Option<AxisBindings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter_config: Option<FormatterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<KeyBindingsPatch>,
}

impl ConfigPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.common.is_none()
            && self.options.is_none()
            && self.axis_configs.is_none()
            && self.formatter_config.is_none()
            && self.keys.is_none()
    }

    #[must_use]
    pub fn with_common(mut self, common: CommonChartOptions) -> Self {
        self.common = Some(common);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartVariant) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn with_axis_configs(mut self, axis_configs: AxisBindings) -> Self {
        self.axis_configs = Some(axis_configs);
        self
    }

    #[must_use]
    pub fn with_formatter_config(mut self, formatter_config: FormatterConfig) -> Self {
        self.formatter_config = Some(formatter_config);
        self
    }

    #[must_use]
    pub fn with_keys(mut self, keys: KeyBindingsPatch) -> Self {
        self.keys = Some(keys);
        self
    }
}

impl ChartConfiguration {
    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.options.chart_type()
    }

    /// Produces a new configuration with `patch` merged in.
    ///
    /// Fails when the patch carries variant options or binding keys that
    /// belong to a different chart type; `self` is never modified.
    pub fn apply_patch(&self, patch: &ConfigPatch) -> ConfigResult<Self> {
        let chart_type = self.chart_type();
        let mut next = self.clone();

        if let Some(common) = &patch.common {
            next.common = common.clone();
        }
        if let Some(options) = &patch.options {
            if options.chart_type() != chart_type {
                return Err(ConfigError::PatchMismatch {
                    chart_type: chart_type.as_str(),
                    reason: format!("options are for a `{}` chart", options.chart_type()),
                });
            }
            next.options = options.clone();
        }
        if let Some(axis_configs) = &patch.axis_configs {
            next.axis_configs = axis_configs.clone();
        }
        if let Some(formatter_config) = &patch.formatter_config {
            next.formatter_config = Some(formatter_config.clone());
        }
        if let Some(keys) = &patch.keys {
            apply_key_bindings(&mut next.options, keys)?;
        }

        trace!(chart_type = %chart_type, "applied config patch");
        Ok(next)
    }

    /// Switching type discards the old configuration for a fresh default.
    #[must_use]
    pub fn with_chart_type(&self, chart_type: ChartType) -> Self {
        if chart_type == self.chart_type() {
            return self.clone();
        }
        super::default_chart_config(chart_type)
    }

    /// Returns a copy with `series` appended.
    #[must_use]
    pub fn add_series(&self, series: SeriesConfig) -> Self {
        let mut next = self.clone();
        next.axis_configs.series_configs.push(series);
        next
    }

    /// Returns a copy without the series `series_id`, also dropping it from
    /// the disabled-series sets.
    pub fn remove_series(&self, series_id: &str) -> ConfigResult<Self> {
        let position = self
            .axis_configs
            .series_configs
            .iter()
            .position(|s| s.id == series_id)
            .ok_or_else(|| ConfigError::UnknownSeries(series_id.to_owned()))?;

        let mut next = self.clone();
        next.axis_configs.series_configs.remove(position);
        match &mut next.options {
            ChartVariant::Line(options) => {
                options.disabled_lines.remove(series_id);
            }
            ChartVariant::Bar(options) => {
                options.disabled_bars.remove(series_id);
            }
            ChartVariant::Area(_)
            | ChartVariant::Scatter(_)
            | ChartVariant::Pie(_)
            | ChartVariant::Donut(_)
            | ChartVariant::Heatmap(_)
            | ChartVariant::Cycleplot(_) => {}
        }
        Ok(next)
    }
}

fn apply_key_bindings(options: &mut ChartVariant, keys: &KeyBindingsPatch) -> ConfigResult<()> {
    match (options, keys) {
        (
            ChartVariant::Pie(options) | ChartVariant::Donut(options),
            KeyBindingsPatch::Pie {
                label_key,
                value_key,
            },
        ) => {
            options.label_key.clone_from(label_key);
            options.value_key.clone_from(value_key);
            Ok(())
        }
        (
            ChartVariant::Heatmap(options),
            KeyBindingsPatch::Heatmap {
                x_axis_key,
                y_axis_key,
                value_key,
            },
        ) => {
            options.x_axis_key.clone_from(x_axis_key);
            options.y_axis_key.clone_from(y_axis_key);
            options.value_key.clone_from(value_key);
            Ok(())
        }
        (options, keys) => Err(ConfigError::PatchMismatch {
            chart_type: options.chart_type().as_str(),
            reason: match keys {
                KeyBindingsPatch::Pie { .. } => "label/value keys need a pie or donut chart",
                KeyBindingsPatch::Heatmap { .. } => "x/y/value keys need a heatmap chart",
            }
            .to_owned(),
        }),
    }
}
