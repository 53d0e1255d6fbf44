use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{ChartConfiguration, ChartVariant, DataHeader};

use super::HeaderIndex;

/// Configuration field holding a column reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BindingField {
    XAxis,
    Series { id: String },
    CycleKey,
    PeriodKey,
    CycleValueKey,
    PieLabelKey,
    PieValueKey,
    HeatmapXAxisKey,
    HeatmapYAxisKey,
    HeatmapValueKey,
}

impl fmt::Display for BindingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XAxis => f.write_str("axisConfigs.xAxisKey"),
            Self::Series { id } => write!(f, "axisConfigs.seriesConfigs[{id}]"),
            Self::CycleKey => f.write_str("axisConfigs.cycleKey"),
            Self::PeriodKey => f.write_str("axisConfigs.periodKey"),
            Self::CycleValueKey => f.write_str("axisConfigs.valueKey"),
            Self::PieLabelKey => f.write_str("labelKey"),
            Self::PieValueKey => f.write_str("valueKey"),
            Self::HeatmapXAxisKey => f.write_str("xAxisKey"),
            Self::HeatmapYAxisKey => f.write_str("yAxisKey"),
            Self::HeatmapValueKey => f.write_str("valueKey"),
        }
    }
}

/// A binding the cleanup pass cleared, with the stale column it pointed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearedBinding {
    pub field: BindingField,
    pub column: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CleanupReport {
    pub cleared: SmallVec<[ClearedBinding; 4]>,
}

impl CleanupReport {
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.cleared.is_empty()
    }

    #[must_use]
    pub fn removed_series(&self) -> Vec<&str> {
        self.cleared
            .iter()
            .filter_map(|binding| match &binding.field {
                BindingField::Series { id } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Clears every column reference of `config` that no longer resolves
/// against `headers`.
///
/// Returns the input borrowed when nothing needed repair, so callers can skip
/// downstream updates. An empty header set is treated as "schema not loaded"
/// and never clears anything.
#[must_use]
pub fn cleanup_chart_config<'a>(
    config: &'a ChartConfiguration,
    headers: &[DataHeader],
) -> Cow<'a, ChartConfiguration> {
    cleanup_chart_config_with_report(config, headers).0
}

/// Same as [`cleanup_chart_config`], also listing what was cleared.
pub fn cleanup_chart_config_with_report<'a>(
    config: &'a ChartConfiguration,
    headers: &[DataHeader],
) -> (Cow<'a, ChartConfiguration>, CleanupReport) {
    if headers.is_empty() {
        debug!(
            chart_type = %config.chart_type(),
            "skipping binding cleanup: header set is empty"
        );
        return (Cow::Borrowed(config), CleanupReport::default());
    }

    let mut pass = RepairPass {
        index: HeaderIndex::new(headers),
        report: CleanupReport::default(),
    };
    let mut out = Cow::Borrowed(config);

    let bindings = &config.axis_configs;
    if pass.is_stale(bindings.x_axis_key.as_deref(), BindingField::XAxis) {
        out.to_mut().axis_configs.x_axis_key = None;
    }
    if pass.is_stale(bindings.cycle_key.as_deref(), BindingField::CycleKey) {
        out.to_mut().axis_configs.cycle_key = None;
    }
    if pass.is_stale(bindings.period_key.as_deref(), BindingField::PeriodKey) {
        out.to_mut().axis_configs.period_key = None;
    }
    if pass.is_stale(bindings.value_key.as_deref(), BindingField::CycleValueKey) {
        out.to_mut().axis_configs.value_key = None;
    }

    let stale_series: Vec<&str> = bindings
        .series_configs
        .iter()
        .filter(|series| {
            pass.is_stale(
                Some(series.data_column.as_str()),
                BindingField::Series {
                    id: series.id.clone(),
                },
            )
        })
        .map(|series| series.id.as_str())
        .collect();
    if !stale_series.is_empty() {
        let next = out.to_mut();
        let live = |id: &String| !stale_series.contains(&id.as_str());
        next.axis_configs
            .series_configs
            .retain(|series| live(&series.id));
        // Hidden-series toggles go with the series they hide.
        match &mut next.options {
            ChartVariant::Line(options) => options.disabled_lines.retain(live),
            ChartVariant::Bar(options) => options.disabled_bars.retain(live),
            ChartVariant::Area(_)
            | ChartVariant::Scatter(_)
            | ChartVariant::Pie(_)
            | ChartVariant::Donut(_)
            | ChartVariant::Heatmap(_)
            | ChartVariant::Cycleplot(_) => {}
        }
    }

    match &config.options {
        ChartVariant::Pie(options) | ChartVariant::Donut(options) => {
            let label_stale =
                pass.is_stale(Some(options.label_key.as_str()), BindingField::PieLabelKey);
            let value_stale =
                pass.is_stale(Some(options.value_key.as_str()), BindingField::PieValueKey);
            if label_stale || value_stale {
                if let ChartVariant::Pie(next) | ChartVariant::Donut(next) =
                    &mut out.to_mut().options
                {
                    if label_stale {
                        next.label_key.clear();
                    }
                    if value_stale {
                        next.value_key.clear();
                    }
                }
            }
        }
        ChartVariant::Heatmap(options) => {
            let x_stale = pass.is_stale(options.x_axis_key.as_deref(), BindingField::HeatmapXAxisKey);
            let y_stale = pass.is_stale(options.y_axis_key.as_deref(), BindingField::HeatmapYAxisKey);
            let value_stale =
                pass.is_stale(options.value_key.as_deref(), BindingField::HeatmapValueKey);
            if x_stale || y_stale || value_stale {
                if let ChartVariant::Heatmap(next) = &mut out.to_mut().options {
                    if x_stale {
                        next.x_axis_key = None;
                    }
                    if y_stale {
                        next.y_axis_key = None;
                    }
                    if value_stale {
                        next.value_key = None;
                    }
                }
            }
        }
        ChartVariant::Line(_)
        | ChartVariant::Bar(_)
        | ChartVariant::Area(_)
        | ChartVariant::Scatter(_)
        | ChartVariant::Cycleplot(_) => {}
    }

    let report = pass.report;
    if report.changed() {
        debug!(
            chart_type = %config.chart_type(),
            cleared = report.cleared.len(),
            removed_series = stale_series.len(),
            "cleared stale column bindings"
        );
    }
    debug_assert_eq!(report.changed(), matches!(out, Cow::Owned(_)));
    (out, report)
}

struct RepairPass<'h> {
    index: HeaderIndex<'h>,
    report: CleanupReport,
}

impl RepairPass<'_> {
    /// Records and reports a bound reference that resolves to no header.
    /// Unbound fields (absent or empty) are never stale.
    fn is_stale(&mut self, reference: Option<&str>, field: BindingField) -> bool {
        let Some(column) = reference.filter(|column| !column.is_empty()) else {
            return false;
        };
        if self.index.contains(column) {
            return false;
        }
        trace!(%field, column, "column binding no longer resolves");
        self.report.cleared.push(ClearedBinding {
            field,
            column: column.to_owned(),
        });
        true
    }
}
