use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::binding::{
    CleanupReport, HeaderIndex, assign_series_column, assign_x_axis_column,
    build_reset_bindings_patch, cleanup_chart_config_with_report, migrate_legacy_column_indices,
};
use crate::core::{
    ChartConfiguration, ChartType, ConfigPatch, DataHeader, SeriesConfig, default_chart_config,
};
use crate::diff::{ChartVersion, VersionComparison, VersionSnapshot, compare_chart_versions};
use crate::error::ConfigResult;
use crate::format::{AxisFormatterCache, AxisFormatters, FormatterCacheStats};

/// Editing session of a single chart.
///
/// Holds the current configuration behind an [`Arc`]: every accepted edit
/// swaps in a new allocation and bumps [`Self::generation`], edits that
/// change nothing keep the old handle.
#[derive(Debug, Clone)]
pub struct ChartSession {
    config: Arc<ChartConfiguration>,
    headers: Vec<DataHeader>,
    generation: u64,
    formatter_cache: AxisFormatterCache,
}

impl ChartSession {
    #[must_use]
    pub fn new(config: ChartConfiguration) -> Self {
        Self {
            config: Arc::new(config),
            headers: Vec::new(),
            generation: 0,
            formatter_cache: AxisFormatterCache::new(),
        }
    }

    #[must_use]
    pub fn for_chart_type(chart_type: ChartType) -> Self {
        Self::new(default_chart_config(chart_type))
    }

    #[must_use]
    pub fn config(&self) -> &Arc<ChartConfiguration> {
        &self.config
    }

    #[must_use]
    pub fn headers(&self) -> &[DataHeader] {
        &self.headers
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.config.chart_type()
    }

    /// Merges `patch` into the configuration. Returns whether anything changed.
    pub fn apply_patch(&mut self, patch: &ConfigPatch) -> ConfigResult<bool> {
        if patch.is_empty() {
            return Ok(false);
        }
        let next = self.config.apply_patch(patch)?;
        Ok(self.replace(next))
    }

    /// Installs a new dataset schema and repairs the bindings against it.
    ///
    /// Positional bindings from older releases are migrated first.
    pub fn set_headers(&mut self, headers: Vec<DataHeader>) -> CleanupReport {
        self.headers = headers;
        let migrated = migrate_legacy_column_indices(&self.config, &self.headers).into_owned();
        let (repaired, report) = cleanup_chart_config_with_report(&migrated, &self.headers);
        let repaired = repaired.into_owned();
        if self.replace(repaired) {
            debug!(
                generation = self.generation,
                cleared = report.cleared.len(),
                "bindings repaired after schema change"
            );
        }
        report
    }

    /// Switches the chart type, starting over from the type's defaults.
    pub fn change_chart_type(&mut self, chart_type: ChartType) -> bool {
        if chart_type == self.chart_type() {
            return false;
        }
        info!(from = %self.chart_type(), to = %chart_type, "changing chart type");
        let next = self.config.with_chart_type(chart_type);
        self.replace(next)
    }

    /// Clears every column binding of the current chart type.
    pub fn reset_bindings(&mut self) -> ConfigResult<bool> {
        let patch = build_reset_bindings_patch(&self.config);
        self.apply_patch(&patch)
    }

    /// Appends a series bound to `column` (empty for an unbound placeholder)
    /// and returns its id.
    pub fn add_series(&mut self, name: impl Into<String>, column: &str) -> ConfigResult<String> {
        let series_configs = &self.config.axis_configs.series_configs;
        let id = (series_configs.len() + 1..)
            .map(|n| format!("series-{n}"))
            .find(|id| series_configs.iter().all(|s| &s.id != id))
            .unwrap_or_default();
        let placeholder = SeriesConfig::new(id.clone(), name, "", series_configs.len());
        let next = self.config.add_series(placeholder);
        let next = if column.is_empty() {
            next
        } else {
            assign_series_column(&next, &self.headers, &id, column)?
        };
        self.replace(next);
        Ok(id)
    }

    pub fn remove_series(&mut self, series_id: &str) -> ConfigResult<()> {
        let next = self.config.remove_series(series_id)?;
        self.replace(next);
        Ok(())
    }

    /// Binds `column` to a series; see [`assign_series_column`].
    pub fn assign_series_column(&mut self, series_id: &str, column: &str) -> ConfigResult<bool> {
        let next = assign_series_column(&self.config, &self.headers, series_id, column)?;
        Ok(self.replace(next))
    }

    pub fn assign_x_axis_column(&mut self, column: Option<&str>) -> ConfigResult<bool> {
        let next = assign_x_axis_column(&self.config, &self.headers, column)?;
        Ok(self.replace(next))
    }

    /// Formatters for the current configuration, rebuilt only when the
    /// resolved formatter specs change.
    ///
    /// The x-axis header's `dateFormat`, when present, is used to parse
    /// textual dates.
    pub fn formatters(&mut self) -> AxisFormatters {
        let index = HeaderIndex::new(&self.headers);
        let date_input = self
            .config
            .axis_configs
            .x_axis_key
            .as_deref()
            .and_then(|key| index.resolve(key))
            .and_then(|header| header.date_format.as_deref());
        self.formatter_cache
            .resolve_with_date_input(self.config.formatter_config.as_ref(), date_input)
    }

    #[must_use]
    pub fn formatter_cache_stats(&self) -> FormatterCacheStats {
        self.formatter_cache.stats()
    }

    /// Captures the current configuration as a version snapshot.
    pub fn snapshot(
        &self,
        name: impl Into<String>,
        description: Option<String>,
        dataset_id: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> ConfigResult<VersionSnapshot> {
        VersionSnapshot::capture(name, description, dataset_id, &self.config, timestamp)
    }

    /// Compares the current configuration, captured under `name` and
    /// `dataset_id`, with a historical version.
    pub fn compare_with(
        &self,
        name: impl Into<String>,
        description: Option<String>,
        dataset_id: impl Into<String>,
        historical: &ChartVersion,
    ) -> ConfigResult<VersionComparison> {
        let current = self.snapshot(name, description, dataset_id, Utc::now())?;
        Ok(compare_chart_versions(&current, historical))
    }

    fn replace(&mut self, next: ChartConfiguration) -> bool {
        if *self.config == next {
            return false;
        }
        self.config = Arc::new(next);
        self.generation = self.generation.saturating_add(1);
        true
    }
}
