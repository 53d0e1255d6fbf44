use std::collections::HashMap;

use crate::core::{AxisBindings, ChartConfiguration, DataHeader, SeriesConfig};
use crate::error::{ConfigError, ConfigResult};

use super::HeaderIndex;

/// Whether `column` may be bound to the series `series_id`.
///
/// A column is legal when it is not the x-axis column and it is either
/// already bound to `series_id` or not bound to any other series. Clearing a
/// binding (empty column) is always legal.
#[must_use]
pub fn is_column_available_for_series(
    series: &[SeriesConfig],
    bindings: &AxisBindings,
    column: &str,
    series_id: &str,
) -> bool {
    if column.is_empty() {
        return true;
    }
    if bindings.x_axis_key.as_deref() == Some(column) {
        return false;
    }
    series
        .iter()
        .filter(|s| s.is_bound() && s.data_column == column)
        .all(|s| s.id == series_id)
}

/// Reverse column → series index for pickers that test many candidates.
///
/// References are normalized to header ids, so a series bound by column name
/// still blocks the header it names.
#[derive(Debug, Clone, Default)]
pub struct ColumnUsageIndex<'a> {
    x_axis: Option<&'a str>,
    owners: HashMap<&'a str, &'a str>,
}

impl<'a> ColumnUsageIndex<'a> {
    #[must_use]
    pub fn new(bindings: &'a AxisBindings, headers: &HeaderIndex<'a>) -> Self {
        let mut owners = HashMap::with_capacity(bindings.series_configs.len());
        for series in bindings.series_configs.iter().filter(|s| s.is_bound()) {
            owners
                .entry(headers.canonical(series.data_column.as_str()))
                .or_insert(series.id.as_str());
        }
        Self {
            x_axis: bindings
                .x_axis_key
                .as_deref()
                .filter(|key| !key.is_empty())
                .map(|key| headers.canonical(key)),
            owners,
        }
    }

    #[must_use]
    pub fn owner(&self, column: &str) -> Option<&'a str> {
        self.owners.get(column).copied()
    }

    #[must_use]
    pub fn is_available(&self, column: &str, series_id: &str) -> bool {
        if self.x_axis == Some(column) {
            return false;
        }
        self.owner(column).is_none_or(|owner| owner == series_id)
    }
}

/// Headers a picker may offer for `series_id`, in header order.
#[must_use]
pub fn available_columns<'a>(
    headers: &'a [DataHeader],
    bindings: &AxisBindings,
    series_id: &str,
) -> Vec<&'a DataHeader> {
    let index = HeaderIndex::new(headers);
    let usage = ColumnUsageIndex::new(bindings, &index);
    headers
        .iter()
        .filter(|header| usage.is_available(&header.id, series_id))
        .collect()
}

/// Binds `column` to the series `series_id`, refusing columns the
/// availability check rejects.
///
/// `column` may name a header by id, legacy id or display name; it is stored
/// as the header id, so two spellings of one column cannot both be bound.
/// References that match no header are compared verbatim.
pub fn assign_series_column(
    config: &ChartConfiguration,
    headers: &[DataHeader],
    series_id: &str,
    column: &str,
) -> ConfigResult<ChartConfiguration> {
    let bindings = &config.axis_configs;
    if bindings.series(series_id).is_none() {
        return Err(ConfigError::UnknownSeries(series_id.to_owned()));
    }
    let index = HeaderIndex::new(headers);
    let canonical = canonical_column(&index, column);
    let usage = ColumnUsageIndex::new(bindings, &index);
    if !canonical.is_empty() && !usage.is_available(canonical, series_id) {
        return Err(ConfigError::ColumnUnavailable {
            column: column.to_owned(),
            series_id: series_id.to_owned(),
        });
    }

    let mut next = config.clone();
    if let Some(series) = next
        .axis_configs
        .series_configs
        .iter_mut()
        .find(|s| s.id == series_id)
    {
        series.data_column = canonical.to_owned();
        series.column_index = None;
    }
    Ok(next)
}

/// Sets or clears the x-axis column. A column owned by a series, under any
/// of its header aliases, is refused.
pub fn assign_x_axis_column(
    config: &ChartConfiguration,
    headers: &[DataHeader],
    column: Option<&str>,
) -> ConfigResult<ChartConfiguration> {
    let index = HeaderIndex::new(headers);
    let column = column.filter(|c| !c.is_empty());
    let canonical = column.map(|c| canonical_column(&index, c));
    if let (Some(column), Some(canonical)) = (column, canonical) {
        if let Some(owner) = ColumnUsageIndex::new(&config.axis_configs, &index).owner(canonical) {
            return Err(ConfigError::ColumnInUse {
                column: column.to_owned(),
                series_id: owner.to_owned(),
            });
        }
    }

    let mut next = config.clone();
    next.axis_configs.x_axis_key = canonical.map(str::to_owned);
    Ok(next)
}

/// An empty reference stays empty even when some header has an empty name.
fn canonical_column<'a>(index: &HeaderIndex<'a>, column: &'a str) -> &'a str {
    if column.is_empty() {
        column
    } else {
        index.canonical(column)
    }
}
