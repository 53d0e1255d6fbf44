use std::borrow::Cow;

use tracing::{debug, warn};

use crate::core::{ChartConfiguration, DataHeader};

use super::{ColumnUsageIndex, HeaderIndex};

/// Converts positional `columnIndex` bindings written by older releases into
/// column ids.
///
/// Only series without a `dataColumn` are migrated. A position that is out of
/// range or whose column is already taken leaves the series unbound.
#[must_use]
pub fn migrate_legacy_column_indices<'a>(
    config: &'a ChartConfiguration,
    headers: &[DataHeader],
) -> Cow<'a, ChartConfiguration> {
    let pending: Vec<(usize, usize)> = config
        .axis_configs
        .series_configs
        .iter()
        .enumerate()
        .filter(|(_, series)| !series.is_bound())
        .filter_map(|(position, series)| series.column_index.map(|index| (position, index)))
        .collect();
    if pending.is_empty() || headers.is_empty() {
        return Cow::Borrowed(config);
    }

    let index = HeaderIndex::new(headers);
    let mut next = config.clone();
    let mut migrated = 0usize;
    for (position, column_index) in pending {
        let Some(header) = headers.get(column_index) else {
            warn!(
                column_index,
                header_count = headers.len(),
                "legacy column index out of range"
            );
            next.axis_configs.series_configs[position].column_index = None;
            continue;
        };

        let series_id = next.axis_configs.series_configs[position].id.clone();
        let available =
            ColumnUsageIndex::new(&next.axis_configs, &index).is_available(&header.id, &series_id);
        let series = &mut next.axis_configs.series_configs[position];
        series.column_index = None;
        if available {
            series.data_column.clone_from(&header.id);
            migrated += 1;
        }
    }

    debug!(migrated, "migrated legacy column index bindings");
    Cow::Owned(next)
}
