//! Binding consistency: keeps column references valid as the dataset schema
//! changes and guards column exclusivity on edits.

mod availability;
mod cleanup;
mod header_index;
mod legacy;
mod reset;

pub use availability::{
    ColumnUsageIndex, assign_series_column, assign_x_axis_column, available_columns,
    is_column_available_for_series,
};
pub use cleanup::{
    BindingField, CleanupReport, ClearedBinding, cleanup_chart_config,
    cleanup_chart_config_with_report,
};
pub use header_index::HeaderIndex;
pub use legacy::migrate_legacy_column_indices;
pub use reset::build_reset_bindings_patch;
