use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported chart type: `{0}`")]
    UnsupportedChartType(String),

    #[error("patch does not apply to a `{chart_type}` chart: {reason}")]
    PatchMismatch {
        chart_type: &'static str,
        reason: String,
    },

    #[error("column `{column}` is not available for series `{series_id}`")]
    ColumnUnavailable { column: String, series_id: String },

    #[error("column `{column}` is already bound to series `{series_id}`")]
    ColumnInUse { column: String, series_id: String },

    #[error("unknown series id: `{0}`")]
    UnknownSeries(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
