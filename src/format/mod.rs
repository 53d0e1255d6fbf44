//! Formatter resolution: turns declarative per-axis formatting options into
//! value-to-label functions for the rendering layer.

mod axis;
mod cache;
mod config;
mod date;
mod duration;
mod number;
mod spec;

pub use axis::{
    AxisFormatters, AxisValue, HorizontalFormatterFn, NumericFormatterFn,
    build_horizontal_formatter, build_vertical_formatter, resolve_axis_formatters,
    resolve_axis_formatters_with_date_input,
};
pub use cache::{AxisFormatterCache, FormatterCacheStats};
pub use config::{
    AxisFormatterConfig, CurrencyStyle, DEFAULT_CURRENCY_SYMBOL, DEFAULT_DATE_FORMAT,
    DEFAULT_DECIMAL_PLACES, DEFAULT_DURATION_FORMAT, FormatterConfig, FormatterType,
    MAX_DECIMAL_PLACES, NumberNotation,
};
pub use spec::{FormatterDiagnostics, FormatterSpec, PatternStatus, validate_formatter_config};
