//! chart-config-rs: declarative chart configuration engine.
//!
//! Models chart configurations for the supported chart types, keeps their
//! column bindings consistent with a changing dataset schema, resolves
//! per-axis formatting options into label functions and diffs saved
//! versions of a chart.

pub mod api;
pub mod binding;
pub mod core;
pub mod diff;
pub mod error;
pub mod format;
pub mod telemetry;

pub use api::ChartSession;
pub use crate::core::{ChartConfiguration, ChartType, ConfigPatch, DataHeader, default_chart_config};
pub use error::{ConfigError, ConfigResult};
