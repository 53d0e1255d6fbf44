//! Editing session facade and JSON contracts.

mod json_contract;
mod session;

pub use json_contract::{CHART_CONFIG_JSON_SCHEMA_V1, ChartConfigJsonContractV1};
pub use session::ChartSession;
