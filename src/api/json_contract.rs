use serde::{Deserialize, Serialize};

use crate::core::ChartConfiguration;
use crate::error::{ConfigError, ConfigResult};

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartConfiguration,
}

impl ChartConfiguration {
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidData(format!("failed to serialize config json: {e}")))
    }

    pub fn from_json_str(input: &str) -> ConfigResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ConfigError::InvalidData(format!("failed to parse config json: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ConfigResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ConfigError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts both a bare configuration and a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ConfigResult<Self> {
        if let Ok(config) = serde_json::from_str::<ChartConfiguration>(input) {
            return Ok(config);
        }
        let payload: ChartConfigJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ConfigError::InvalidData(format!("failed to parse config json payload: {e}"))
        })?;
        if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
            return Err(ConfigError::InvalidData(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}
