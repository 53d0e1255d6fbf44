use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::ChartConfiguration;
use crate::error::{ConfigError, ConfigResult};

use super::tree::{DiffTree, diff_objects};

/// Saved state of a chart, as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSnapshot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Chart type tag. Kept as text so snapshots written by other releases
    /// still load.
    #[serde(rename = "type")]
    pub chart_type: String,
    pub dataset_id: String,
    pub config: Value,
    pub timestamp: DateTime<Utc>,
}

impl VersionSnapshot {
    /// Captures the live configuration of a chart.
    pub fn capture(
        name: impl Into<String>,
        description: Option<String>,
        dataset_id: impl Into<String>,
        config: &ChartConfiguration,
        timestamp: DateTime<Utc>,
    ) -> ConfigResult<Self> {
        let value = serde_json::to_value(config)
            .map_err(|e| ConfigError::InvalidData(format!("failed to serialize config: {e}")))?;
        Ok(Self {
            name: name.into(),
            description,
            chart_type: config.chart_type().as_str().to_owned(),
            dataset_id: dataset_id.into(),
            config: value,
            timestamp,
        })
    }

    /// Fields that take part in a version comparison.
    fn projection(&self) -> Map<String, Value> {
        let mut projection = Map::new();
        projection.insert("name".to_owned(), Value::String(self.name.clone()));
        projection.insert(
            "description".to_owned(),
            self.description.clone().map_or(Value::Null, Value::String),
        );
        projection.insert("type".to_owned(), Value::String(self.chart_type.clone()));
        projection.insert("datasetId".to_owned(), Value::String(self.dataset_id.clone()));
        projection.insert("config".to_owned(), self.config.clone());
        projection
    }
}

/// Historical entry of a chart's version history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartVersion {
    #[serde(flatten)]
    pub snapshot: VersionSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

impl ChartVersion {
    #[must_use]
    pub fn new(snapshot: VersionSnapshot) -> Self {
        Self {
            snapshot,
            image_url: None,
            version: None,
        }
    }

    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }
}

/// Result of comparing the current chart with one of its past versions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionComparison {
    pub current: VersionSnapshot,
    pub historical: ChartVersion,
    /// Empty when nothing differs.
    pub differences: DiffTree,
}

impl VersionComparison {
    #[must_use]
    pub fn has_differences(&self) -> bool {
        !self.differences.is_empty()
    }
}

/// Diffs `name`, `description`, `type`, `datasetId` and `config` of two
/// versions. Timestamps and preview images never count as changes.
#[must_use]
pub fn compare_chart_versions(
    current: &VersionSnapshot,
    historical: &ChartVersion,
) -> VersionComparison {
    let differences = diff_objects(&current.projection(), &historical.snapshot.projection());
    debug!(
        name = %current.name,
        historical_version = ?historical.version,
        changed_fields = differences.len(),
        "compared chart versions"
    );
    VersionComparison {
        current: current.clone(),
        historical: historical.clone(),
        differences,
    }
}
