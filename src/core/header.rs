use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Text,
    Number,
    Date,
    Boolean,
}

/// Dataset column descriptor pushed by the dataset layer.
///
/// Column references in a configuration resolve against `id`, then
/// `legacy_id`, then `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataHeader {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<String>,
    pub name: String,
    #[serde(default, rename = "type")]
    pub column_type: ColumnType,
    /// Parse pattern for date columns, strftime syntax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl DataHeader {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            id: id.into(),
            legacy_id: None,
            name: name.into(),
            column_type,
            date_format: None,
        }
    }

    /// Header whose id is its display name, as produced by plain CSV imports.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(name.clone(), name, ColumnType::Text)
    }

    #[must_use]
    pub fn with_legacy_id(mut self, legacy_id: impl Into<String>) -> Self {
        self.legacy_id = Some(legacy_id.into());
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = Some(date_format.into());
        self
    }
}
