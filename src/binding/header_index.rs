use std::collections::HashMap;

use crate::core::DataHeader;

/// Lookup over the current header set.
///
/// A reference resolves by header id first, then by legacy id, then by
/// display name. When several headers share a key the first one wins.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex<'a> {
    by_id: HashMap<&'a str, &'a DataHeader>,
    by_legacy_id: HashMap<&'a str, &'a DataHeader>,
    by_name: HashMap<&'a str, &'a DataHeader>,
}

impl<'a> HeaderIndex<'a> {
    #[must_use]
    pub fn new(headers: &'a [DataHeader]) -> Self {
        let mut index = Self {
            by_id: HashMap::with_capacity(headers.len()),
            by_legacy_id: HashMap::new(),
            by_name: HashMap::with_capacity(headers.len()),
        };
        for header in headers {
            index.by_id.entry(header.id.as_str()).or_insert(header);
            if let Some(legacy_id) = header.legacy_id.as_deref() {
                index.by_legacy_id.entry(legacy_id).or_insert(header);
            }
            index.by_name.entry(header.name.as_str()).or_insert(header);
        }
        index
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    #[must_use]
    pub fn resolve(&self, reference: &str) -> Option<&'a DataHeader> {
        self.by_id
            .get(reference)
            .or_else(|| self.by_legacy_id.get(reference))
            .or_else(|| self.by_name.get(reference))
            .copied()
    }

    #[must_use]
    pub fn contains(&self, reference: &str) -> bool {
        self.resolve(reference).is_some()
    }

    /// Canonical header id for `reference`, or the reference itself when it
    /// does not resolve.
    #[must_use]
    pub fn canonical<'r>(&self, reference: &'r str) -> &'r str
    where
        'a: 'r,
    {
        self.resolve(reference)
            .map_or(reference, |header| header.id.as_str())
    }
}
