use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

/// Resolves message identifiers to localized display names.
///
/// Rule tables refer to units, options, and items by id; the UI layer
/// owns the actual display strings. The validation engine only needs
/// this one capability, supplied by the caller. An id with no entry is
/// a ruleset-authoring defect, not a runtime condition — callers fall
/// back to the raw id rather than failing.
pub trait NameResolver {
    /// Look up the display name for an identifier.
    fn resolve(&self, id: &str) -> Option<String>;
}

impl NameResolver for HashMap<String, String> {
    fn resolve(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

/// A flat id → display-name catalog backed by a JSON object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from a JSON object of id → name pairs.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.messages.insert(id.into(), name.into());
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl NameResolver for MessageCatalog {
    fn resolve(&self, id: &str) -> Option<String> {
        self.messages.get(id).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MessageCatalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
