//! Schema configuration.

use crate::SchemaResult;
use serde::{Deserialize, Serialize};

/// Namespace of the root item when none is configured.
pub const DEFAULT_NAMESPACE: &str = "rootstocks";

/// Label stored on a freshly created root item when none is configured.
pub const DEFAULT_LABEL: &str = "rootstocks root item";

/// Where in the store the catalog lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Key of the top-level item every stock hangs under.
    pub namespace: String,
    /// Human-readable value written when the root item is first created.
    pub label: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl SchemaConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
