//! Resource kinds and response types for the Sparkle API
//!
//! Collection responses are JSON objects keyed by entity primary key. Each
//! entry usually carries the `desired` and `current` state of the entity, but
//! the client only insists on the outer object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A tenant-scoped resource exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Instance,
    Cluster,
}

impl ResourceKind {
    /// Path segment naming the resource in endpoint URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Instance => "instance",
            ResourceKind::Cluster => "cluster",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque collection object returned for a tenant
pub type Collection = Map<String, Value>;

/// Desired/current pair Sparkle stores for every entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// State requested by the user
    #[serde(default)]
    pub desired: Option<Map<String, Value>>,
    /// State reported by the hosts
    #[serde(default)]
    pub current: Option<Map<String, Value>>,
}

impl Entity {
    /// Interpret a collection entry as an entity, if it has the expected shape
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        if !obj.contains_key("desired") && !obj.contains_key("current") {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// Whether the entity has been realized by a host
    pub fn is_current(&self) -> bool {
        self.current.is_some()
    }

    /// Look up a field, preferring the current state over the desired one
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.current
            .as_ref()
            .and_then(|c| c.get(name))
            .or_else(|| self.desired.as_ref().and_then(|d| d.get(name)))
    }
}

/// Error body Sparkle returns alongside non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorResponse {
    pub fn get_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}
