//! Configuration of the ordering pass.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// What to do with ports that are not purely incoming or purely outgoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MalformedPortPolicy {
    /// Abort the pass with [`Error::MalformedPort`].
    #[default]
    Fail,
    /// Place such ports after all incoming ports, keeping their relative input order.
    PlaceLast,
}

/// What to do when the source node of a first incoming edge is missing from the previous layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnresolvedSourcePolicy {
    /// Order the element after everything resolved, keep input order among unresolved elements
    /// and log a warning.
    #[default]
    KeepInputOrder,
    /// Abort the pass with [`Error::UnresolvedSource`].
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct OrderOptions {
    pub sort_ports: bool,
    pub sort_nodes: bool,
    pub malformed_ports: MalformedPortPolicy,
    pub unresolved_sources: UnresolvedSourcePolicy,
}

impl Default for OrderOptions {
    fn default() -> Self {
        Self {
            sort_ports: true,
            sort_nodes: true,
            malformed_ports: MalformedPortPolicy::default(),
            unresolved_sources: UnresolvedSourcePolicy::default(),
        }
    }
}

impl OrderOptions {
    /// Parses options from a JSON object. Missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidOptions {
            message: e.to_string(),
        })
    }
}
