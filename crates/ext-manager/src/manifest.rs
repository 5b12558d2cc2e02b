//! Extension and control manifest parsing.
//!
//! An extension manifest is the JSON metadata document shipped with every
//! extension: name, publisher, version, and the ids of the extensions it
//! depends on. The control manifest is gallery-supplied policy data; the
//! only part consumed here is its denylist, turned into a membership set by
//! [`malicious_ids`].
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "name": "python",
//!   "publisher": "ms-python",
//!   "version": "2024.2.1",
//!   "extensionDependencies": ["ms-toolsai.jupyter"]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Extension manifest: the metadata document shipped with an extension.
///
/// Fields beyond the ones modeled here are ignored on parse; validating
/// the full manifest schema is a separate concern handled upstream.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionManifest {
    /// Extension name, without the publisher prefix.
    pub name: String,
    /// Publisher name.
    pub publisher: String,
    /// Version string of this build.
    pub version: String,
    /// Ids of extensions this one depends on, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension_dependencies: Vec<String>,
}

impl ExtensionManifest {
    /// The `publisher.name` id this manifest implies.
    pub fn id(&self) -> String {
        format!("{}.{}", self.publisher, self.name)
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a manifest from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ManifestNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// Gallery-supplied policy data. Only the denylist is consumed here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ControlManifest {
    /// Denylisted extension entries, if the gallery published any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub malicious: Option<Vec<MaliciousEntry>>,
}

/// A single denylist entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MaliciousEntry {
    /// Raw extension id, stored without normalization.
    pub id: String,
}

impl ControlManifest {
    /// Parse a control manifest from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a control manifest from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ManifestNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// Build the denylist membership set from a control manifest.
///
/// Ids are taken verbatim, with no case normalization; comparing against
/// them is the caller's business. A manifest without a denylist yields an
/// empty set.
pub fn malicious_ids(manifest: &ControlManifest) -> HashSet<String> {
    let ids: HashSet<String> = manifest
        .malicious
        .iter()
        .flatten()
        .map(|entry| entry.id.clone())
        .collect();
    if !ids.is_empty() {
        tracing::debug!(count = ids.len(), "loaded extension denylist");
    }
    ids
}
