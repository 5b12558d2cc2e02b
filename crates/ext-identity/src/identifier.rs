//! Extension identifiers and the canonical equality rule.
//!
//! An extension is named by a human-readable `publisher.name` id and, once
//! a gallery has seen it, an optional registry-assigned uuid. Everywhere
//! two extensions must be compared — grouping, dependency matching, key
//! equality — the comparison goes through [`same_extension`] so the rule
//! cannot drift between call sites.

use serde::{Deserialize, Serialize};

/// Identifier of an extension: the `publisher.name` id plus an optional
/// gallery-assigned uuid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtensionIdentifier {
    /// Human-readable `publisher.name` token.
    pub id: String,
    /// Globally unique identity assigned by the gallery, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

impl ExtensionIdentifier {
    /// Create an identifier with no uuid.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            uuid: None,
        }
    }

    /// Create an identifier carrying a gallery uuid.
    pub fn with_uuid(id: impl Into<String>, uuid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            uuid: Some(uuid.into()),
        }
    }
}

impl std::fmt::Display for ExtensionIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}

/// Canonical equality between two extension identifiers.
///
/// When both sides carry a uuid, the uuids alone decide: records sharing a
/// uuid are the same extension even if their ids disagree in spelling or
/// case, and records with different uuids are different extensions even if
/// their ids match. When at least one side lacks a uuid, ids are compared
/// exactly first, then case-insensitively.
///
/// Total and side-effect free; reflexive and symmetric.
pub fn same_extension(a: &ExtensionIdentifier, b: &ExtensionIdentifier) -> bool {
    if let (Some(a_uuid), Some(b_uuid)) = (&a.uuid, &b.uuid) {
        return a_uuid == b_uuid;
    }
    ids_match(&a.id, &b.id)
}

/// Id comparison used when no authoritative uuid pair is available:
/// exact match, falling back to case-insensitive match.
pub(crate) fn ids_match(a: &str, b: &str) -> bool {
    a == b || a.eq_ignore_ascii_case(b)
}
