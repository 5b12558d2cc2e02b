//! Identity keys naming a concrete installed artifact.
//!
//! A key is the identifier plus the version plus the target platform, with
//! a stable string encoding used by external callers as a storage and
//! lookup key:
//!
//! ```text
//! {publisher}.{name}-{major}.{minor}.{patch}[-{targetPlatform}]
//! ```
//!
//! The platform suffix is only rendered for platform-specific builds.
//!
//! # Example
//!
//! ```
//! use ext_identity::{ExtensionKey, TargetPlatform};
//!
//! let key = ExtensionKey::parse("ms-python.python-2024.2.1-win32-x64").unwrap();
//! assert_eq!(key.id, "ms-python.python");
//! assert_eq!(key.version, "2024.2.1");
//! assert_eq!(key.target_platform, TargetPlatform::Win32X64);
//! assert_eq!(key.to_string(), "ms-python.python-2024.2.1-win32-x64");
//! ```

use crate::identifier::ids_match;
use crate::platform::TargetPlatform;

/// Identity key of a concrete extension artifact.
///
/// Equality applies the canonical identifier rule to the ids (so it is
/// case-insensitive on the id) and exact comparison to the version and the
/// target platform.
#[derive(Debug, Clone)]
pub struct ExtensionKey {
    /// `publisher.name` id.
    pub id: String,
    /// Exact version string of the artifact.
    pub version: String,
    /// Platform of the artifact; `Undefined` for platform-agnostic builds.
    pub target_platform: TargetPlatform,
}

impl ExtensionKey {
    /// Create a key from its parts.
    pub fn new(
        id: impl Into<String>,
        version: impl Into<String>,
        target_platform: TargetPlatform,
    ) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            target_platform,
        }
    }

    /// Parse the stable string form.
    ///
    /// The id segment must contain a `.` (the publisher boundary) and the
    /// version must be exactly three dot-separated decimal digit runs. Ids
    /// may themselves contain `-`, so the id is matched greedily: the
    /// rightmost `-` that leaves a valid `version[-platform]` remainder is
    /// the anchor. Returns `None` on any non-match; never panics.
    pub fn parse(text: &str) -> Option<Self> {
        for (idx, _) in text.rmatch_indices('-') {
            let id = &text[..idx];
            if !id.contains('.') {
                continue;
            }
            let tail = &text[idx + 1..];
            let (version, platform) = match tail.split_once('-') {
                Some((_, rest)) if rest.is_empty() => continue,
                Some((version, rest)) => (version, Some(rest)),
                None => (tail, None),
            };
            if !is_version(version) {
                continue;
            }
            return Some(Self {
                id: id.to_owned(),
                version: version.to_owned(),
                target_platform: platform
                    .map_or(TargetPlatform::Undefined, TargetPlatform::from_tag),
            });
        }
        None
    }
}

impl std::fmt::Display for ExtensionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.id, self.version)?;
        if self.target_platform != TargetPlatform::Undefined {
            write!(f, "-{}", self.target_platform)?;
        }
        Ok(())
    }
}

impl PartialEq for ExtensionKey {
    fn eq(&self, other: &Self) -> bool {
        ids_match(&self.id, &other.id)
            && self.version == other.version
            && self.target_platform == other.target_platform
    }
}

impl Eq for ExtensionKey {}

/// Exactly three dot-separated, non-empty decimal digit runs.
fn is_version(s: &str) -> bool {
    let mut segments = 0;
    for segment in s.split('.') {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        segments += 1;
    }
    segments == 3
}
