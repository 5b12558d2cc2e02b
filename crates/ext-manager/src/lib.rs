//! Extension records, manifests, and dependency resolution.
//!
//! This crate layers the concrete extension shapes on top of the identity
//! primitives in `ext-identity`: installed and gallery records, the JSON
//! manifests they carry, the gallery's control manifest with its denylist,
//! and the transitive dependency resolver that walks declared dependency
//! ids against the installed set.

pub mod error;
pub mod manifest;
pub mod record;
pub mod resolver;

pub use error::Error;
pub use manifest::{ControlManifest, ExtensionManifest, MaliciousEntry, malicious_ids};
pub use record::{
    ExtensionRecord, GalleryExtension, GalleryExtensionProperties, InstalledExtension,
};
pub use resolver::dependencies_of;
