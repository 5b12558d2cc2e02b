//! Installed and gallery extension records.
//!
//! The two record shapes keep their version and target platform in
//! different places: an installed extension reads them from its manifest
//! and a top-level platform field, a gallery extension from the catalog
//! entry and its version properties. [`ExtensionRecord`] names the shape
//! explicitly so key extraction picks the right accessor instead of
//! probing fields at runtime.

use ext_identity::{ExtensionIdentifier, ExtensionKey, TargetPlatform};
use serde::{Deserialize, Serialize};

use crate::manifest::ExtensionManifest;

/// An extension present in the local install directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledExtension {
    /// Identifier of the installed extension.
    pub identifier: ExtensionIdentifier,
    /// The manifest shipped with the installed build.
    pub manifest: ExtensionManifest,
    /// Platform of the installed build.
    #[serde(default)]
    pub target_platform: TargetPlatform,
}

impl InstalledExtension {
    /// The identity key naming this installed artifact.
    pub fn key(&self) -> ExtensionKey {
        ExtensionRecord::Installed(self).key()
    }
}

/// An extension version as described by the remote gallery catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GalleryExtension {
    /// Identifier assigned by the gallery.
    pub identifier: ExtensionIdentifier,
    /// Version of this catalog entry.
    pub version: String,
    /// Version-specific metadata.
    #[serde(default)]
    pub properties: GalleryExtensionProperties,
}

impl GalleryExtension {
    /// The identity key naming this catalog artifact.
    pub fn key(&self) -> ExtensionKey {
        ExtensionRecord::Gallery(self).key()
    }
}

/// Version-specific gallery metadata.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryExtensionProperties {
    /// Platform of the published build; absent means platform-agnostic.
    #[serde(default)]
    pub target_platform: TargetPlatform,
}

/// Either record shape an identity key can be built from.
#[derive(Debug, Clone, Copy)]
pub enum ExtensionRecord<'a> {
    /// A locally installed extension.
    Installed(&'a InstalledExtension),
    /// A remote gallery catalog entry.
    Gallery(&'a GalleryExtension),
}

impl<'a> ExtensionRecord<'a> {
    /// The record's identifier.
    pub fn identifier(&self) -> &'a ExtensionIdentifier {
        match self {
            Self::Installed(ext) => &ext.identifier,
            Self::Gallery(ext) => &ext.identifier,
        }
    }

    /// The record's version string.
    pub fn version(&self) -> &'a str {
        match self {
            Self::Installed(ext) => &ext.manifest.version,
            Self::Gallery(ext) => &ext.version,
        }
    }

    /// The record's target platform.
    pub fn target_platform(&self) -> TargetPlatform {
        match self {
            Self::Installed(ext) => ext.target_platform,
            Self::Gallery(ext) => ext.properties.target_platform,
        }
    }

    /// Build the identity key naming this artifact.
    pub fn key(&self) -> ExtensionKey {
        ExtensionKey::new(
            self.identifier().id.clone(),
            self.version(),
            self.target_platform(),
        )
    }
}
