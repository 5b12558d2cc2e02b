//! Target platform tags for platform-specific extension builds.
//!
//! The gallery publishes platform-specific builds under tags like
//! `win32-x64` or `darwin-arm64`. Identity logic treats the tag as opaque:
//! nothing here interprets it beyond equality. [`TargetPlatform::Undefined`]
//! is the sentinel for platform-agnostic builds.

use serde::{Deserialize, Serialize};

/// Platform/architecture tag of an extension build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum TargetPlatform {
    Win32X64,
    Win32Arm64,
    LinuxX64,
    LinuxArm64,
    LinuxArmhf,
    AlpineX64,
    AlpineArm64,
    DarwinX64,
    DarwinArm64,
    Web,
    /// A single build published for every platform.
    Universal,
    /// A tag this build of the manager does not recognize.
    Unknown,
    /// No platform declared; the build is platform-agnostic.
    #[default]
    Undefined,
}

impl TargetPlatform {
    /// The canonical string tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win32X64 => "win32-x64",
            Self::Win32Arm64 => "win32-arm64",
            Self::LinuxX64 => "linux-x64",
            Self::LinuxArm64 => "linux-arm64",
            Self::LinuxArmhf => "linux-armhf",
            Self::AlpineX64 => "alpine-x64",
            Self::AlpineArm64 => "alpine-arm64",
            Self::DarwinX64 => "darwin-x64",
            Self::DarwinArm64 => "darwin-arm64",
            Self::Web => "web",
            Self::Universal => "universal",
            Self::Unknown => "unknown",
            Self::Undefined => "undefined",
        }
    }

    /// Parse a tag, mapping anything unrecognized to [`Self::Unknown`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "win32-x64" => Self::Win32X64,
            "win32-arm64" => Self::Win32Arm64,
            "linux-x64" => Self::LinuxX64,
            "linux-arm64" => Self::LinuxArm64,
            "linux-armhf" => Self::LinuxArmhf,
            "alpine-x64" => Self::AlpineX64,
            "alpine-arm64" => Self::AlpineArm64,
            "darwin-x64" => Self::DarwinX64,
            "darwin-arm64" => Self::DarwinArm64,
            "web" => Self::Web,
            "universal" => Self::Universal,
            "undefined" => Self::Undefined,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for TargetPlatform {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<TargetPlatform> for String {
    fn from(platform: TargetPlatform) -> Self {
        platform.as_str().to_owned()
    }
}

impl std::fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
