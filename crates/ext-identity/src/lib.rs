//! Identity primitives for the extension manager.
//!
//! This crate answers one question in one place: when do two extension
//! records name the same extension? [`same_extension`] is the canonical
//! rule; [`ExtensionKey`] extends it to a versioned, platform-qualified
//! artifact key with a stable string encoding; [`group_by_extension`]
//! partitions collections into identity classes under the same rule.

pub mod grouping;
pub mod identifier;
pub mod key;
pub mod platform;

pub use grouping::group_by_extension;
pub use identifier::{ExtensionIdentifier, same_extension};
pub use key::ExtensionKey;
pub use platform::TargetPlatform;
