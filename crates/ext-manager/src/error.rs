use std::path::PathBuf;

/// Errors that can occur while loading extension metadata.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to parse a JSON manifest.
    #[error("failed to parse manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),

    /// Manifest file not found at the expected path.
    #[error("manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    /// I/O error reading manifest files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
