//! Error types for icon generation.

use std::io;
use std::path::PathBuf;

use image::ImageError;
use image::error::UnsupportedError;

pub type Result<T, E = IconError> = std::result::Result<T, E>;

/// Failure while producing icon files.
///
/// Rendering itself never fails; every variant concerns encoding or the
/// filesystem.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("PNG encoding is not available in this build: {0}")]
    EncoderUnavailable(UnsupportedError),
    #[error("Failed to encode PNG: {0}")]
    Encode(ImageError),
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("Failed to write {}: {source}", path.display())]
    WriteFile { path: PathBuf, source: io::Error },
}

/// Coarse grouping of [`IconError`] for choosing a remediation hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The imaging backend cannot produce the output format.
    DependencyMissing,
    /// The encoder rejected the rendered image.
    Encoding,
    /// A directory or file could not be written.
    Filesystem,
}

impl IconError {
    /// Classifies an image crate error, separating a missing codec from other
    /// encoder failures.
    pub fn from_image(err: ImageError) -> Self {
        match err {
            ImageError::Unsupported(unsupported) => Self::EncoderUnavailable(unsupported),
            other => Self::Encode(other),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::EncoderUnavailable(_) => FailureKind::DependencyMissing,
            Self::Encode(_) => FailureKind::Encoding,
            Self::CreateDir { .. } | Self::WriteFile { .. } => FailureKind::Filesystem,
        }
    }

    /// A short suggestion printed after the error.
    pub fn hint(&self) -> &'static str {
        match self.kind() {
            FailureKind::DependencyMissing => {
                "Rebuild with the `image` crate's `png` feature enabled."
            }
            FailureKind::Encoding => {
                "The rendered icon could not be encoded; nothing is wrong with the output directory."
            }
            FailureKind::Filesystem => {
                "Check that the output directory exists, is writable, and has free space."
            }
        }
    }
}
