//! Error types for tdeskdroid

use std::fmt;
use std::path::PathBuf;

/// Main error type for theme conversion
#[derive(Debug)]
pub enum ConvertError {
    /// Theme archive could not be opened or is not a valid ZIP file
    Archive(String),

    /// Extracted theme has no `colors.tdesktop-theme`
    MissingManifest(PathBuf),

    /// Key translation map could not be found
    MissingTranslation(PathBuf),

    /// Background image could not be decoded or encoded
    Image(String),

    /// IO error
    IoError(std::io::Error),

    /// JSON serialization error
    JsonError(serde_json::Error),

    /// Generic error with message
    Generic(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Archive(msg) => write!(f, "Archive error: {msg}"),
            ConvertError::MissingManifest(path) => {
                write!(f, "Theme manifest not found: {}", path.display())
            }
            ConvertError::MissingTranslation(path) => {
                write!(f, "Key translation map not found: {}", path.display())
            }
            ConvertError::Image(msg) => write!(f, "Image error: {msg}"),
            ConvertError::IoError(err) => write!(f, "IO error: {err}"),
            ConvertError::JsonError(err) => write!(f, "JSON error: {err}"),
            ConvertError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::IoError(err) => Some(err),
            ConvertError::JsonError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::IoError(err)
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::JsonError(err)
    }
}

impl From<zip::result::ZipError> for ConvertError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io) => ConvertError::IoError(io),
            other => ConvertError::Archive(other.to_string()),
        }
    }
}

impl From<image::ImageError> for ConvertError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => ConvertError::IoError(io),
            other => ConvertError::Image(other.to_string()),
        }
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
