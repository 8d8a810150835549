//! Standard exit codes for the tdeskdroid binary

use crate::exceptions::ConvertError;

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Generic error (avoid using - be more specific)
pub const EXIT_ERROR: i32 = 1;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;

/// Theme archive is unreadable or not a ZIP file
pub const EXIT_ARCHIVE_ERROR: i32 = 102;

/// Extracted theme has no color manifest
pub const EXIT_MANIFEST_ERROR: i32 = 103;

/// Background image could not be decoded or re-encoded
pub const EXIT_IMAGE_ERROR: i32 = 104;

/// Invalid command-line arguments
pub const EXIT_INVALID_ARGS: i32 = 105;

/// I/O error (file not found, permission denied, disk error)
pub const EXIT_IO_ERROR: i32 = 106;

/// Configuration error (missing key translation map)
pub const EXIT_CONFIG_ERROR: i32 = 109;

/// Map a conversion error to the exit code reported by the binary
pub fn exit_code_for(err: &ConvertError) -> i32 {
    match err {
        ConvertError::Archive(_) => EXIT_ARCHIVE_ERROR,
        ConvertError::MissingManifest(_) => EXIT_MANIFEST_ERROR,
        ConvertError::MissingTranslation(_) => EXIT_CONFIG_ERROR,
        ConvertError::Image(_) => EXIT_IMAGE_ERROR,
        ConvertError::IoError(_) => EXIT_IO_ERROR,
        ConvertError::JsonError(_) | ConvertError::Generic(_) => EXIT_ERROR,
    }
}
