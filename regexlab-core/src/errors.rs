//! errors.rs - Custom error types for the regexlab-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `regexlab-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RegexLabError {
    #[error("Failed to compile pattern: {0}")]
    PatternCompile(#[from] regex::Error),

    #[error("Replacement failed: {0}")]
    Replacement(String),

    #[error("Share field '{0}' could not be decoded")]
    ShareDecode(String),

    #[error("Preset validation failed:\n{0}")]
    PresetValidation(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
