//! Unified error type for the milk-remap public API.
//!
//! [`RemapError`] covers shape validation and style parsing so application
//! code can propagate everything with `?`.

use crate::palette::ParseStyleError;
use std::fmt;

/// Unified error type for the milk-remap public API.
///
/// # Example
///
/// ```
/// use milk_remap::{RemapError, Style};
///
/// fn style_from_arg(arg: &str) -> Result<Style, RemapError> {
///     Ok(arg.parse::<Style>()?)
/// }
///
/// assert!(style_from_arg("inside").is_ok());
/// assert!(style_from_arg("attic").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemapError {
    /// Pixels must have 3 (RGB) or 4 (RGBA) bytes
    UnsupportedChannelCount {
        /// The rejected bytes-per-pixel value
        channels: usize,
    },
    /// Source buffer length does not equal `width * height * bytes_per_pixel`
    BufferLengthMismatch {
        /// Length implied by the dimensions and layout
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
    /// Destination buffer length does not equal the source length
    DestinationLengthMismatch {
        /// Source length
        expected: usize,
        /// Destination length actually supplied
        actual: usize,
    },
    /// Unknown style name
    ParseStyle(ParseStyleError),
}

impl fmt::Display for RemapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemapError::UnsupportedChannelCount { channels } => write!(
                f,
                "unsupported channel count {} (expected 3 or 4)",
                channels
            ),
            RemapError::BufferLengthMismatch { expected, actual } => write!(
                f,
                "buffer length mismatch: expected {} bytes, got {}",
                expected, actual
            ),
            RemapError::DestinationLengthMismatch { expected, actual } => write!(
                f,
                "destination length mismatch: expected {} bytes, got {}",
                expected, actual
            ),
            RemapError::ParseStyle(err) => write!(f, "style error: {}", err),
        }
    }
}

impl std::error::Error for RemapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RemapError::ParseStyle(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseStyleError> for RemapError {
    fn from(err: ParseStyleError) -> Self {
        RemapError::ParseStyle(err)
    }
}
