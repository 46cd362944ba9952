//! Error type for style parsing.

use std::fmt;

/// Error returned when a string does not name a known [`Style`](super::Style).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStyleError {
    /// The rejected input, verbatim.
    pub input: String,
}

impl fmt::Display for ParseStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown style '{}' (expected 'outside' or 'inside')",
            self.input
        )
    }
}

impl std::error::Error for ParseStyleError {}
