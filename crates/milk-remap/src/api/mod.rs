//! Public API for the milk-remap crate.
//!
//! This module provides the high-level API: the [`Milkifier`] builder and
//! the [`RemapError`] unified error type.

mod builder;
mod error;

pub use builder::{FilterParameters, Milkifier};
pub use error::RemapError;
