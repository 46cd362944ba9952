//! Palette tables and style selection
//!
//! This module provides the two fixed palettes, the band thresholds, and the
//! [`Style`] enum that indexes them.

mod error;
mod style;

pub use error::ParseStyleError;
pub use style::{
    Rgb, Style, Thresholds, DARK_MAX, HIGHLIGHT_MIN, PALETTE_INSIDE, PALETTE_LEN,
    PALETTE_OUTSIDE, SHADOW_MAX,
};
