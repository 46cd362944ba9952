//! Milkify - recolor images into the milk/VHS palettes
//!
//! Host side of the filter: PNG I/O, presets and the command line.
//! The pixel work lives in the `milk-remap` crate.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
