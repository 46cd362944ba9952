//! milk-remap: luminance-banded 3-color palette remapping
//!
//! This library recolors 8-bit RGB/RGBA pixels into one of two fixed
//! three-color palettes, picking the color from each pixel's brightness.
//! An optional "puntilism" mode makes some bands stochastic.
//!
//! # Quick Start
//!
//! The [`Milkifier`] builder is the primary entry point:
//!
//! ```
//! use milk_remap::{Milkifier, PixelLayout, Style};
//!
//! let pixels = vec![180u8, 180, 180];
//! let image = Milkifier::new(Style::Outside)
//!     .remap(&pixels, 1, 1, PixelLayout::Rgb)
//!     .unwrap();
//!
//! assert_eq!(image.as_bytes(), &[102, 0, 31]);
//! ```
//!
//! # Low-level Kernel
//!
//! [`remap_into`] and [`remap_in_place`] run the per-pixel kernel directly
//! with a caller-provided [`Coin`]:
//!
//! ```
//! use milk_remap::{remap_into, FixedCoin, PixelLayout, Style};
//!
//! let src = [60, 60, 60];
//! let mut dst = [0u8; 3];
//! remap_into(&src, &mut dst, 1, 1, PixelLayout::Rgb, Style::Inside, &mut FixedCoin);
//! assert_eq!(dst, [0, 0, 0]);
//! ```
//!
//! # Bands
//!
//! Brightness is `(R + G + B) / 3` with integer division. With palette
//! `P` and the style's `(mid_low, mid_high)` thresholds:
//!
//! | Brightness              | Heads  | Tails  |
//! |-------------------------|--------|--------|
//! | `0 ..= 25`              | `P[0]` | `P[0]` |
//! | `26 ..= 70`             | `P[0]` | `P[1]` |
//! | `71 ..= mid_low`        | `P[1]` | `P[0]` |
//! | `mid_low+1 ..= mid_high`| `P[1]` | `P[1]` |
//! | `mid_high+1 ..= 229`    | `P[0]` | `P[1]` |
//! | `230 ..= 255`           | `P[2]` | `P[2]` |
//!
//! Without dithering the coin always lands heads. With dithering it lands
//! heads 70% of the time, independently per pixel. Solid bands never draw.
//!
//! | Style     | `P[0]`  | `P[1]`        | `P[2]`          | Thresholds |
//! |-----------|---------|---------------|-----------------|------------|
//! | `Outside` | `0,0,0` | `102,0,31`    | `137,0,146`     | 120 / 200  |
//! | `Inside`  | `0,0,0` | `92,36,60`    | `203,43,43`     | 90 / 150   |
//!
//! # Parallelism
//!
//! With the default `parallel` feature, rows are processed on the rayon
//! pool. Each row owns its generator, seeded from the builder seed plus the
//! row index, so seeded output does not depend on scheduling.

pub mod api;
pub mod output;
pub mod palette;
pub mod remap;


pub use api::{FilterParameters, Milkifier, RemapError};
pub use output::MilkImage;
pub use palette::{ParseStyleError, Rgb, Style, Thresholds, PALETTE_INSIDE, PALETTE_OUTSIDE};
pub use remap::{
    brightness, palette_index, remap_in_place, remap_into, Band, Coin, FixedCoin, PixelLayout,
    WeightedCoin,
};
