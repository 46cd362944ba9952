//! Brightness bands.
//!
//! Every pixel falls in exactly one band. Solid bands always map to one
//! palette index; blend bands ask the [`Coin`] and pick between two.

use super::coin::Coin;
use crate::palette::{Thresholds, DARK_MAX, HIGHLIGHT_MIN, SHADOW_MAX};

/// Integer mean of the three color channels, truncated.
///
/// # Example
/// ```
/// use milk_remap::brightness;
/// assert_eq!(brightness(255, 255, 255), 255);
/// assert_eq!(brightness(10, 10, 12), 10);
/// ```
#[inline]
pub fn brightness(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// A contiguous brightness interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// `[0, 25]`: always the darkest entry.
    Shadow,
    /// `(25, 70]`: heads darkest, tails mid.
    DarkBlend,
    /// `(70, mid_low]`: heads mid, tails darkest.
    MidBlend,
    /// `(mid_low, mid_high]`: always the mid entry.
    Mid,
    /// `(mid_high, 230)`: heads darkest, tails mid.
    HighBlend,
    /// `[230, 255]`: always the brightest entry.
    Highlight,
}

impl Band {
    /// Classify a brightness value. The first matching band wins.
    #[inline]
    pub fn classify(brightness: u8, thresholds: Thresholds) -> Band {
        if brightness <= SHADOW_MAX {
            Band::Shadow
        } else if brightness <= DARK_MAX {
            Band::DarkBlend
        } else if brightness <= thresholds.mid_low {
            Band::MidBlend
        } else if brightness <= thresholds.mid_high {
            Band::Mid
        } else if brightness < HIGHLIGHT_MIN {
            Band::HighBlend
        } else {
            Band::Highlight
        }
    }

    /// Whether this band consults the coin.
    #[inline]
    pub fn is_dithered(self) -> bool {
        matches!(self, Band::DarkBlend | Band::MidBlend | Band::HighBlend)
    }

    /// Palette indices chosen on heads and on tails.
    ///
    /// `MidBlend` is reversed relative to the other blend bands.
    #[inline]
    pub fn choices(self) -> (usize, usize) {
        match self {
            Band::Shadow => (0, 0),
            Band::DarkBlend => (0, 1),
            Band::MidBlend => (1, 0),
            Band::Mid => (1, 1),
            Band::HighBlend => (0, 1),
            Band::Highlight => (2, 2),
        }
    }

    /// Pick a palette index, flipping the coin only for dithered bands.
    #[inline]
    pub fn resolve<C: Coin + ?Sized>(self, coin: &mut C) -> usize {
        let (heads, tails) = self.choices();
        if !self.is_dithered() || coin.flip() {
            heads
        } else {
            tails
        }
    }
}
