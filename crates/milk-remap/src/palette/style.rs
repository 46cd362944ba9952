//! Styles, their palettes and their band thresholds.
//!
//! Each [`Style`] selects one 3-entry palette and one pair of mid-band
//! thresholds. Both are plain constant tables; nothing is computed at runtime.

use std::fmt;
use std::str::FromStr;

use super::error::ParseStyleError;

/// An 8-bit sRGB palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a new color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as an uppercase `#RRGGBB` hex string.
    ///
    /// # Example
    /// ```
    /// use milk_remap::Rgb;
    /// assert_eq!(Rgb::new(102, 0, 31).to_hex(), "#66001F");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Number of entries in every palette.
pub const PALETTE_LEN: usize = 3;

/// Palette for [`Style::Outside`], darkest to brightest.
pub const PALETTE_OUTSIDE: [Rgb; PALETTE_LEN] = [
    Rgb::new(0, 0, 0),
    Rgb::new(102, 0, 31),
    Rgb::new(137, 0, 146),
];

/// Palette for [`Style::Inside`], darkest to brightest.
pub const PALETTE_INSIDE: [Rgb; PALETTE_LEN] = [
    Rgb::new(0, 0, 0),
    Rgb::new(92, 36, 60),
    Rgb::new(203, 43, 43),
];

/// Upper (inclusive) brightness bound of the always-darkest band.
pub const SHADOW_MAX: u8 = 25;

/// Upper (inclusive) brightness bound of the dark dithered band.
pub const DARK_MAX: u8 = 70;

/// Brightness at which the highlight band starts (inclusive).
pub const HIGHLIGHT_MIN: u8 = 230;

/// The style-dependent pair of mid-band thresholds.
///
/// `mid_low` closes the swapped-preference dithered band and `mid_high`
/// closes the solid mid-tone band. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Upper bound of the `(DARK_MAX, mid_low]` band
    pub mid_low: u8,
    /// Upper bound of the `(mid_low, mid_high]` band
    pub mid_high: u8,
}

/// Which game area the output should imitate.
///
/// `Outside` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Purple-tinted palette with the wider mid band (120/200).
    #[default]
    Outside,
    /// Red-tinted palette with the narrower mid band (90/150).
    Inside,
}

impl Style {
    /// All styles, in declaration order.
    pub const ALL: [Style; 2] = [Style::Outside, Style::Inside];

    /// The palette for this style.
    #[inline]
    pub fn palette(self) -> &'static [Rgb; PALETTE_LEN] {
        match self {
            Style::Outside => &PALETTE_OUTSIDE,
            Style::Inside => &PALETTE_INSIDE,
        }
    }

    /// The mid-band thresholds for this style.
    #[inline]
    pub const fn thresholds(self) -> Thresholds {
        match self {
            Style::Outside => Thresholds {
                mid_low: 120,
                mid_high: 200,
            },
            Style::Inside => Thresholds {
                mid_low: 90,
                mid_high: 150,
            },
        }
    }

    /// Short lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Style::Outside => "outside",
            Style::Inside => "inside",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    /// Parse a style name.
    ///
    /// Accepts `outside` / `inside` case-insensitively, with or without a
    /// `style-` prefix (the identifiers image editors use for the choice).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let name = lowered.strip_prefix("style-").unwrap_or(&lowered);
        match name {
            "outside" => Ok(Style::Outside),
            "inside" => Ok(Style::Inside),
            _ => Err(ParseStyleError {
                input: s.to_string(),
            }),
        }
    }
}
