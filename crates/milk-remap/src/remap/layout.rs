//! Pixel byte layouts accepted by the remapper.

use crate::api::RemapError;

/// Interleaved 8-bit pixel layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// `R, G, B` (3 bytes per pixel)
    Rgb,
    /// `R, G, B, A` (4 bytes per pixel); alpha is carried through untouched
    Rgba,
}

impl PixelLayout {
    /// Pick the layout for a source with or without an alpha channel.
    #[inline]
    pub fn for_alpha(has_alpha: bool) -> Self {
        if has_alpha {
            PixelLayout::Rgba
        } else {
            PixelLayout::Rgb
        }
    }

    /// Layout for a given byte count per pixel.
    ///
    /// # Errors
    ///
    /// [`RemapError::UnsupportedChannelCount`] for anything but 3 or 4.
    pub fn from_bytes_per_pixel(bytes: usize) -> Result<Self, RemapError> {
        match bytes {
            3 => Ok(PixelLayout::Rgb),
            4 => Ok(PixelLayout::Rgba),
            channels => Err(RemapError::UnsupportedChannelCount { channels }),
        }
    }

    /// Bytes per pixel: 3 or 4.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }

    /// Whether the fourth byte is an alpha channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, PixelLayout::Rgba)
    }

    /// Exact buffer length for an image of this layout, saturating on overflow.
    #[inline]
    pub fn buffer_len(self, width: usize, height: usize) -> usize {
        width
            .saturating_mul(height)
            .saturating_mul(self.bytes_per_pixel())
    }

    /// Check that `len` is the exact buffer length for `width × height`.
    ///
    /// # Errors
    ///
    /// [`RemapError::BufferLengthMismatch`] when it is not.
    pub fn check_len(self, len: usize, width: usize, height: usize) -> Result<(), RemapError> {
        let expected = self.buffer_len(width, height);
        if len == expected {
            Ok(())
        } else {
            Err(RemapError::BufferLengthMismatch {
                expected,
                actual: len,
            })
        }
    }
}
