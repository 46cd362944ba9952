//! MilkImage: the remapped pixel buffer with its metadata.

use crate::palette::{Style, PALETTE_LEN};
use crate::remap::PixelLayout;

/// The output of [`Milkifier::remap`](crate::Milkifier::remap).
///
/// Holds interleaved bytes in the same layout as the input, together with
/// the dimensions and the style whose palette produced them.
///
/// # Example
///
/// ```
/// use milk_remap::{Milkifier, PixelLayout, Style};
///
/// let image = Milkifier::new(Style::Outside)
///     .remap(&[240, 240, 240, 128], 1, 1, PixelLayout::Rgba)
///     .unwrap();
///
/// assert_eq!(image.as_bytes(), &[137, 0, 146, 128]);
/// assert_eq!(image.palette_counts(), [0, 0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilkImage {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
    layout: PixelLayout,
    style: Style,
}

impl MilkImage {
    /// Wrap an already-remapped buffer.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len()` matches the dimensions and layout.
    pub fn new(
        pixels: Vec<u8>,
        width: usize,
        height: usize,
        layout: PixelLayout,
        style: Style,
    ) -> Self {
        debug_assert_eq!(
            pixels.len(),
            layout.buffer_len(width, height),
            "pixel buffer length ({}) must match {}x{} {:?}",
            pixels.len(),
            width,
            height,
            layout,
        );
        Self {
            pixels,
            width,
            height,
            layout,
            style,
        }
    }

    /// Interleaved output bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the output bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Byte layout, identical to the input's.
    #[inline]
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// The style used to produce this image.
    #[inline]
    pub fn style(&self) -> Style {
        self.style
    }

    /// Number of pixels that landed on each palette entry.
    ///
    /// Pixels whose color is not in the palette (only possible for buffers
    /// built by hand with [`MilkImage::new`]) are not counted.
    pub fn palette_counts(&self) -> [usize; PALETTE_LEN] {
        let palette = self.style.palette();
        let mut counts = [0usize; PALETTE_LEN];
        for px in self.pixels.chunks_exact(self.layout.bytes_per_pixel()) {
            if let Some(idx) = palette
                .iter()
                .position(|c| c.to_bytes() == [px[0], px[1], px[2]])
            {
                counts[idx] += 1;
            }
        }
        counts
    }
}
