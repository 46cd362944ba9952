//! The per-pixel palette remapping kernel.
//!
//! Each pixel is handled on its own: compute brightness, classify it into a
//! [`Band`], resolve the band to a palette index (flipping the [`Coin`] only
//! in blend bands), then overwrite R, G and B. Alpha is never written.
//!
//! These functions trust their caller on buffer shape and only
//! `debug_assert!` it. The [`Milkifier`](crate::Milkifier) builder validates
//! shapes and returns errors instead.

mod band;
mod coin;
mod layout;

pub use band::{brightness, Band};
pub use coin::{Coin, FixedCoin, WeightedCoin, DRAW_RANGE, HEADS_BELOW};
pub use layout::PixelLayout;

use crate::palette::Style;

/// Palette index for one RGB triple.
#[inline]
pub fn palette_index<C: Coin + ?Sized>(rgb: [u8; 3], style: Style, coin: &mut C) -> usize {
    Band::classify(brightness(rgb[0], rgb[1], rgb[2]), style.thresholds()).resolve(coin)
}

/// Remap `src` into a distinct destination buffer.
///
/// `dst` receives palette colors in its RGB channels and, for
/// [`PixelLayout::Rgba`], a copy of the source alpha.
///
/// # Example
///
/// ```
/// use milk_remap::{remap_into, FixedCoin, PixelLayout, Style};
///
/// let src = [180, 180, 180];
/// let mut dst = [0u8; 3];
/// remap_into(&src, &mut dst, 1, 1, PixelLayout::Rgb, Style::Outside, &mut FixedCoin);
/// assert_eq!(dst, [102, 0, 31]);
/// ```
pub fn remap_into<C: Coin + ?Sized>(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    layout: PixelLayout,
    style: Style,
    coin: &mut C,
) {
    debug_assert_eq!(src.len(), layout.buffer_len(width, height));
    debug_assert_eq!(dst.len(), src.len());

    let bpp = layout.bytes_per_pixel();
    let palette = style.palette();

    for (s, d) in src.chunks_exact(bpp).zip(dst.chunks_exact_mut(bpp)) {
        let idx = palette_index([s[0], s[1], s[2]], style, coin);
        d[..3].copy_from_slice(&palette[idx].to_bytes());
        if bpp == 4 {
            d[3] = s[3];
        }
    }
}

/// Remap a buffer in place. Alpha bytes are left as they are.
///
/// The buffer only has to hold whole pixels, so a single row works as well
/// as a full image.
pub fn remap_in_place<C: Coin + ?Sized>(
    pixels: &mut [u8],
    layout: PixelLayout,
    style: Style,
    coin: &mut C,
) {
    let bpp = layout.bytes_per_pixel();
    debug_assert_eq!(pixels.len() % bpp, 0);

    let palette = style.palette();
    for px in pixels.chunks_exact_mut(bpp) {
        let idx = palette_index([px[0], px[1], px[2]], style, coin);
        px[..3].copy_from_slice(&palette[idx].to_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_row(values: &[u8], layout: PixelLayout) -> Vec<u8> {
        values
            .iter()
            .flat_map(|&v| match layout {
                PixelLayout::Rgb => vec![v, v, v],
                PixelLayout::Rgba => vec![v, v, v, v],
            })
            .collect()
    }

    #[test]
    fn test_remap_into_writes_palette_colors() {
        let src = gray_row(&[0, 60, 100, 180, 210, 240], PixelLayout::Rgb);
        let mut dst = vec![0u8; src.len()];
        remap_into(
            &src,
            &mut dst,
            6,
            1,
            PixelLayout::Rgb,
            Style::Outside,
            &mut FixedCoin,
        );
        assert_eq!(
            dst,
            vec![
                0, 0, 0, // shadow
                0, 0, 0, // dark blend, heads
                102, 0, 31, // mid blend, heads
                102, 0, 31, // mid
                0, 0, 0, // high blend, heads
                137, 0, 146, // highlight
            ]
        );
    }

    #[test]
    fn test_remap_into_leaves_source_untouched() {
        let src = gray_row(&[10, 90, 250], PixelLayout::Rgba);
        let before = src.clone();
        let mut dst = vec![0u8; src.len()];
        remap_into(
            &src,
            &mut dst,
            3,
            1,
            PixelLayout::Rgba,
            Style::Inside,
            &mut FixedCoin,
        );
        assert_eq!(src, before);
    }

    #[test]
    fn test_remap_into_copies_alpha() {
        let src = vec![240, 240, 240, 128, 5, 5, 5, 0];
        let mut dst = vec![0xAA; src.len()];
        remap_into(
            &src,
            &mut dst,
            2,
            1,
            PixelLayout::Rgba,
            Style::Inside,
            &mut FixedCoin,
        );
        assert_eq!(dst, vec![203, 43, 43, 128, 0, 0, 0, 0]);
    }

    #[test]
    fn test_in_place_matches_remap_into() {
        let src: Vec<u8> = (0..=255u8).flat_map(|v| [v, v / 2, 255 - v, v]).collect();
        let mut dst = vec![0u8; src.len()];
        remap_into(
            &src,
            &mut dst,
            256,
            1,
            PixelLayout::Rgba,
            Style::Outside,
            &mut FixedCoin,
        );

        let mut in_place = src.clone();
        remap_in_place(&mut in_place, PixelLayout::Rgba, Style::Outside, &mut FixedCoin);
        assert_eq!(in_place, dst);
    }

    #[test]
    fn test_palette_index_mixed_channels() {
        // (10 + 20 + 200) / 3 = 76 -> mid blend
        assert_eq!(palette_index([10, 20, 200], Style::Outside, &mut FixedCoin), 1);
        // (255 + 255 + 180) / 3 = 230 -> highlight
        assert_eq!(palette_index([255, 255, 180], Style::Inside, &mut FixedCoin), 2);
    }

    #[test]
    fn test_empty_buffer_is_noop() {
        let mut dst: Vec<u8> = Vec::new();
        remap_into(&[], &mut dst, 0, 0, PixelLayout::Rgb, Style::Outside, &mut FixedCoin);
        remap_in_place(&mut dst, PixelLayout::Rgb, Style::Outside, &mut FixedCoin);
        assert!(dst.is_empty());
    }
}
