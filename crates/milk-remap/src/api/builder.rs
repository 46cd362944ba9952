//! Milkifier builder -- the primary ergonomic entry point for the crate.
//!
//! [`Milkifier`] wraps the remapping kernel with fluent configuration,
//! shape validation, reproducible seeding and row-parallel execution.

use rand::Rng;

use crate::output::MilkImage;
use crate::palette::Style;
use crate::remap::{remap_in_place, FixedCoin, PixelLayout, WeightedCoin};

use super::RemapError;

/// The two user-facing filter parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterParameters {
    /// Palette and threshold selection
    pub style: Style,
    /// Stochastic 70/30 choice in the blend bands ("puntilism")
    pub dither: bool,
}

/// High-level remapping builder.
///
/// # Design
///
/// - Constructor requires a [`Style`]; dithering defaults to off
/// - Configuration methods consume and return `self`
/// - [`remap()`](Self::remap) takes `&self`, so one builder can process
///   many images
/// - With dithering on, every row draws from its own generator seeded with
///   `seed + row`. A seeded run therefore gives identical bytes whether rows
///   are processed in parallel or one after another.
///
/// # Example
///
/// ```
/// use milk_remap::{Milkifier, PixelLayout, Style};
///
/// let milkifier = Milkifier::new(Style::Inside).dither(true).seed(42);
///
/// let pixels = vec![128u8; 4 * 4 * 3];
/// let image = milkifier.remap(&pixels, 4, 4, PixelLayout::Rgb).unwrap();
///
/// assert_eq!(image.width(), 4);
/// assert_eq!(image.as_bytes().len(), pixels.len());
/// ```
#[derive(Debug, Clone)]
pub struct Milkifier {
    style: Style,
    dither: bool,
    seed: Option<u64>,
    parallel: bool,
}

impl Milkifier {
    /// Create a remapper for the given style, with dithering disabled.
    pub fn new(style: Style) -> Self {
        Self {
            style,
            dither: false,
            seed: None,
            parallel: true,
        }
    }

    /// Create a remapper from a [`FilterParameters`] pair.
    pub fn with_parameters(params: FilterParameters) -> Self {
        Self::new(params.style).dither(params.dither)
    }

    /// Enable or disable the stochastic blend-band choice.
    #[inline]
    pub fn dither(mut self, enabled: bool) -> Self {
        self.dither = enabled;
        self
    }

    /// Fix the random seed used when dithering.
    ///
    /// Without a seed each call draws a fresh one from the thread RNG.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Process rows on the rayon thread pool (default `true`).
    ///
    /// Has no effect when the crate is built without the `parallel` feature.
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// The configured style and dither toggle.
    pub fn parameters(&self) -> FilterParameters {
        FilterParameters {
            style: self.style,
            dither: self.dither,
        }
    }

    /// Remap `pixels` into a newly allocated [`MilkImage`].
    ///
    /// # Errors
    ///
    /// [`RemapError::BufferLengthMismatch`] when `pixels.len()` is not
    /// `width * height * layout.bytes_per_pixel()`.
    pub fn remap(
        &self,
        pixels: &[u8],
        width: usize,
        height: usize,
        layout: PixelLayout,
    ) -> Result<MilkImage, RemapError> {
        layout.check_len(pixels.len(), width, height)?;
        let mut out = pixels.to_vec();
        self.run(&mut out, width, height, layout);
        Ok(MilkImage::new(out, width, height, layout, self.style))
    }

    /// Remap `src` into a caller-supplied destination of the same length.
    ///
    /// # Errors
    ///
    /// [`RemapError::BufferLengthMismatch`] for a malformed source and
    /// [`RemapError::DestinationLengthMismatch`] when `dst` differs in length.
    pub fn remap_into(
        &self,
        src: &[u8],
        dst: &mut [u8],
        width: usize,
        height: usize,
        layout: PixelLayout,
    ) -> Result<(), RemapError> {
        layout.check_len(src.len(), width, height)?;
        if dst.len() != src.len() {
            return Err(RemapError::DestinationLengthMismatch {
                expected: src.len(),
                actual: dst.len(),
            });
        }
        dst.copy_from_slice(src);
        self.run(dst, width, height, layout);
        Ok(())
    }

    /// Remap a buffer in place.
    ///
    /// # Errors
    ///
    /// [`RemapError::BufferLengthMismatch`] for a malformed buffer.
    pub fn remap_in_place(
        &self,
        pixels: &mut [u8],
        width: usize,
        height: usize,
        layout: PixelLayout,
    ) -> Result<(), RemapError> {
        layout.check_len(pixels.len(), width, height)?;
        self.run(pixels, width, height, layout);
        Ok(())
    }

    fn run(&self, pixels: &mut [u8], width: usize, height: usize, layout: PixelLayout) {
        if pixels.is_empty() {
            return;
        }

        let seed = if self.dither {
            Some(self.seed.unwrap_or_else(|| rand::thread_rng().gen()))
        } else {
            None
        };

        tracing::debug!(
            width,
            height,
            ?layout,
            style = %self.style,
            dither = self.dither,
            parallel = self.parallel,
            "Remapping pixels"
        );

        let job = RowJob {
            layout,
            style: self.style,
            seed,
        };
        process_rows(
            pixels,
            width * layout.bytes_per_pixel(),
            self.parallel,
            job,
        );
    }
}

/// Everything a single row needs; cheap to copy into worker threads.
#[derive(Clone, Copy)]
struct RowJob {
    layout: PixelLayout,
    style: Style,
    seed: Option<u64>,
}

impl RowJob {
    #[inline]
    fn run(self, row: &mut [u8], y: usize) {
        match self.seed {
            Some(base) => {
                let mut coin = WeightedCoin::from_seed(base.wrapping_add(y as u64));
                remap_in_place(row, self.layout, self.style, &mut coin);
            }
            None => remap_in_place(row, self.layout, self.style, &mut FixedCoin),
        }
    }
}

#[cfg(feature = "parallel")]
fn process_rows(pixels: &mut [u8], row_len: usize, parallel: bool, job: RowJob) {
    use rayon::prelude::*;

    if parallel {
        pixels
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| job.run(row, y));
    } else {
        pixels
            .chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| job.run(row, y));
    }
}

#[cfg(not(feature = "parallel"))]
fn process_rows(pixels: &mut [u8], row_len: usize, _parallel: bool, job: RowJob) {
    pixels
        .chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| job.run(row, y));
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: a width x height RGB image with a horizontal gray ramp.
    fn ramp(width: usize, height: usize) -> Vec<u8> {
        (0..height)
            .flat_map(|_| {
                (0..width).flat_map(move |x| {
                    let v = (x * 255 / width.max(2).saturating_sub(1)) as u8;
                    [v, v, v]
                })
            })
            .collect()
    }

    #[test]
    fn test_new_defaults() {
        let m = Milkifier::new(Style::Inside);
        assert_eq!(
            m.parameters(),
            FilterParameters {
                style: Style::Inside,
                dither: false
            }
        );
        assert!(m.parallel);
        assert!(m.seed.is_none());
    }

    #[test]
    fn test_builder_chaining() {
        let m = Milkifier::new(Style::Outside)
            .dither(true)
            .seed(9)
            .parallel(false);
        assert!(m.dither);
        assert_eq!(m.seed, Some(9));
        assert!(!m.parallel);
    }

    #[test]
    fn test_with_parameters() {
        let params = FilterParameters {
            style: Style::Inside,
            dither: true,
        };
        assert_eq!(Milkifier::with_parameters(params).parameters(), params);
    }

    #[test]
    fn test_remap_rejects_bad_length() {
        let err = Milkifier::new(Style::Outside)
            .remap(&[0u8; 7], 2, 1, PixelLayout::Rgb)
            .unwrap_err();
        assert_eq!(
            err,
            RemapError::BufferLengthMismatch {
                expected: 6,
                actual: 7
            }
        );
    }

    #[test]
    fn test_remap_into_rejects_bad_destination() {
        let src = [0u8; 6];
        let mut dst = [0u8; 8];
        let err = Milkifier::new(Style::Outside)
            .remap_into(&src, &mut dst, 2, 1, PixelLayout::Rgb)
            .unwrap_err();
        assert_eq!(
            err,
            RemapError::DestinationLengthMismatch {
                expected: 6,
                actual: 8
            }
        );
    }

    #[test]
    fn test_remap_into_matches_remap() {
        let src = ramp(16, 3);
        let m = Milkifier::new(Style::Inside);
        let image = m.remap(&src, 16, 3, PixelLayout::Rgb).unwrap();
        let mut dst = vec![0u8; src.len()];
        m.remap_into(&src, &mut dst, 16, 3, PixelLayout::Rgb).unwrap();
        assert_eq!(image.as_bytes(), dst.as_slice());
    }

    #[test]
    fn test_remap_reusable_without_dither() {
        let src = ramp(32, 4);
        let m = Milkifier::new(Style::Outside);
        let a = m.remap(&src, 32, 4, PixelLayout::Rgb).unwrap();
        let b = m.remap(&src, 32, 4, PixelLayout::Rgb).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_seeded_dither_reproducible() {
        let src = vec![50u8; 64 * 8 * 3];
        let m = Milkifier::new(Style::Outside).dither(true).seed(1234);
        let a = m.remap(&src, 64, 8, PixelLayout::Rgb).unwrap();
        let b = m.remap(&src, 64, 8, PixelLayout::Rgb).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let src = ramp(97, 13);
        let base = Milkifier::new(Style::Inside).dither(true).seed(77);
        let par = base
            .clone()
            .parallel(true)
            .remap(&src, 97, 13, PixelLayout::Rgb)
            .unwrap();
        let seq = base
            .parallel(false)
            .remap(&src, 97, 13, PixelLayout::Rgb)
            .unwrap();
        assert_eq!(par.as_bytes(), seq.as_bytes());
    }

    #[test]
    fn test_in_place_preserves_alpha() {
        let mut pixels: Vec<u8> = (0..8u8).flat_map(|i| [i * 32, i * 32, i * 32, i]).collect();
        Milkifier::new(Style::Outside)
            .dither(true)
            .remap_in_place(&mut pixels, 4, 2, PixelLayout::Rgba)
            .unwrap();
        let alphas: Vec<u8> = pixels.chunks_exact(4).map(|px| px[3]).collect();
        assert_eq!(alphas, (0..8u8).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_sized_image() {
        let image = Milkifier::new(Style::Outside)
            .remap(&[], 0, 5, PixelLayout::Rgba)
            .unwrap();
        assert!(image.as_bytes().is_empty());
        assert_eq!(image.height(), 5);
    }
}
