//! PNG decoding and encoding around the remapper.
//!
//! Decoding normalizes every PNG to 8-bit RGB or RGBA so the remapper only
//! ever sees the two layouts it supports. The alpha channel of the source
//! decides which one.

use crate::error::FilterError;
use milk_remap::{MilkImage, PixelLayout};
use std::io::Cursor;
use std::path::Path;

/// A decoded source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// Interleaved 8-bit pixels, row-major
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
}

impl SourceImage {
    /// Width and height as `usize` for the remapper
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }
}

/// Read and decode a PNG file
pub fn read_png(path: &Path) -> Result<SourceImage, FilterError> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

/// Decode PNG bytes to 8-bit RGB or RGBA
///
/// - RGB and RGBA pass through
/// - Indexed images are expanded to RGB (RGBA if they carry tRNS)
/// - Grayscale is widened to RGB, grayscale+alpha to RGBA
/// - 16-bit samples are stripped to 8 bits
pub fn decode_png(bytes: &[u8]) -> Result<SourceImage, FilterError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| FilterError::PngDecode(e.to_string()))?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| FilterError::PngDecode(e.to_string()))?;
    buf.truncate(frame.buffer_size());

    if frame.bit_depth != png::BitDepth::Eight {
        return Err(FilterError::UnsupportedFormat {
            color_type: frame.color_type,
            bit_depth: frame.bit_depth,
        });
    }

    let (pixels, layout) = match frame.color_type {
        png::ColorType::Rgb => (buf, PixelLayout::Rgb),
        png::ColorType::Rgba => (buf, PixelLayout::Rgba),
        png::ColorType::Grayscale => (
            buf.iter().flat_map(|&v| [v, v, v]).collect(),
            PixelLayout::Rgb,
        ),
        png::ColorType::GrayscaleAlpha => (
            buf.chunks_exact(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
                .collect(),
            PixelLayout::Rgba,
        ),
        color_type => {
            return Err(FilterError::UnsupportedFormat {
                color_type,
                bit_depth: frame.bit_depth,
            })
        }
    };

    tracing::debug!(
        width = frame.width,
        height = frame.height,
        source = ?frame.color_type,
        ?layout,
        "Decoded PNG"
    );

    Ok(SourceImage {
        pixels,
        width: frame.width,
        height: frame.height,
        layout,
    })
}

/// Encode a remapped image as an 8-bit RGB or RGBA PNG
pub fn encode_png(image: &MilkImage) -> Result<Vec<u8>, FilterError> {
    let too_large = || FilterError::ImageTooLarge {
        width: u32::try_from(image.width()).unwrap_or(u32::MAX),
        height: u32::try_from(image.height()).unwrap_or(u32::MAX),
    };
    let width = u32::try_from(image.width()).map_err(|_| too_large())?;
    let height = u32::try_from(image.height()).map_err(|_| too_large())?;

    let color_type = match image.layout() {
        PixelLayout::Rgb => png::ColorType::Rgb,
        PixelLayout::Rgba => png::ColorType::Rgba,
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| FilterError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.as_bytes())
            .map_err(|e| FilterError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Re-compress PNG bytes with oxipng, keeping the input on failure
pub fn optimize_png(png_bytes: Vec<u8>) -> Vec<u8> {
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Optimized PNG"
            );
            optimized
        }
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping unoptimized output");
            png_bytes
        }
    }
}
