use crate::error::FilterError;
use crate::models::FilterSettings;
use crate::rendering::{decode_png, encode_png, optimize_png, read_png, SourceImage};
use milk_remap::{MilkImage, PixelLayout};
use std::path::PathBuf;

/// One file-to-file filter run
#[derive(Debug, Clone)]
pub struct FilterRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub settings: FilterSettings,
    /// Re-compress the result with oxipng
    pub optimize: bool,
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    pub settings: FilterSettings,
    /// Pixels per palette entry, darkest first
    pub palette_counts: [usize; 3],
    pub bytes_written: usize,
}

/// Remap an already decoded source image
///
/// The result is written to a fresh buffer; `source` is left untouched.
pub fn apply_image(
    source: &SourceImage,
    settings: &FilterSettings,
) -> Result<MilkImage, FilterError> {
    let (width, height) = source.dimensions();
    let image = settings
        .milkifier()
        .remap(&source.pixels, width, height, source.layout)?;
    Ok(image)
}

/// Decode, remap and re-encode PNG bytes
pub fn apply_png_bytes(
    png_bytes: &[u8],
    settings: &FilterSettings,
    optimize: bool,
) -> Result<(Vec<u8>, MilkImage), FilterError> {
    let source = decode_png(png_bytes)?;
    let image = apply_image(&source, settings)?;
    let encoded = encode_png(&image)?;
    let encoded = if optimize {
        optimize_png(encoded)
    } else {
        encoded
    };
    Ok((encoded, image))
}

/// Read the input file, remap it and write the output file
///
/// The output is only written once the whole image has been remapped, so
/// pointing `output` at `input` replaces the file in one step.
pub fn apply_file(request: &FilterRequest) -> Result<FilterReport, FilterError> {
    let source = read_png(&request.input)?;
    tracing::info!(
        input = %request.input.display(),
        width = source.width,
        height = source.height,
        layout = ?source.layout,
        style = %request.settings.style,
        dither = request.settings.dither,
        "Milkifying image"
    );

    let image = apply_image(&source, &request.settings)?;
    let counts = image.palette_counts();

    let mut encoded = encode_png(&image)?;
    if request.optimize {
        encoded = optimize_png(encoded);
    }
    std::fs::write(&request.output, &encoded)?;

    tracing::info!(
        output = %request.output.display(),
        bytes = encoded.len(),
        dark = counts[0],
        mid = counts[1],
        bright = counts[2],
        "Wrote milkified image"
    );

    Ok(FilterReport {
        width: source.width,
        height: source.height,
        layout: source.layout,
        settings: request.settings,
        palette_counts: counts,
        bytes_written: encoded.len(),
    })
}
