use milk_remap::RemapError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported PNG format: {color_type:?} at {bit_depth:?}")]
    UnsupportedFormat {
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
    },

    #[error("Image too large: {width}x{height}")]
    ImageTooLarge { width: u32, height: u32 },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Remap error: {0}")]
    Remap(#[from] RemapError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
