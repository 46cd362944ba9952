//! Test fixtures and constants.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Palette colors, darkest first
pub mod colors {
    pub const OUTSIDE: [[u8; 3]; 3] = [[0, 0, 0], [102, 0, 31], [137, 0, 146]];
    pub const INSIDE: [[u8; 3]; 3] = [[0, 0, 0], [92, 36, 60], [203, 43, 43]];
}

/// Presets used by the config tests
pub const PRESETS_YAML: &str = r#"
default_preset: plain-inside
presets:
  plain-inside:
    style: inside
  tape:
    style: outside
    dither: true
    seed: 4242
"#;

/// A scratch directory that disappears with the test
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write an 8-bit PNG and return its path
    pub fn write_png(
        &self,
        name: &str,
        width: u32,
        height: u32,
        color: png::ColorType,
        data: &[u8],
    ) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, encode_png(width, height, color, data))
            .expect("Failed to write fixture PNG");
        path
    }

    /// Write a text file and return its path
    pub fn write_text(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write fixture file");
        path
    }
}

/// Encode raw 8-bit samples as a PNG
pub fn encode_png(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(data).expect("PNG data");
    }
    buf
}

/// Decode a PNG file to (color type, width, height, samples)
pub fn decode_png_file(path: &Path) -> (png::ColorType, u32, u32, Vec<u8>) {
    let file = std::fs::File::open(path).expect("Output PNG should exist");
    let decoder = png::Decoder::new(file);
    let mut reader = decoder.read_info().expect("Output should be a valid PNG");
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("PNG frame");
    buf.truncate(info.buffer_size());
    (info.color_type, info.width, info.height, buf)
}

/// A width x 1 RGB row of gray pixels
pub fn gray_row_rgb(values: &[u8]) -> Vec<u8> {
    values.iter().flat_map(|&v| [v, v, v]).collect()
}

/// A horizontal 0..=255 gray ramp, repeated on every row
pub fn gray_ramp_rgba(height: u32, alpha: u8) -> Vec<u8> {
    (0..height)
        .flat_map(|_| (0..=255u8).flat_map(move |v| [v, v, v, alpha]))
        .collect()
}
