//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Assert every pixel's RGB is one of `palette`
pub fn assert_palette_closed(samples: &[u8], channels: usize, palette: &[[u8; 3]; 3]) {
    for (i, px) in samples.chunks_exact(channels).enumerate() {
        let rgb = [px[0], px[1], px[2]];
        assert!(
            palette.contains(&rgb),
            "Pixel {} has color {:?}, which is not in palette {:?}",
            i,
            rgb,
            palette
        );
    }
}

/// Assert the alpha bytes of two RGBA buffers match
pub fn assert_alpha_preserved(before: &[u8], after: &[u8]) {
    assert_eq!(before.len(), after.len(), "RGBA buffers differ in length");
    let alpha = |buf: &[u8]| buf.chunks_exact(4).map(|px| px[3]).collect::<Vec<u8>>();
    assert_eq!(alpha(before), alpha(after), "Alpha channel changed");
}

/// Assert bytes start with the PNG signature
pub fn assert_png_bytes(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}
