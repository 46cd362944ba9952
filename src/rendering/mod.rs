pub mod png_io;

pub use png_io::{decode_png, encode_png, optimize_png, read_png, SourceImage};
