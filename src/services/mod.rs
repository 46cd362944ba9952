pub mod filter;

pub use filter::{apply_file, apply_image, apply_png_bytes, FilterReport, FilterRequest};
