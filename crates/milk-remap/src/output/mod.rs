//! Output types for the remapping pipeline.
//!
//! [`MilkImage`] is what the builder hands back: the remapped bytes plus
//! dimensions, layout and style.

mod milk_image;

pub use milk_image::MilkImage;
