//! Utility functions shared across the crate.

mod image;

pub use image::{create_rgb_image, dynamic_to_rgb, load_image, load_image_from_bytes};
