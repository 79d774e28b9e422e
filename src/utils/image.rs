//! Image loading and conversion utilities.
//!
//! These helpers centralize the conversion from decoded images to the RGB
//! buffers the preprocessing stages operate on.

use crate::core::MotifError;
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// Converts a [`DynamicImage`] to an [`RgbImage`].
///
/// Alpha channels are dropped and grayscale images are expanded to three
/// channels.
pub fn dynamic_to_rgb(img: DynamicImage) -> RgbImage {
    img.into_rgb8()
}

/// Loads an image from a file path and converts it to RGB.
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbImage, MotifError> {
    let img = image::open(path.as_ref())?;
    Ok(dynamic_to_rgb(img))
}

/// Decodes an image from an in-memory byte buffer and converts it to RGB.
///
/// The format is guessed from the content, so this accepts the same encodings
/// as [`load_image`] (PNG, JPEG, and so on).
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<RgbImage, MotifError> {
    let img = image::load_from_memory(bytes)?;
    Ok(dynamic_to_rgb(img))
}

/// Creates an [`RgbImage`] from raw interleaved RGB pixel data.
///
/// Returns an error if the buffer length does not match `width * height * 3`.
pub fn create_rgb_image(width: u32, height: u32, data: Vec<u8>) -> Result<RgbImage, MotifError> {
    let expected = width as usize * height as usize * 3;
    if data.len() != expected {
        return Err(MotifError::invalid_input(format!(
            "RGB buffer length {} does not match {}x{}x3 = {}",
            data.len(),
            width,
            height,
            expected
        )));
    }
    RgbImage::from_raw(width, height, data).ok_or_else(|| {
        MotifError::invalid_input(format!(
            "failed to construct {}x{} RGB image from raw buffer",
            width, height
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::io::Cursor;

    fn sample_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        })
    }

    #[test]
    fn test_create_rgb_image_valid() {
        let data = vec![0u8; 4 * 3 * 3];
        let img = create_rgb_image(4, 3, data).unwrap();
        assert_eq!(img.dimensions(), (4, 3));
    }

    #[test]
    fn test_create_rgb_image_wrong_length() {
        let result = create_rgb_image(4, 3, vec![0u8; 10]);
        assert!(matches!(result, Err(MotifError::InvalidInput { .. })));
    }

    #[test]
    fn test_load_image_missing_file() {
        let result = load_image("/nonexistent/missing.png");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_image_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        sample_image(8, 8).save(&path).unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!(img.dimensions(), (8, 8));
    }

    #[test]
    fn test_load_image_from_bytes_round_trip() {
        let img = sample_image(16, 12);
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();

        let decoded = load_image_from_bytes(&buf).unwrap();
        assert_eq!(decoded.dimensions(), (16, 12));
        assert_eq!(decoded.get_pixel(3, 5), img.get_pixel(3, 5));
    }

    #[test]
    fn test_load_image_from_bytes_garbage() {
        let result = load_image_from_bytes(b"not an image at all");
        assert!(matches!(result, Err(MotifError::ImageLoad(_))));
    }
}
