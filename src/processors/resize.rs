//! Fixed-size image resizing for classification input.

use image::RgbImage;
use image::imageops::{self, FilterType};

/// Resizes images to the fixed input size expected by the model.
///
/// The resize ignores aspect ratio, matching the common classification
/// preprocessing that feeds a square input (e.g. 224x224) regardless of the
/// source shape.
#[derive(Debug, Clone)]
pub struct ResizeToFixed {
    width: u32,
    height: u32,
    filter: FilterType,
}

impl ResizeToFixed {
    /// Creates a resizer targeting `width` x `height` with Lanczos3 filtering.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            filter: FilterType::Lanczos3,
        }
    }

    /// Overrides the resampling filter.
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// Returns the target dimensions as (width, height).
    pub fn target_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Resizes a single image. Images already at the target size pass through
    /// unchanged.
    pub fn apply(&self, img: RgbImage) -> RgbImage {
        if img.dimensions() == (self.width, self.height) {
            return img;
        }
        imageops::resize(&img, self.width, self.height, self.filter)
    }

    /// Resizes a batch of images to the target size.
    pub fn apply_batch(&self, imgs: Vec<RgbImage>) -> Vec<RgbImage> {
        imgs.into_iter().map(|img| self.apply(img)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_resize_changes_dimensions() {
        let img = RgbImage::from_pixel(100, 50, Rgb([10, 20, 30]));
        let resizer = ResizeToFixed::new(224, 224);
        let resized = resizer.apply(img);
        assert_eq!(resized.dimensions(), (224, 224));
    }

    #[test]
    fn test_resize_passthrough_at_target_size() {
        let img = RgbImage::from_pixel(224, 224, Rgb([1, 2, 3]));
        let resizer = ResizeToFixed::new(224, 224);
        let resized = resizer.apply(img);
        assert_eq!(resized.get_pixel(0, 0), &Rgb([1, 2, 3]));
    }

    #[test]
    fn test_resize_batch() {
        let imgs = vec![
            RgbImage::from_pixel(64, 64, Rgb([0, 0, 0])),
            RgbImage::from_pixel(300, 200, Rgb([255, 255, 255])),
        ];
        let resizer = ResizeToFixed::new(32, 32);
        let resized = resizer.apply_batch(imgs);
        assert!(resized.iter().all(|img| img.dimensions() == (32, 32)));
    }
}
