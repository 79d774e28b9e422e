//! Pixel normalization for classification input tensors.
//!
//! Converts resized RGB images into f32 tensors, applying per-channel scale,
//! mean, and standard deviation. The scale/mean/std triple is folded into
//! `alpha = scale / std` and `beta = -mean / std` so each pixel costs one
//! multiply-add.

use crate::core::{MotifError, Tensor4D};
use crate::processors::types::ChannelOrder;
use image::RgbImage;
use rayon::prelude::*;

/// Normalizes RGB images into model input tensors.
///
/// The defaults match a plain `pixel / 255.0` rescale in channels-last order,
/// the preprocessing used by Keras-style classification models.
#[derive(Debug)]
pub struct NormalizeImage {
    /// Scaling factors for each channel (alpha = scale / std).
    pub alpha: Vec<f32>,
    /// Offset values for each channel (beta = -mean / std).
    pub beta: Vec<f32>,
    /// Channel ordering of the produced tensor.
    pub order: ChannelOrder,
}

impl NormalizeImage {
    /// Creates a new NormalizeImage instance.
    ///
    /// Defaults: scale `1/255`, mean `[0, 0, 0]`, std `[1, 1, 1]`, order HWC.
    ///
    /// # Errors
    ///
    /// Returns an error if scale is not positive, mean or std do not have
    /// exactly 3 elements, or any std value is not positive.
    pub fn new(
        scale: Option<f32>,
        mean: Option<Vec<f32>>,
        std: Option<Vec<f32>>,
        order: Option<ChannelOrder>,
    ) -> Result<Self, MotifError> {
        let scale = scale.unwrap_or(1.0 / 255.0);
        let mean = mean.unwrap_or_else(|| vec![0.0, 0.0, 0.0]);
        let std = std.unwrap_or_else(|| vec![1.0, 1.0, 1.0]);
        let order = order.unwrap_or_default();

        if scale <= 0.0 {
            return Err(MotifError::config_error("Scale must be greater than 0"));
        }

        if mean.len() != 3 {
            return Err(MotifError::config_error(
                "Mean must have exactly 3 elements for RGB",
            ));
        }

        if std.len() != 3 {
            return Err(MotifError::config_error(
                "Std must have exactly 3 elements for RGB",
            ));
        }

        for (i, &s) in std.iter().enumerate() {
            if s <= 0.0 {
                return Err(MotifError::config_error(format!(
                    "Standard deviation at index {i} must be greater than 0, got {s}"
                )));
            }
        }

        let alpha: Vec<f32> = std.iter().map(|s| scale / s).collect();
        let beta: Vec<f32> = mean.iter().zip(&std).map(|(m, s)| -m / s).collect();

        Ok(Self { alpha, beta, order })
    }

    /// Creates the normalization used by the batik motif model: `pixel / 255.0`
    /// in channels-last order.
    pub fn rescale_only(order: ChannelOrder) -> Result<Self, MotifError> {
        Self::new(None, None, None, Some(order))
    }

    /// Validates the folded normalization coefficients.
    pub fn validate_config(&self) -> Result<(), MotifError> {
        if self.alpha.len() != 3 || self.beta.len() != 3 {
            return Err(MotifError::config_error(
                "Alpha and beta must have exactly 3 elements for RGB",
            ));
        }

        for (i, &alpha) in self.alpha.iter().enumerate() {
            if !alpha.is_finite() {
                return Err(MotifError::config_error(format!(
                    "Alpha value at index {i} is not finite: {alpha}"
                )));
            }
        }

        for (i, &beta) in self.beta.iter().enumerate() {
            if !beta.is_finite() {
                return Err(MotifError::config_error(format!(
                    "Beta value at index {i} is not finite: {beta}"
                )));
            }
        }

        Ok(())
    }

    fn write_image(&self, rgb_img: &RgbImage, out: &mut [f32]) {
        let (width, height) = rgb_img.dimensions();
        let channels = 3u32;

        match self.order {
            ChannelOrder::CHW => {
                for c in 0..channels {
                    for y in 0..height {
                        for x in 0..width {
                            let pixel = rgb_img.get_pixel(x, y);
                            let channel_value = pixel[c as usize] as f32;
                            let dst_idx = (c * height * width + y * width + x) as usize;
                            out[dst_idx] =
                                channel_value * self.alpha[c as usize] + self.beta[c as usize];
                        }
                    }
                }
            }
            ChannelOrder::HWC => {
                for y in 0..height {
                    for x in 0..width {
                        let pixel = rgb_img.get_pixel(x, y);
                        for c in 0..channels {
                            let channel_value = pixel[c as usize] as f32;
                            let dst_idx = (y * width * channels + x * channels + c) as usize;
                            out[dst_idx] =
                                channel_value * self.alpha[c as usize] + self.beta[c as usize];
                        }
                    }
                }
            }
        }
    }

    /// Normalizes a single image into a batch-of-one 4D tensor.
    pub fn normalize_to(&self, img: &RgbImage) -> Result<Tensor4D, MotifError> {
        let (width, height) = img.dimensions();
        let channels = 3usize;
        let mut result = vec![0.0f32; channels * height as usize * width as usize];
        self.write_image(img, &mut result);

        let shape = match self.order {
            ChannelOrder::CHW => (1, channels, height as usize, width as usize),
            ChannelOrder::HWC => (1, height as usize, width as usize, channels),
        };

        ndarray::Array4::from_shape_vec(shape, result).map_err(|e| {
            MotifError::tensor_operation(
                &format!("failed to create normalization tensor for {width}x{height} image"),
                e,
            )
        })
    }

    /// Normalizes a batch of images into a 4D tensor.
    ///
    /// All images must share the same dimensions; the resize stage guarantees
    /// this for the classification pipeline. Batches larger than one image are
    /// normalized in parallel.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch mixes image dimensions.
    pub fn normalize_batch_to(&self, imgs: &[RgbImage]) -> Result<Tensor4D, MotifError> {
        if imgs.is_empty() {
            return Ok(ndarray::Array4::zeros((0, 0, 0, 0)));
        }

        let batch_size = imgs.len();
        let (first_width, first_height) = imgs[0].dimensions();
        for (i, img) in imgs.iter().enumerate() {
            let (width, height) = img.dimensions();
            if width != first_width || height != first_height {
                return Err(MotifError::InvalidInput {
                    message: format!(
                        "All images in batch must have the same dimensions. Image 0: {first_width}x{first_height}, Image {i}: {width}x{height}"
                    ),
                });
            }
        }

        let (width, height) = (first_width as usize, first_height as usize);
        let channels = 3usize;
        let img_size = channels * height * width;
        let mut result = vec![0.0f32; batch_size * img_size];

        if batch_size <= 1 {
            // Avoid rayon overhead for single-image batches
            self.write_image(&imgs[0], &mut result[0..img_size]);
        } else {
            result
                .par_chunks_mut(img_size)
                .enumerate()
                .for_each(|(batch_idx, batch_slice)| {
                    self.write_image(&imgs[batch_idx], batch_slice);
                });
        }

        let shape = match self.order {
            ChannelOrder::CHW => (batch_size, channels, height, width),
            ChannelOrder::HWC => (batch_size, height, width, channels),
        };

        ndarray::Array4::from_shape_vec(shape, result).map_err(|e| {
            MotifError::tensor_operation("failed to create batch normalization tensor", e)
        })
    }
}

impl Default for NormalizeImage {
    fn default() -> Self {
        Self {
            alpha: vec![1.0 / 255.0; 3],
            beta: vec![0.0; 3],
            order: ChannelOrder::HWC,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_rescale_only_maps_255_to_one() {
        let norm = NormalizeImage::rescale_only(ChannelOrder::HWC).unwrap();
        let img = RgbImage::from_pixel(2, 2, Rgb([255, 0, 127]));
        let tensor = norm.normalize_to(&img).unwrap();

        assert_eq!(tensor.shape(), &[1, 2, 2, 3]);
        assert!((tensor[[0, 0, 0, 0]] - 1.0).abs() < 1e-6);
        assert!((tensor[[0, 0, 0, 1]] - 0.0).abs() < 1e-6);
        assert!((tensor[[0, 0, 0, 2]] - 127.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_chw_layout_shape() {
        let norm = NormalizeImage::rescale_only(ChannelOrder::CHW).unwrap();
        let img = RgbImage::from_pixel(4, 3, Rgb([10, 20, 30]));
        let tensor = norm.normalize_to(&img).unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 3, 4]);
    }

    #[test]
    fn test_mean_std_folding() {
        let norm = NormalizeImage::new(
            Some(1.0),
            Some(vec![1.0, 2.0, 3.0]),
            Some(vec![2.0, 2.0, 2.0]),
            Some(ChannelOrder::HWC),
        )
        .unwrap();
        // alpha = 1/2, beta = -mean/2
        let img = RgbImage::from_pixel(1, 1, Rgb([5, 6, 7]));
        let tensor = norm.normalize_to(&img).unwrap();
        assert!((tensor[[0, 0, 0, 0]] - 2.0).abs() < 1e-6);
        assert!((tensor[[0, 0, 0, 1]] - 2.0).abs() < 1e-6);
        assert!((tensor[[0, 0, 0, 2]] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_params_rejected() {
        assert!(NormalizeImage::new(Some(0.0), None, None, None).is_err());
        assert!(NormalizeImage::new(None, Some(vec![0.0; 2]), None, None).is_err());
        assert!(NormalizeImage::new(None, None, Some(vec![1.0, 0.0, 1.0]), None).is_err());
    }

    #[test]
    fn test_batch_dimension_mismatch() {
        let norm = NormalizeImage::rescale_only(ChannelOrder::HWC).unwrap();
        let imgs = vec![
            RgbImage::from_pixel(2, 2, Rgb([0, 0, 0])),
            RgbImage::from_pixel(3, 3, Rgb([0, 0, 0])),
        ];
        assert!(matches!(
            norm.normalize_batch_to(&imgs),
            Err(MotifError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_batch_matches_single() {
        let norm = NormalizeImage::rescale_only(ChannelOrder::HWC).unwrap();
        let imgs = vec![
            RgbImage::from_pixel(2, 2, Rgb([100, 150, 200])),
            RgbImage::from_pixel(2, 2, Rgb([50, 60, 70])),
        ];
        let batch = norm.normalize_batch_to(&imgs).unwrap();
        assert_eq!(batch.shape(), &[2, 2, 2, 3]);

        let single = norm.normalize_to(&imgs[1]).unwrap();
        assert_eq!(batch[[1, 0, 0, 0]], single[[0, 0, 0, 0]]);
        assert_eq!(batch[[1, 1, 1, 2]], single[[0, 1, 1, 2]]);
    }

    #[test]
    fn test_empty_batch() {
        let norm = NormalizeImage::default();
        let tensor = norm.normalize_batch_to(&[]).unwrap();
        assert_eq!(tensor.len(), 0);
    }
}
