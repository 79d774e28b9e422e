//! Trait definitions for the classification pipeline.
//!
//! This module provides the traits used throughout the pipeline for batch
//! sampling, image I/O, and the standard predictor contract that all
//! predictors in the crate follow.

use crate::core::batch::BatchData;
use crate::core::errors::MotifError;
use image::RgbImage;
use std::path::Path;

/// Trait for sampling data into batches.
pub trait Sampler<T> {
    /// The type of batch data produced by this sampler.
    type BatchData;

    /// Samples the given data into batches.
    fn sample(&self, data: Vec<T>) -> Vec<Self::BatchData>;

    /// Samples the given slice of data into batches.
    fn sample_slice(&self, data: &[T]) -> Vec<Self::BatchData>
    where
        T: Clone,
    {
        self.sample(data.to_vec())
    }
}

/// Trait for reading images from paths.
pub trait ImageReader {
    /// The error type of this image reader.
    type Error;

    /// Applies the image reader to the given paths.
    fn apply<P: AsRef<Path> + Send + Sync>(
        &self,
        imgs: impl IntoIterator<Item = P>,
    ) -> Result<Vec<RgbImage>, Self::Error>;

    /// Reads a single image from the given path.
    fn read_single<P: AsRef<Path> + Send + Sync>(
        &self,
        img_path: P,
    ) -> Result<RgbImage, Self::Error>
    where
        Self::Error: From<MotifError>,
    {
        let mut results = self.apply(std::iter::once(img_path))?;
        results.pop().ok_or_else(|| {
            MotifError::invalid_input("ImageReader::apply returned empty result for single image")
                .into()
        })
    }
}

/// The standard predictor contract: read, preprocess, infer, postprocess.
///
/// Implementors define the four stages; the provided [`predict`] and
/// [`predict_images`] methods drive a batch through them in order.
///
/// [`predict`]: StandardPredictor::predict
/// [`predict_images`]: StandardPredictor::predict_images
pub trait StandardPredictor {
    /// Per-call configuration for this predictor.
    type Config;
    /// Result type produced by this predictor.
    type Result;
    /// Output of the preprocessing stage.
    type PreprocessOutput;
    /// Output of the inference stage.
    type InferenceOutput;

    /// Reads images from file paths.
    fn read_images<'a>(
        &self,
        paths: impl Iterator<Item = &'a str>,
    ) -> Result<Vec<RgbImage>, MotifError>;

    /// Preprocesses images into the tensor format the model expects.
    fn preprocess(
        &self,
        images: Vec<RgbImage>,
        config: Option<&Self::Config>,
    ) -> Result<Self::PreprocessOutput, MotifError>;

    /// Runs inference on the preprocessed input.
    fn infer(&self, input: &Self::PreprocessOutput) -> Result<Self::InferenceOutput, MotifError>;

    /// Converts raw inference output into the predictor's result type.
    fn postprocess(
        &self,
        output: Self::InferenceOutput,
        preprocessed: &Self::PreprocessOutput,
        batch_data: &BatchData,
        raw_images: Vec<RgbImage>,
        config: Option<&Self::Config>,
    ) -> Result<Self::Result, MotifError>;

    /// Returns an empty result for an empty batch.
    fn empty_result(&self) -> Result<Self::Result, MotifError>;

    /// Runs the full pipeline on a batch of file paths.
    fn predict(
        &self,
        batch: &BatchData,
        config: Option<&Self::Config>,
    ) -> Result<Self::Result, MotifError> {
        if batch.is_empty() {
            return self.empty_result();
        }
        let images = self.read_images(batch.instances_as_str())?;
        self.predict_images(images, batch, config)
    }

    /// Runs the full pipeline on already-decoded images.
    fn predict_images(
        &self,
        images: Vec<RgbImage>,
        batch: &BatchData,
        config: Option<&Self::Config>,
    ) -> Result<Self::Result, MotifError> {
        if images.is_empty() {
            return self.empty_result();
        }
        let preprocessed = self.preprocess(images.clone(), config)?;
        let output = self.infer(&preprocessed)?;
        self.postprocess(output, &preprocessed, batch, images, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock ImageReader that always returns empty results to test error handling.
    struct MockEmptyImageReader;

    impl ImageReader for MockEmptyImageReader {
        type Error = MotifError;

        fn apply<P: AsRef<Path> + Send + Sync>(
            &self,
            _imgs: impl IntoIterator<Item = P>,
        ) -> Result<Vec<RgbImage>, Self::Error> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_read_single_handles_empty_result_properly() {
        let reader = MockEmptyImageReader;
        let result = reader.read_single("test_path.jpg");

        assert!(result.is_err());
        let err = result.unwrap_err();
        if let MotifError::InvalidInput { message } = err {
            assert!(message.contains("empty result"));
        } else {
            panic!("Expected InvalidInput error, got {:?}", err);
        }
    }
}
