//! Batik Motif Classifier
//!
//! Identifies which of the 20 Lokatmala batik motifs an image shows, along
//! with the philosophy text behind the motif. Images are resized to the
//! model's fixed input size, rescaled to [0, 1], and classified by a
//! pre-trained ONNX model. Predictions below the confidence threshold are
//! flagged and carry capture guidance for retrying with a better photo.

use crate::core::traits::StandardPredictor;
use crate::core::{
    BatchData, BatchSampler, CommonBuilderConfig, DefaultImageReader, ImageReader, MotifError,
    OrtInfer, Tensor2D, Tensor4D,
    config::{ConfigValidator, ConfigValidatorExt},
    constants::{DEFAULT_CLASSIFICATION_INPUT_SHAPE, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_TOPK},
};
use crate::domain::{
    LOW_CONFIDENCE_NOTICE, MOTIF_CLASS_COUNT, capture_guidance, motif_labels,
    philosophy_or_fallback,
};
use crate::processors::{ChannelOrder, NormalizeImage, ResizeToFixed, Topk};
use image::RgbImage;
use std::path::Path;
use std::sync::Arc;

/// Results from batik motif classification.
///
/// Holds per-image top-k predictions for a batch. Use [`predictions`] to get
/// the flattened per-image view with philosophy texts and confidence flags.
///
/// [`predictions`]: MotifClassificationResult::predictions
#[derive(Debug, Clone)]
pub struct MotifClassificationResult {
    /// Paths to the input images (synthetic names for in-memory inputs).
    pub input_path: Vec<Arc<str>>,
    /// Indexes of the images in the original input order.
    pub index: Vec<usize>,
    /// The input images.
    pub input_img: Vec<Arc<RgbImage>>,
    /// Predicted class IDs for each image, sorted by confidence.
    pub class_ids: Vec<Vec<usize>>,
    /// Confidence scores for each prediction.
    pub scores: Vec<Vec<f32>>,
    /// Motif label names for each prediction.
    pub label_names: Vec<Vec<Arc<str>>>,
    /// Threshold below which a top prediction is flagged as low confidence.
    pub confidence_threshold: f32,
}

impl MotifClassificationResult {
    /// Creates an empty result with the given confidence threshold.
    pub fn new(confidence_threshold: f32) -> Self {
        Self {
            input_path: Vec::new(),
            index: Vec::new(),
            input_img: Vec::new(),
            class_ids: Vec::new(),
            scores: Vec::new(),
            label_names: Vec::new(),
            confidence_threshold,
        }
    }

    /// Returns the number of images in the result.
    pub fn len(&self) -> usize {
        self.input_path.len()
    }

    /// Checks whether the result is empty.
    pub fn is_empty(&self) -> bool {
        self.input_path.is_empty()
    }

    /// Appends another result, keeping this result's threshold.
    pub fn extend(&mut self, other: MotifClassificationResult) {
        self.input_path.extend(other.input_path);
        self.index.extend(other.index);
        self.input_img.extend(other.input_img);
        self.class_ids.extend(other.class_ids);
        self.scores.extend(other.scores);
        self.label_names.extend(other.label_names);
    }

    /// Returns the best prediction for each image, with the motif's philosophy
    /// text and the low-confidence flag applied.
    pub fn predictions(&self) -> Vec<MotifPrediction> {
        self.input_path
            .iter()
            .zip(&self.label_names)
            .zip(&self.scores)
            .filter_map(|((path, labels), scores)| {
                let label = labels.first()?;
                let score = *scores.first()?;
                Some(MotifPrediction {
                    input_path: path.clone(),
                    label: label.clone(),
                    score,
                    philosophy: philosophy_or_fallback(label),
                    confident: score >= self.confidence_threshold,
                })
            })
            .collect()
    }
}

/// The best prediction for a single image.
#[derive(Debug, Clone)]
pub struct MotifPrediction {
    /// Path or synthetic name of the input image.
    pub input_path: Arc<str>,
    /// Predicted motif label.
    pub label: Arc<str>,
    /// Confidence score of the prediction, in [0, 1] for softmax outputs.
    pub score: f32,
    /// Philosophy text for the motif.
    pub philosophy: &'static str,
    /// Whether the score reached the confidence threshold.
    pub confident: bool,
}

impl std::fmt::Display for MotifPrediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Motif Terdeteksi: {}", self.label)?;
        writeln!(f, "Tingkat Keyakinan: {:.2}%", self.score * 100.0)?;
        if !self.confident {
            writeln!(f, "{LOW_CONFIDENCE_NOTICE}")?;
            for tip in capture_guidance() {
                writeln!(f, "- {tip}")?;
            }
        }
        writeln!(f, "Filosofi Motif:")?;
        write!(f, "{}", self.philosophy)
    }
}

/// Configuration for the batik motif classifier.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct MotifClassifierConfig {
    /// Common configuration options shared across predictors.
    pub common: CommonBuilderConfig,
    /// Number of top predictions to keep for each image.
    pub topk: Option<usize>,
    /// Input shape for the model (width, height).
    pub input_shape: Option<(u32, u32)>,
    /// Threshold below which a prediction is flagged as low confidence.
    pub confidence_threshold: Option<f32>,
    /// Channel layout of the model input tensor.
    pub channel_order: Option<ChannelOrder>,
}

impl MotifClassifierConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self {
            common: CommonBuilderConfig::with_defaults(Some("motif_classifier".to_string()), None),
            topk: Some(DEFAULT_TOPK),
            input_shape: Some(DEFAULT_CLASSIFICATION_INPUT_SHAPE),
            confidence_threshold: Some(DEFAULT_CONFIDENCE_THRESHOLD),
            channel_order: Some(ChannelOrder::HWC),
        }
    }

    /// Creates a configuration with custom common settings.
    pub fn with_common(common: CommonBuilderConfig) -> Self {
        Self {
            common,
            ..Self::new()
        }
    }

    /// Loads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MotifError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| MotifError::config_error(format!("failed to parse config file: {e}")))?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), crate::core::ConfigError> {
        ConfigValidator::validate(self)
    }
}

impl ConfigValidator for MotifClassifierConfig {
    fn validate(&self) -> Result<(), crate::core::ConfigError> {
        self.common.validate()?;

        if let Some(topk) = self.topk {
            self.validate_positive_usize(topk, "topk")?;
        }

        if let Some((width, height)) = self.input_shape {
            self.validate_image_dimensions(width, height)?;
        }

        if let Some(threshold) = self.confidence_threshold {
            self.validate_confidence_threshold(threshold)?;
        }

        Ok(())
    }

    fn get_defaults() -> Self {
        Self {
            common: CommonBuilderConfig::get_defaults(),
            topk: Some(DEFAULT_TOPK),
            input_shape: Some(DEFAULT_CLASSIFICATION_INPUT_SHAPE),
            confidence_threshold: Some(DEFAULT_CONFIDENCE_THRESHOLD),
            channel_order: Some(ChannelOrder::HWC),
        }
    }
}

/// Batik motif classifier.
///
/// Classifies images into one of the 20 Lokatmala motif classes using a
/// pre-trained ONNX model.
#[derive(Debug)]
pub struct MotifClassifier {
    /// Number of top predictions to keep for each image.
    pub topk: Option<usize>,
    /// Input shape for the model (width, height).
    pub input_shape: (u32, u32),
    /// Threshold below which a prediction is flagged as low confidence.
    pub confidence_threshold: f32,
    /// Name of the model being used.
    pub model_name: String,

    /// Batch sampler for processing images in batches.
    pub batch_sampler: BatchSampler,
    /// Image reader for loading images from file paths.
    pub read_image: DefaultImageReader,
    /// Resizer that brings images to the model input size.
    pub resize: ResizeToFixed,
    /// Image normalizer for preprocessing images before inference.
    pub normalize: NormalizeImage,
    /// ONNX Runtime inference engine.
    pub infer: OrtInfer,
    /// Top-k operator for selecting top predictions.
    pub post_op: Topk,
}

impl MotifClassifier {
    /// Creates a new motif classifier from a validated configuration and a
    /// model path.
    pub fn new(config: MotifClassifierConfig, model_path: &Path) -> Result<Self, MotifError> {
        let input_shape = config
            .input_shape
            .unwrap_or(DEFAULT_CLASSIFICATION_INPUT_SHAPE);
        let confidence_threshold = config
            .confidence_threshold
            .unwrap_or(DEFAULT_CONFIDENCE_THRESHOLD);
        let channel_order = config.channel_order.unwrap_or_default();
        let model_name = config
            .common
            .model_name
            .clone()
            .unwrap_or_else(|| "MotifClassifier".to_string());
        let batch_size = config.common.get_batch_size();
        let topk = config.topk;

        Ok(Self {
            topk,
            input_shape,
            confidence_threshold,
            model_name,
            batch_sampler: BatchSampler::new(batch_size),
            read_image: DefaultImageReader::new(),
            resize: ResizeToFixed::new(input_shape.0, input_shape.1),
            normalize: NormalizeImage::rescale_only(channel_order)?,
            infer: OrtInfer::from_common(&config.common, model_path, None)?,
            post_op: Topk::from_class_names(motif_labels().iter().copied()),
        })
    }

    /// Classifies a set of image files, batching them according to the
    /// configured batch size.
    ///
    /// Results are merged back into a single [`MotifClassificationResult`] in
    /// input order. An empty input yields an empty result.
    pub fn classify(
        &self,
        paths: &[impl AsRef<Path>],
    ) -> Result<MotifClassificationResult, MotifError> {
        let path_strings: Vec<String> = paths
            .iter()
            .map(|p| p.as_ref().to_string_lossy().into_owned())
            .collect();

        let batches = self.batch_sampler.sample_batch(path_strings);
        tracing::debug!(
            model = %self.model_name,
            images = paths.len(),
            batches = batches.len(),
            "classifying motif images"
        );

        let mut merged = MotifClassificationResult::new(self.confidence_threshold);
        for batch in batches {
            let result = self.predict(&batch, None)?;
            merged.extend(result);
        }
        Ok(merged)
    }

    /// Classifies a single already-decoded image.
    pub fn classify_image(&self, img: RgbImage) -> Result<MotifClassificationResult, MotifError> {
        let batch =
            BatchData::from_shared_arc_paths(vec![Arc::from("in-memory image")], vec![0]);
        self.predict_images(vec![img], &batch, None)
    }

    /// Decodes an image from raw bytes (PNG, JPEG, ...) and classifies it.
    pub fn classify_bytes(&self, bytes: &[u8]) -> Result<MotifClassificationResult, MotifError> {
        let img = crate::utils::load_image_from_bytes(bytes)?;
        self.classify_image(img)
    }
}

/// Per-call configuration placeholder for motif classification.
///
/// All options currently live in [`MotifClassifierConfig`]; this type exists
/// to satisfy the standard predictor contract.
#[derive(Debug, Clone)]
pub struct MotifPredictConfig;

impl StandardPredictor for MotifClassifier {
    type Config = MotifPredictConfig;
    type Result = MotifClassificationResult;
    type PreprocessOutput = Tensor4D;
    type InferenceOutput = Tensor2D;

    fn read_images<'a>(
        &self,
        paths: impl Iterator<Item = &'a str>,
    ) -> Result<Vec<RgbImage>, MotifError> {
        self.read_image.apply(paths)
    }

    fn preprocess(
        &self,
        images: Vec<RgbImage>,
        _config: Option<&Self::Config>,
    ) -> Result<Self::PreprocessOutput, MotifError> {
        let resized = self.resize.apply_batch(images);
        self.normalize.normalize_batch_to(&resized)
    }

    fn infer(&self, input: &Self::PreprocessOutput) -> Result<Self::InferenceOutput, MotifError> {
        self.infer.infer_2d(input)
    }

    fn postprocess(
        &self,
        output: Self::InferenceOutput,
        _preprocessed: &Self::PreprocessOutput,
        batch_data: &BatchData,
        raw_images: Vec<RgbImage>,
        _config: Option<&Self::Config>,
    ) -> Result<Self::Result, MotifError> {
        validate_output_classes(&self.model_name, &output)?;

        let predictions: Vec<Vec<f32>> = output.outer_iter().map(|row| row.to_vec()).collect();
        let topk_result = self
            .post_op
            .process(&predictions, self.topk.unwrap_or(DEFAULT_TOPK))?;

        Ok(MotifClassificationResult {
            input_path: batch_data.input_paths.clone(),
            index: batch_data.indexes.clone(),
            input_img: raw_images.into_iter().map(Arc::new).collect(),
            class_ids: topk_result.indexes,
            scores: topk_result.scores,
            label_names: topk_result
                .class_names
                .unwrap_or_default()
                .into_iter()
                .map(|names| names.into_iter().map(Arc::from).collect())
                .collect(),
            confidence_threshold: self.confidence_threshold,
        })
    }

    fn empty_result(&self) -> Result<Self::Result, MotifError> {
        Ok(MotifClassificationResult::new(self.confidence_threshold))
    }
}

/// Rejects model output whose class dimension does not match the motif label set.
fn validate_output_classes(model_name: &str, output: &Tensor2D) -> Result<(), MotifError> {
    if output.ncols() != MOTIF_CLASS_COUNT {
        return Err(MotifError::invalid_input(format!(
            "model '{}' produced {} classes, expected {}; the model does not match the motif label set",
            model_name,
            output.ncols(),
            MOTIF_CLASS_COUNT
        )));
    }
    Ok(())
}

/// Builder for the batik motif classifier.
pub struct MotifClassifierBuilder {
    common: CommonBuilderConfig,
    topk: Option<usize>,
    input_shape: Option<(u32, u32)>,
    confidence_threshold: Option<f32>,
    channel_order: Option<ChannelOrder>,
}

impl MotifClassifierBuilder {
    /// Creates a new builder with default configuration options.
    pub fn new() -> Self {
        Self {
            common: CommonBuilderConfig::new(),
            topk: None,
            input_shape: None,
            confidence_threshold: None,
            channel_order: None,
        }
    }

    /// Sets the path to the ONNX model file.
    pub fn model_path(mut self, model_path: impl Into<std::path::PathBuf>) -> Self {
        self.common = self.common.model_path(model_path);
        self
    }

    /// Sets the model name.
    pub fn model_name(mut self, model_name: impl Into<String>) -> Self {
        self.common = self.common.model_name(model_name);
        self
    }

    /// Sets the number of images processed per batch.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.common = self.common.batch_size(batch_size);
        self
    }

    /// Enables or disables logging.
    pub fn enable_logging(mut self, enable: bool) -> Self {
        self.common = self.common.enable_logging(enable);
        self
    }

    /// Sets the ONNX Runtime session configuration.
    pub fn ort_session(mut self, config: crate::core::config::OrtSessionConfig) -> Self {
        self.common = self.common.ort_session(config);
        self
    }

    /// Sets the session pool size used for concurrent predictions (>= 1).
    pub fn session_pool_size(mut self, size: usize) -> Self {
        self.common = self.common.session_pool_size(size);
        self
    }

    /// Sets how many top predictions to keep per image.
    pub fn topk(mut self, topk: usize) -> Self {
        self.topk = Some(topk);
        self
    }

    /// Sets the model input shape as (width, height).
    pub fn input_shape(mut self, input_shape: (u32, u32)) -> Self {
        self.input_shape = Some(input_shape);
        self
    }

    /// Sets the confidence threshold below which predictions are flagged.
    pub fn confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = Some(threshold);
        self
    }

    /// Sets the channel layout of the model input tensor.
    pub fn channel_order(mut self, order: ChannelOrder) -> Self {
        self.channel_order = Some(order);
        self
    }

    /// Builds the motif classifier, validating the configuration first.
    pub fn build(self, model_path: &Path) -> Result<MotifClassifier, MotifError> {
        self.build_internal(model_path)
    }

    fn build_internal(mut self, model_path: &Path) -> Result<MotifClassifier, MotifError> {
        if self.common.model_path.is_none() {
            self.common = self.common.model_path(model_path.to_path_buf());
        }

        let config = MotifClassifierConfig {
            common: self.common,
            topk: self.topk,
            input_shape: self.input_shape,
            confidence_threshold: self.confidence_threshold,
            channel_order: self.channel_order,
        };

        let config = config.validate_and_wrap()?;

        MotifClassifier::new(config, model_path)
    }
}

impl Default for MotifClassifierBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PHILOSOPHY_FALLBACK;

    fn result_with(
        labels: &[&str],
        scores: &[f32],
        threshold: f32,
    ) -> MotifClassificationResult {
        let mut result = MotifClassificationResult::new(threshold);
        for (i, (label, score)) in labels.iter().zip(scores).enumerate() {
            result.input_path.push(Arc::from(format!("img_{i}.png")));
            result.index.push(i);
            result.class_ids.push(vec![i]);
            result.scores.push(vec![*score]);
            result.label_names.push(vec![Arc::from(*label)]);
        }
        result
    }

    #[test]
    fn test_output_class_count_mismatch_is_invalid_input() {
        for ncols in [19, 21] {
            let output = Tensor2D::zeros((2, ncols));
            let result = validate_output_classes("batik_model", &output);
            assert!(matches!(result, Err(MotifError::InvalidInput { .. })));
        }
    }

    #[test]
    fn test_output_class_count_matching_is_accepted() {
        let output = Tensor2D::zeros((3, MOTIF_CLASS_COUNT));
        assert!(validate_output_classes("batik_model", &output).is_ok());
    }

    #[test]
    fn test_config_validation() {
        let valid = MotifClassifierConfig::new();
        assert!(valid.validate().is_ok());

        let mut bad_topk = MotifClassifierConfig::new();
        bad_topk.topk = Some(0);
        assert!(bad_topk.validate().is_err());

        let mut bad_threshold = MotifClassifierConfig::new();
        bad_threshold.confidence_threshold = Some(1.5);
        assert!(bad_threshold.validate().is_err());

        let mut bad_shape = MotifClassifierConfig::new();
        bad_shape.input_shape = Some((0, 224));
        assert!(bad_shape.validate().is_err());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = MotifClassifierConfig::new();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: MotifClassifierConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.topk, Some(DEFAULT_TOPK));
        assert_eq!(parsed.confidence_threshold, Some(0.70));
        assert_eq!(parsed.channel_order, Some(ChannelOrder::HWC));
    }

    #[test]
    fn test_predictions_confidence_flag() {
        let result = result_with(&["Makara", "Puyuh"], &[0.92, 0.41], 0.70);
        let predictions = result.predictions();

        assert_eq!(predictions.len(), 2);
        assert!(predictions[0].confident);
        assert!(!predictions[1].confident);
    }

    #[test]
    fn test_threshold_boundary_is_confident() {
        let result = result_with(&["Pakwan"], &[0.70], 0.70);
        assert!(result.predictions()[0].confident);
    }

    #[test]
    fn test_predictions_attach_philosophy() {
        let result = result_with(&["Leungli", "Bukan Motif"], &[0.9, 0.9], 0.70);
        let predictions = result.predictions();

        assert!(predictions[0].philosophy.contains("Si Leungli"));
        assert_eq!(predictions[1].philosophy, PHILOSOPHY_FALLBACK);
    }

    #[test]
    fn test_display_low_confidence_includes_guidance() {
        let result = result_with(&["Masagi"], &[0.35], 0.70);
        let rendered = result.predictions()[0].to_string();

        assert!(rendered.contains("Motif Terdeteksi: Masagi"));
        assert!(rendered.contains("Tingkat Keyakinan: 35.00%"));
        assert!(rendered.contains("Keyakinan rendah"));
        assert!(rendered.contains("Pastikan pencahayaan cukup dan merata."));
        assert!(rendered.contains("Filosofi Motif:"));
    }

    #[test]
    fn test_display_confident_omits_guidance() {
        let result = result_with(&["Masagi"], &[0.95], 0.70);
        let rendered = result.predictions()[0].to_string();
        assert!(!rendered.contains("Keyakinan rendah"));
    }

    #[test]
    fn test_extend_merges_in_order() {
        let mut first = result_with(&["Makara"], &[0.8], 0.70);
        let second = result_with(&["Puyuh"], &[0.6], 0.70);
        first.extend(second);

        assert_eq!(first.len(), 2);
        let predictions = first.predictions();
        assert_eq!(predictions[0].label.as_ref(), "Makara");
        assert_eq!(predictions[1].label.as_ref(), "Puyuh");
    }

    #[test]
    fn test_empty_result() {
        let result = MotifClassificationResult::new(0.70);
        assert!(result.is_empty());
        assert!(result.predictions().is_empty());
    }
}
