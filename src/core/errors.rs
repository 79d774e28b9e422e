//! Error types for the classification pipeline.
//!
//! This module defines the errors that can occur while classifying a motif,
//! including image loading errors, processing errors, inference errors, and
//! configuration errors, along with utility constructors that attach context.

use thiserror::Error;

/// Convenient result alias for classification operations.
pub type MotifResult<T> = Result<T, MotifError>;

/// Enum representing different stages of processing in the pipeline.
///
/// This enum is used to identify which stage of the pipeline an error occurred in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProcessingStage {
    /// Error occurred during tensor operations.
    TensorOperation,
    /// Error occurred during image normalization.
    Normalization,
    /// Error occurred during image resizing.
    Resize,
    /// Error occurred during batch processing.
    BatchProcessing,
    /// Error occurred during post-processing.
    PostProcessing,
    /// Generic processing error.
    Generic,
}

impl std::fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingStage::TensorOperation => write!(f, "tensor operation"),
            ProcessingStage::Normalization => write!(f, "normalization"),
            ProcessingStage::Resize => write!(f, "resize"),
            ProcessingStage::BatchProcessing => write!(f, "batch processing"),
            ProcessingStage::PostProcessing => write!(f, "post-processing"),
            ProcessingStage::Generic => write!(f, "processing"),
        }
    }
}

/// Enum representing the errors that can occur in the classification pipeline.
#[derive(Error, Debug)]
pub enum MotifError {
    /// Error occurred while loading or decoding an image.
    #[error("image load")]
    ImageLoad(#[source] image::ImageError),

    /// Error occurred during processing.
    #[error("{kind} failed: {context}")]
    Processing {
        /// The stage of processing where the error occurred.
        kind: ProcessingStage,
        /// Additional context about the error.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error occurred during inference.
    #[error("inference")]
    Inference(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Error indicating invalid input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// Error from the ONNX Runtime session.
    #[error(transparent)]
    Session(#[from] ort::Error),

    /// Error from tensor operations.
    #[error("tensor operation")]
    Tensor(#[from] ndarray::ShapeError),

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

impl MotifError {
    /// Creates a MotifError for tensor operations.
    pub fn tensor_operation(
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Processing {
            kind: ProcessingStage::TensorOperation,
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates a MotifError for normalization operations.
    pub fn normalization(
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Processing {
            kind: ProcessingStage::Normalization,
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates a MotifError for resize operations.
    pub fn resize_error(
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Processing {
            kind: ProcessingStage::Resize,
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates a MotifError for post-processing operations.
    pub fn post_processing(
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Processing {
            kind: ProcessingStage::PostProcessing,
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates a MotifError for inference operations.
    pub fn inference_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Inference(Box::new(error))
    }

    /// Creates a MotifError for invalid input.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a MotifError for configuration errors.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}

/// A minimal error type for attaching a plain message as an error source.
#[derive(Debug)]
pub struct SimpleError {
    message: String,
}

impl SimpleError {
    /// Creates a new SimpleError with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SimpleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SimpleError {}

impl From<image::ImageError> for MotifError {
    fn from(error: image::ImageError) -> Self {
        Self::ImageLoad(error)
    }
}

impl From<crate::core::config::ConfigError> for MotifError {
    fn from(error: crate::core::config::ConfigError) -> Self {
        Self::ConfigError {
            message: error.to_string(),
        }
    }
}
