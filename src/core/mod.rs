//! The core module of the classification pipeline.
//!
//! This module contains the fundamental components of the pipeline, including:
//! - Batch processing utilities
//! - Configuration management
//! - Constants used throughout the pipeline
//! - Error handling
//! - ONNX Runtime inference
//! - Traits defining interfaces for various components
//!
//! It also provides re-exports of commonly used types for convenience.

pub mod batch;
pub mod config;
pub mod constants;
pub mod errors;
pub mod inference;
pub mod traits;

pub use batch::{BatchData, BatchSampler, Tensor2D, Tensor4D};
pub use config::{CommonBuilderConfig, ConfigError, OrtSessionConfig};
pub use constants::*;
pub use errors::{MotifError, MotifResult, ProcessingStage};
pub use inference::{DefaultImageReader, OrtInfer};
pub use traits::{ImageReader, Sampler, StandardPredictor};

/// Initializes the tracing subscriber for logging.
///
/// This function sets up the tracing subscriber with environment filter and formatting layer.
/// It's typically called at the start of an application to enable logging.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
