//! Configuration types for the classification pipeline.

pub mod builder;
pub mod errors;
pub mod onnx;

pub use builder::CommonBuilderConfig;
pub use errors::{ConfigError, ConfigValidator};
pub use onnx::{OrtGraphOptimizationLevel, OrtSessionConfig};

use crate::core::errors::MotifError;

/// Extension trait for validating a configuration and converting the failure
/// into a [`MotifError`].
pub trait ConfigValidatorExt: ConfigValidator + Sized {
    /// Validates the configuration, returning it on success so builders can
    /// chain validation into construction.
    fn validate_and_wrap(self) -> Result<Self, MotifError> {
        self.validate()?;
        Ok(self)
    }
}

impl<T: ConfigValidator + Sized> ConfigValidatorExt for T {}
