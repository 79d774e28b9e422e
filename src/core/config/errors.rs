//! Configuration error types and validation traits.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur during configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error indicating that a batch size is invalid (must be greater than 0).
    #[error("batch size must be greater than 0")]
    InvalidBatchSize,

    /// Error indicating that a model path does not exist.
    #[error("model path does not exist: {path}")]
    ModelPathNotFound { path: std::path::PathBuf },

    /// Error indicating that a configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Error indicating that a resource limit has been exceeded.
    #[error("resource limit exceeded: {message}")]
    ResourceLimitExceeded { message: String },
}

/// A trait for validating configuration parameters.
///
/// This trait provides methods for validating configuration parameters used
/// in the pipeline, such as batch sizes, model paths, image dimensions, and
/// confidence thresholds.
pub trait ConfigValidator {
    /// Validates the configuration.
    fn validate(&self) -> Result<(), ConfigError>;

    /// Returns the default configuration.
    fn get_defaults() -> Self
    where
        Self: Sized;

    /// Validates a batch size against limits.
    ///
    /// The batch size must be greater than 0 and must not exceed the maximum
    /// allowed batch size.
    fn validate_batch_size_with_limits(
        &self,
        batch_size: usize,
        max_batch_size: usize,
    ) -> Result<(), ConfigError> {
        if batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize);
        }
        if batch_size > max_batch_size {
            return Err(ConfigError::ResourceLimitExceeded {
                message: format!(
                    "Batch size {} exceeds maximum allowed batch size {}",
                    batch_size, max_batch_size
                ),
            });
        }
        Ok(())
    }

    /// Validates a model path.
    ///
    /// The model path must exist and must be a file.
    fn validate_model_path(&self, path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            Err(ConfigError::ModelPathNotFound {
                path: path.to_path_buf(),
            })
        } else if !path.is_file() {
            Err(ConfigError::InvalidConfig {
                message: format!("Model path is not a file: {}", path.display()),
            })
        } else {
            Ok(())
        }
    }

    /// Validates image dimensions.
    ///
    /// Both dimensions must be positive.
    fn validate_image_dimensions(&self, width: u32, height: u32) -> Result<(), ConfigError> {
        if width == 0 || height == 0 {
            Err(ConfigError::InvalidConfig {
                message: "Image dimensions must be positive".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validates a positive usize value.
    fn validate_positive_usize(&self, value: usize, field: &str) -> Result<(), ConfigError> {
        if value == 0 {
            Err(ConfigError::InvalidConfig {
                message: format!("{} must be greater than 0", field),
            })
        } else {
            Ok(())
        }
    }

    /// Validates a confidence threshold.
    ///
    /// The threshold must be between 0.0 and 1.0.
    fn validate_confidence_threshold(&self, threshold: f32) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&threshold) {
            Err(ConfigError::InvalidConfig {
                message: format!(
                    "Confidence threshold must be between 0.0 and 1.0, got {}",
                    threshold
                ),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    impl ConfigValidator for Probe {
        fn validate(&self) -> Result<(), ConfigError> {
            Ok(())
        }

        fn get_defaults() -> Self {
            Probe
        }
    }

    #[test]
    fn test_batch_size_limits() {
        let probe = Probe;
        assert!(probe.validate_batch_size_with_limits(8, 1000).is_ok());
        assert!(probe.validate_batch_size_with_limits(0, 1000).is_err());
        assert!(probe.validate_batch_size_with_limits(2000, 1000).is_err());
    }

    #[test]
    fn test_image_dimensions() {
        let probe = Probe;
        assert!(probe.validate_image_dimensions(224, 224).is_ok());
        assert!(probe.validate_image_dimensions(0, 224).is_err());
    }

    #[test]
    fn test_confidence_threshold_bounds() {
        let probe = Probe;
        assert!(probe.validate_confidence_threshold(0.0).is_ok());
        assert!(probe.validate_confidence_threshold(0.7).is_ok());
        assert!(probe.validate_confidence_threshold(1.0).is_ok());
        assert!(probe.validate_confidence_threshold(-0.1).is_err());
        assert!(probe.validate_confidence_threshold(1.1).is_err());
    }

    #[test]
    fn test_model_path_validation() {
        let probe = Probe;
        let missing = Path::new("definitely/not/a/model.onnx");
        assert!(matches!(
            probe.validate_model_path(missing),
            Err(ConfigError::ModelPathNotFound { .. })
        ));

        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(probe.validate_model_path(file.path()).is_ok());
    }
}
