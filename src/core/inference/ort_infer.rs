//! Core ONNX Runtime inference engine with support for pooling and configurable sessions.

use crate::core::batch::{Tensor2D, Tensor4D};
use crate::core::config::{CommonBuilderConfig, OrtGraphOptimizationLevel, OrtSessionConfig};
use crate::core::constants::MAX_TENSOR_SIZE;
use crate::core::errors::{MotifError, SimpleError};
use ndarray::ArrayView2;
use ort::logging::LogLevel;
use ort::session::Session;
use ort::session::builder::SessionBuilder;
use ort::value::{TensorRef, ValueType};
use std::path::Path;
use std::sync::Mutex;

/// ONNX Runtime inference engine backed by a pool of sessions.
///
/// Sessions are dispatched round-robin so a classifier shared across threads
/// can run concurrent predictions when the pool size is greater than one.
pub struct OrtInfer {
    sessions: Vec<Mutex<Session>>,
    next_idx: std::sync::atomic::AtomicUsize,
    input_name: Option<String>,
    output_name: Option<String>,
    model_path: std::path::PathBuf,
    model_name: String,
}

impl std::fmt::Debug for OrtInfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrtInfer")
            .field("sessions", &self.sessions.len())
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("model_path", &self.model_path)
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl OrtInfer {
    /// Creates a new OrtInfer instance with default ONNX Runtime settings and a single session.
    ///
    /// If `input_name` is None, the first input declared by the model is used.
    pub fn new(model_path: impl AsRef<Path>, input_name: Option<&str>) -> Result<Self, MotifError> {
        let path = model_path.as_ref();
        let session = Session::builder()?
            .with_log_level(LogLevel::Error)?
            .commit_from_file(path)?;
        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown_model")
            .to_string();

        Ok(OrtInfer {
            sessions: vec![Mutex::new(session)],
            next_idx: std::sync::atomic::AtomicUsize::new(0),
            input_name: input_name.map(|s| s.to_string()),
            output_name: None,
            model_path: path.to_path_buf(),
            model_name,
        })
    }

    /// Creates a new OrtInfer instance from a common builder configuration,
    /// applying the ORT session settings and constructing a session pool for
    /// concurrent predictions.
    pub fn from_common(
        common: &CommonBuilderConfig,
        model_path: impl AsRef<Path>,
        input_name: Option<&str>,
    ) -> Result<Self, MotifError> {
        let path = model_path.as_ref();
        let pool_size = common.get_session_pool_size().max(1);
        let mut sessions = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            let builder = Session::builder()?;
            let builder = if let Some(cfg) = &common.ort_session {
                Self::apply_ort_config(builder, cfg)?
            } else {
                // Default log level Error to suppress ORT logs
                builder.with_log_level(LogLevel::Error)?
            };
            let session = builder.commit_from_file(path)?;
            sessions.push(Mutex::new(session));
        }

        let model_name = common
            .model_name
            .clone()
            .or_else(|| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_string())
            })
            .unwrap_or_else(|| "unknown_model".to_string());

        Ok(OrtInfer {
            sessions,
            next_idx: std::sync::atomic::AtomicUsize::new(0),
            input_name: input_name.map(|s| s.to_string()),
            output_name: None,
            model_path: path.to_path_buf(),
            model_name,
        })
    }

    fn apply_ort_config(
        mut builder: SessionBuilder,
        cfg: &OrtSessionConfig,
    ) -> Result<SessionBuilder, ort::Error> {
        if let Some(intra) = cfg.intra_threads {
            builder = builder.with_intra_threads(intra)?;
        }
        if let Some(inter) = cfg.inter_threads {
            builder = builder.with_inter_threads(inter)?;
        }
        if let Some(par) = cfg.parallel_execution {
            builder = builder.with_parallel_execution(par)?;
        }
        if let Some(level) = cfg.optimization_level {
            use ort::session::builder::GraphOptimizationLevel as GOL;
            let mapped = match level {
                OrtGraphOptimizationLevel::DisableAll => GOL::Disable,
                OrtGraphOptimizationLevel::Level1 => GOL::Level1,
                OrtGraphOptimizationLevel::Level2 => GOL::Level2,
                OrtGraphOptimizationLevel::Level3 => GOL::Level3,
            };
            builder = builder.with_optimization_level(mapped)?;
        }
        Ok(builder)
    }

    /// Returns the model path associated with this inference engine.
    pub fn model_path(&self) -> &std::path::Path {
        &self.model_path
    }

    /// Returns the model name associated with this inference engine.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Attempts to retrieve the primary input tensor shape from the first session.
    ///
    /// Returns a vector of dimensions if available. Dynamic dimensions (e.g., -1)
    /// are returned as-is.
    pub fn primary_input_shape(&self) -> Option<Vec<i64>> {
        let session_mutex = self.sessions.first()?;
        let session_guard = session_mutex.lock().ok()?;
        let input = session_guard.inputs.first()?;
        match &input.input_type {
            ValueType::Tensor { shape, .. } => Some(shape.iter().copied().collect()),
            _ => None,
        }
    }

    /// Returns the configured or discovered input tensor name.
    fn get_input_name(&self) -> Result<String, MotifError> {
        if let Some(ref name) = self.input_name {
            return Ok(name.clone());
        }
        let session = self.sessions[0].lock().map_err(|_| MotifError::InvalidInput {
            message: "Failed to acquire session lock".to_string(),
        })?;
        session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .ok_or_else(|| MotifError::InvalidInput {
                message: "No inputs available in session - model may be invalid or corrupted"
                    .to_string(),
            })
    }

    /// Returns the configured or discovered output tensor name.
    fn get_output_name(&self) -> Result<String, MotifError> {
        if let Some(ref name) = self.output_name {
            return Ok(name.clone());
        }
        let session = self.sessions[0].lock().map_err(|_| MotifError::InvalidInput {
            message: "Failed to acquire session lock".to_string(),
        })?;
        session
            .outputs
            .first()
            .map(|output| output.name.clone())
            .ok_or_else(|| MotifError::InvalidInput {
                message: "No outputs available in session - model may be invalid or corrupted"
                    .to_string(),
            })
    }

    fn run_inference_with_processor<T>(
        &self,
        x: &Tensor4D,
        processor: impl FnOnce(&[i64], &[f32]) -> Result<T, MotifError>,
    ) -> Result<T, MotifError> {
        let input_shape = x.shape().to_vec();

        if x.len() > MAX_TENSOR_SIZE {
            return Err(MotifError::InvalidInput {
                message: format!(
                    "Input tensor with shape {:?} exceeds maximum allowed size {}",
                    input_shape, MAX_TENSOR_SIZE
                ),
            });
        }

        let input_name = self.get_input_name()?;
        let output_name = self.get_output_name()?;

        let input_tensor = TensorRef::from_array_view(x.view()).map_err(|e| {
            MotifError::tensor_operation(
                &format!(
                    "failed to convert input tensor with shape {:?} for model '{}'",
                    input_shape, self.model_name
                ),
                e,
            )
        })?;

        let inputs = ort::inputs![input_name.as_str() => input_tensor];

        let idx = self
            .next_idx
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed)
            % self.sessions.len();
        let mut session_guard = self.sessions[idx].lock().map_err(|_| {
            MotifError::inference_error(SimpleError::new(format!(
                "Failed to acquire session lock for session {}/{} of model '{}'",
                idx,
                self.sessions.len(),
                self.model_name
            )))
        })?;

        let outputs = session_guard.run(inputs).map_err(|e| {
            MotifError::inference_error(SimpleError::new(format!(
                "ONNX Runtime inference failed for model '{}' with input '{}' -> output '{}': {}",
                self.model_name, input_name, output_name, e
            )))
        })?;

        let (output_shape, output_data) =
            outputs[output_name.as_str()]
                .try_extract_tensor::<f32>()
                .map_err(|e| {
                    MotifError::inference_error(SimpleError::new(format!(
                        "Failed to extract output tensor '{}' as f32 from model '{}': {}",
                        output_name, self.model_name, e
                    )))
                })?;
        let output_shape: Vec<i64> = output_shape.to_vec();

        processor(&output_shape, output_data)
    }

    /// Runs inference and returns a 2D tensor of class probabilities.
    ///
    /// The output shape is [batch_size, num_classes], the standard head of a
    /// classification model.
    pub fn infer_2d(&self, x: &Tensor4D) -> Result<Tensor2D, MotifError> {
        let batch_size = x.shape()[0];
        let input_shape = x.shape().to_vec();
        self.run_inference_with_processor(x, |output_shape, output_data| {
            if output_shape.len() != 2 {
                return Err(MotifError::InvalidInput {
                    message: format!(
                        "Model '{}' 2D inference: expected 2D output tensor, got {}D with shape {:?}",
                        self.model_name,
                        output_shape.len(),
                        output_shape
                    ),
                });
            }

            let num_classes = output_shape[1] as usize;
            let expected_len = batch_size * num_classes;

            if output_data.len() != expected_len {
                return Err(MotifError::InvalidInput {
                    message: format!(
                        "Model '{}' 2D inference: output data size mismatch for input shape {:?} -> output shape {:?}: expected {}, got {}",
                        self.model_name,
                        input_shape,
                        output_shape,
                        expected_len,
                        output_data.len()
                    ),
                });
            }

            let array_view = ArrayView2::from_shape((batch_size, num_classes), output_data)
                .map_err(MotifError::Tensor)?;
            Ok(array_view.to_owned())
        })
    }
}
