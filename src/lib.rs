//! # Caritaloka
//!
//! A Rust library for identifying Lokatmala batik motifs in images using a
//! pre-trained ONNX classifier, and for looking up the cultural philosophy
//! associated with each motif.
//!
//! The classifier recognizes twenty named motif categories. An input image is
//! resized to the model's fixed input shape, normalized, and run through a
//! single forward pass; the highest-probability class is the detected motif.
//! Predictions below a configurable confidence threshold are flagged and
//! accompanied by image-capture guidance.
//!
//! ## Modules
//!
//! * [`core`] - Error handling, configuration, batching, and ONNX inference
//! * [`domain`] - Motif labels and philosophy texts
//! * [`predictor`] - The motif classifier
//! * [`processors`] - Resize, normalization, and top-k processing
//! * [`utils`] - Image loading helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use caritaloka::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let classifier = MotifClassifierBuilder::new()
//!     .topk(5)
//!     .confidence_threshold(0.7)
//!     .build(Path::new("models/lokatmala.onnx"))?;
//!
//! let result = classifier.classify(&[Path::new("batik.jpg")])?;
//! for prediction in result.predictions() {
//!     println!("{}", prediction);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Classification from raw bytes (e.g. an uploaded file or camera capture):
//!
//! ```rust,no_run
//! use caritaloka::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let classifier = MotifClassifierBuilder::new().build(Path::new("models/lokatmala.onnx"))?;
//! let payload: Vec<u8> = std::fs::read("upload.png")?;
//! let result = classifier.classify_bytes(&payload)?;
//! if let Some(prediction) = result.predictions().first() {
//!     println!("{} ({:.1}%)", prediction.label, prediction.score * 100.0);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod domain;
pub mod predictor;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use caritaloka::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{MotifError, MotifResult};
    pub use crate::domain::{motif_labels, philosophy_or_fallback};
    pub use crate::predictor::{
        MotifClassificationResult, MotifClassifier, MotifClassifierBuilder, MotifPrediction,
    };
    pub use crate::utils::{load_image, load_image_from_bytes};
}
