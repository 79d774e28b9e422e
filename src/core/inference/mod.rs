//! Structures and helpers for ONNX Runtime inference.
//!
//! This module centralizes the low level inference engine along with the
//! default image reader used by predictor builders.

pub mod image_reader;
pub mod ort_infer;

pub use image_reader::DefaultImageReader;
pub use ort_infer::OrtInfer;
