//! Image processing stages used by the classifier.
//!
//! The preprocessing pipeline resizes images to the model's fixed input size,
//! then normalizes pixel values into a 4D tensor. Postprocessing extracts the
//! top-k class predictions from the model output.

mod normalization;
mod resize;
mod topk;
mod types;

pub use normalization::NormalizeImage;
pub use resize::ResizeToFixed;
pub use topk::{Topk, TopkResult};
pub use types::ChannelOrder;
