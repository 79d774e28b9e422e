//! Shared processor types.

use serde::{Deserialize, Serialize};

/// Memory layout of the channel axis in the model input tensor.
///
/// Keras-exported models typically expect `HWC` (channels-last), while most
/// PyTorch-exported models expect `CHW` (channels-first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelOrder {
    /// Channels-first layout: [batch, channels, height, width].
    CHW,
    /// Channels-last layout: [batch, height, width, channels].
    HWC,
}

impl Default for ChannelOrder {
    fn default() -> Self {
        Self::HWC
    }
}
