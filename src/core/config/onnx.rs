//! ONNX Runtime session configuration.

use serde::{Deserialize, Serialize};

/// Graph optimization levels for ONNX Runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OrtGraphOptimizationLevel {
    /// Disable all optimizations.
    DisableAll,
    /// Enable basic optimizations.
    Level1,
    /// Enable extended optimizations.
    Level2,
    /// Enable all optimizations.
    Level3,
}

impl Default for OrtGraphOptimizationLevel {
    fn default() -> Self {
        Self::Level1
    }
}

/// Configuration for ONNX Runtime sessions.
///
/// This struct contains threading and optimization settings applied when a
/// session is created. The motif classifier is a small CPU-served model, so
/// no execution-provider selection is exposed here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrtSessionConfig {
    /// Number of threads used to parallelize execution within nodes.
    pub intra_threads: Option<usize>,
    /// Number of threads used to parallelize execution across nodes.
    pub inter_threads: Option<usize>,
    /// Enable parallel execution mode.
    pub parallel_execution: Option<bool>,
    /// Graph optimization level.
    pub optimization_level: Option<OrtGraphOptimizationLevel>,
}

impl OrtSessionConfig {
    /// Creates a new OrtSessionConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of intra-op threads.
    pub fn with_intra_threads(mut self, threads: usize) -> Self {
        self.intra_threads = Some(threads);
        self
    }

    /// Sets the number of inter-op threads.
    pub fn with_inter_threads(mut self, threads: usize) -> Self {
        self.inter_threads = Some(threads);
        self
    }

    /// Enables or disables parallel execution.
    pub fn with_parallel_execution(mut self, enabled: bool) -> Self {
        self.parallel_execution = Some(enabled);
        self
    }

    /// Sets the graph optimization level.
    pub fn with_optimization_level(mut self, level: OrtGraphOptimizationLevel) -> Self {
        self.optimization_level = Some(level);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ort_session_config_builder() {
        let cfg = OrtSessionConfig::new()
            .with_intra_threads(2)
            .with_parallel_execution(false)
            .with_optimization_level(OrtGraphOptimizationLevel::Level3);
        assert_eq!(cfg.intra_threads, Some(2));
        assert_eq!(cfg.parallel_execution, Some(false));
        assert!(matches!(
            cfg.optimization_level,
            Some(OrtGraphOptimizationLevel::Level3)
        ));
    }

    #[test]
    fn test_ort_session_config_serde_defaults() {
        let cfg: OrtSessionConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.intra_threads.is_none());
        assert!(cfg.optimization_level.is_none());
    }
}
