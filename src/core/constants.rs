//! Constants used throughout the classification pipeline.

/// The default threshold for parallel processing.
///
/// Batches smaller than this are loaded sequentially; larger batches switch
/// to parallel image loading.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4;

/// The default batch size for processing.
pub const DEFAULT_BATCH_SIZE: usize = 8;

/// The default value for top-k selection in classification results.
pub const DEFAULT_TOPK: usize = 5;

/// The default input shape (width, height) expected by the motif classifier.
pub const DEFAULT_CLASSIFICATION_INPUT_SHAPE: (u32, u32) = (224, 224);

/// The default confidence threshold below which a prediction is flagged as
/// low-confidence and capture guidance is attached.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.70;

/// The maximum allowed tensor size.
///
/// This constant defines the maximum number of elements allowed in an input
/// tensor to prevent memory issues.
pub const MAX_TENSOR_SIZE: usize = 100_000_000;
