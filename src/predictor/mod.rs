//! Predictors built on the standard read/preprocess/infer/postprocess pipeline.

mod motif_classifier;

pub use motif_classifier::{
    MotifClassificationResult, MotifClassifier, MotifClassifierBuilder, MotifClassifierConfig,
    MotifPredictConfig, MotifPrediction,
};
