//! Batik motif domain data: class labels and their philosophy texts.
//!
//! The label order is fixed by the trained model and must never be
//! rearranged; class index `i` in the model output corresponds to
//! `motif_labels()[i]`.

mod motif;
mod philosophy;

pub use motif::{MOTIF_CLASS_COUNT, motif_labels};
pub use philosophy::{
    LOW_CONFIDENCE_NOTICE, PHILOSOPHY_FALLBACK, capture_guidance, philosophy_for,
    philosophy_or_fallback,
};
