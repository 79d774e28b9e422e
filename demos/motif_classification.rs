//! Batik Motif Classification Example
//!
//! This example classifies batik images into the 20 Lokatmala motif classes
//! and prints the philosophy text behind each detected motif. Low-confidence
//! predictions come with guidance for taking a better picture.
//!
//! Usage:
//! ```
//! cargo run --example motif_classification -- --model-path <path_to_model> <image_paths>...
//! ```

use caritaloka::core::init_tracing;
use caritaloka::predictor::MotifClassifierBuilder;
use clap::Parser;
use std::path::Path;
use tracing::{error, info, warn};

/// Command-line arguments for the motif classification example
#[derive(Parser)]
#[command(name = "motif_classification")]
#[command(about = "Batik Motif Classification Example - identifies Lokatmala batik motifs")]
struct Args {
    /// Path to the ONNX model file
    #[arg(short, long)]
    model_path: String,

    /// Image file paths to process
    #[arg(required = true)]
    images: Vec<String>,

    /// Number of images to process per batch
    #[arg(short, long, default_value_t = 8)]
    batch_size: usize,

    /// Confidence threshold below which predictions are flagged
    #[arg(short, long, default_value_t = 0.70)]
    threshold: f32,

    /// Print the full philosophy text for each detected motif
    #[arg(long)]
    philosophy: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args = Args::parse();

    info!("Batik Motif Classification Example");

    let model_path = &args.model_path;
    if !Path::new(model_path).exists() {
        error!("Model file not found: {}", model_path);
        return Err("Model file not found".into());
    }

    // Filter out non-existent image files and log errors for missing files
    let existing_images: Vec<String> = args
        .images
        .iter()
        .filter(|path| {
            let exists = Path::new(path).exists();
            if !exists {
                error!("Image file not found: {}", path);
            }
            exists
        })
        .cloned()
        .collect();

    if existing_images.is_empty() {
        error!("No valid image files found");
        return Err("No valid image files found".into());
    }

    let classifier = MotifClassifierBuilder::new()
        .batch_size(args.batch_size)
        .confidence_threshold(args.threshold)
        .build(Path::new(model_path))?;

    info!("Classifying {} image(s)...", existing_images.len());
    let result = classifier.classify(&existing_images)?;

    for (i, prediction) in result.predictions().iter().enumerate() {
        info!("{}. {}", i + 1, prediction.input_path);
        info!(
            "   Motif Terdeteksi: {} (Tingkat Keyakinan: {:.2}%)",
            prediction.label,
            prediction.score * 100.0
        );

        if !prediction.confident {
            warn!(
                "   Keyakinan rendah. Silakan coba ulang dengan gambar yang lebih baik, dengan memperhatikan spesifikasi sebagai berikut:"
            );
            for tip in caritaloka::domain::capture_guidance() {
                warn!("   - {}", tip);
            }
        }

        if args.philosophy {
            info!("   Filosofi Motif: {}", prediction.philosophy);
        }
    }

    info!("Example completed!");
    Ok(())
}
