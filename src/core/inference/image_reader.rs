//! Batch image decoding for predictor input.
//!
//! Decoding is the slowest part of preprocessing for typical batik photos, so
//! the reader switches from sequential to rayon-parallel decoding once a batch
//! reaches its threshold. Small batches stay sequential to avoid the thread
//! pool overhead.

use crate::core::constants::DEFAULT_PARALLEL_THRESHOLD;
use crate::core::{errors::MotifError, traits::ImageReader};
use image::RgbImage;
use rayon::prelude::*;
use std::path::Path;

/// Decodes batches of RGB images from disk.
///
/// Batches of at least `parallel_threshold` paths are decoded in parallel.
/// The first path that fails to decode aborts the whole batch.
#[derive(Debug, Clone)]
pub struct DefaultImageReader {
    parallel_threshold: usize,
}

impl DefaultImageReader {
    /// Creates a reader with the default parallelism threshold.
    pub fn new() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Creates a reader that switches to parallel decoding at the given batch size.
    pub fn with_parallel_threshold(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }
}

impl Default for DefaultImageReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for DefaultImageReader {
    type Error = MotifError;

    fn apply<P: AsRef<Path> + Send + Sync>(
        &self,
        imgs: impl IntoIterator<Item = P>,
    ) -> Result<Vec<RgbImage>, Self::Error> {
        let paths: Vec<P> = imgs.into_iter().collect();

        if paths.len() >= self.parallel_threshold {
            paths.par_iter().map(crate::utils::load_image).collect()
        } else {
            paths.iter().map(crate::utils::load_image).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn write_sample(dir: &Path, name: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(8, 8, Rgb([120, 60, 30]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_reads_batch_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<_> = (0..3)
            .map(|i| write_sample(dir.path(), &format!("img_{i}.png")))
            .collect();

        let reader = DefaultImageReader::new();
        let images = reader.apply(paths).unwrap();
        assert_eq!(images.len(), 3);
        assert!(images.iter().all(|img| img.dimensions() == (8, 8)));
    }

    #[test]
    fn test_parallel_branch_matches_sequential() {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<_> = (0..5)
            .map(|i| write_sample(dir.path(), &format!("p_{i}.png")))
            .collect();

        // Threshold of 1 forces the rayon branch.
        let parallel = DefaultImageReader::with_parallel_threshold(1);
        let sequential = DefaultImageReader::with_parallel_threshold(100);

        let a = parallel.apply(paths.clone()).unwrap();
        let b = sequential.apply(paths).unwrap();
        assert_eq!(a.len(), b.len());
        assert_eq!(a[2].get_pixel(4, 4), b[2].get_pixel(4, 4));
    }

    #[test]
    fn test_missing_file_aborts_batch() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_sample(dir.path(), "good.png");
        let missing = dir.path().join("missing.png");

        let reader = DefaultImageReader::new();
        assert!(reader.apply(vec![good, missing]).is_err());
    }

    #[test]
    fn test_empty_batch() {
        let reader = DefaultImageReader::new();
        let images = reader.apply(Vec::<std::path::PathBuf>::new()).unwrap();
        assert!(images.is_empty());
    }
}
