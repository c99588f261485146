//! Dominant-color extraction
//!
//! [`DominantColorExtractor`] samples a downscaled copy of the image, drops
//! paper-white, near-black and near-transparent pixels, and clusters what
//! remains with k-means++ in sRGB. The clustering randomness comes from a
//! caller-supplied [`rand::Rng`], so seeded runs are reproducible.

mod extractor;
mod kmeans;
mod options;
mod sampling;

pub use extractor::DominantColorExtractor;
pub use kmeans::{cluster_count, kmeans, Cluster, LLOYD_ITERATIONS};
pub use options::{DominantOptions, DEFAULT_COLOR_COUNT, DEFAULT_MAX_SAMPLE_WIDTH};
