//! Digital Signal Processing
//!
//! Pure functions for signal generation and smoothing. No I/O dependencies.

pub mod convolve;
pub mod filter;
pub mod generator;
pub mod noise;
pub mod spectrum;

// Re-export commonly used items
pub use filter::apply_filter;
pub use generator::{generate, DURATION_SECONDS, SAMPLE_COUNT};
pub use noise::NoiseSource;
pub use spectrum::Spectrum;
