//! Pluggable randomness source for the response simulator
//!
//! The simulator draws every random decision through this seam so tests can
//! substitute scripted sequences for real entropy.

use rand::Rng;

pub trait Sampler: Send + Sync {
    /// Uniform draw from `[0, 1)`.
    fn next_fraction(&self) -> f64;
}

/// Production sampler backed by the thread-local generator.
pub struct ThreadRngSampler;

impl Sampler for ThreadRngSampler {
    fn next_fraction(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}
