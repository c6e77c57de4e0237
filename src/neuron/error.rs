use std::error::Error;
use std::fmt;

/// Validation failures raised by `Neuron::new` and `Neuron::train`.
///
/// Only parameter validation produces these; shape mismatches inside the
/// numerical routines panic at the matrix layer instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeuronError {
    /// `nx` was zero; a neuron needs at least one input feature.
    InvalidFeatureCount,
    /// `iterations` was zero; the training loop must run at least once.
    InvalidIterations,
    /// `alpha` was zero, negative, or NaN.
    InvalidLearningRate,
}

impl fmt::Display for NeuronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeuronError::InvalidFeatureCount => write!(f, "nx must be a positive integer"),
            NeuronError::InvalidIterations => write!(f, "iterations must be a positive integer"),
            NeuronError::InvalidLearningRate => write!(f, "alpha must be positive"),
        }
    }
}

impl Error for NeuronError {}
