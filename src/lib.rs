pub mod math;
pub mod activation;
pub mod neuron;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use math::stats::{normalization_constants, normalize};
pub use activation::activation::sigmoid;
pub use neuron::neuron::Neuron;
pub use neuron::error::NeuronError;
