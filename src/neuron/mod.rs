pub mod error;
pub mod neuron;

pub use error::NeuronError;
pub use neuron::Neuron;
