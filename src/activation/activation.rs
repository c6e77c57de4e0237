use std::f64::consts::E;

/// The logistic sigmoid `1 / (1 + e^(-z))`.
///
/// Maps any real input into the open interval (0, 1); used as the neuron's
/// output nonlinearity so activations read as probabilities.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + E.powf(-z))
}
