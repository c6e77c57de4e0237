use serde::{Serialize, Deserialize};

use crate::activation::sigmoid;
use crate::math::matrix::Matrix;
use crate::neuron::error::NeuronError;

/// Additive constant inside the second log of the cost. Keeps the argument
/// away from ln(0) when an activation rounds to 1.0.
const COST_EPSILON: f64 = 1e-7;

/// A single sigmoid neuron performing binary classification.
///
/// State is a weight row-vector `w` of shape (1, nx), a scalar bias `b`, and
/// the activation `a` of the most recent forward pass. All fields are private;
/// gradient descent is the only path that mutates `w` and `b`, and forward
/// propagation the only one that overwrites `a`.
///
/// Inputs follow the feature-major convention: `x` has shape (nx, m) with one
/// column per sample, and labels `y` have shape (1, m) with entries in {0, 1}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neuron {
    nx: usize,
    w: Matrix,
    b: f64,
    a: Matrix,
}

impl Neuron {
    /// Conventional iteration count for `train`.
    pub const DEFAULT_ITERATIONS: usize = 5000;
    /// Conventional learning rate for `train` and `gradient_descent`.
    pub const DEFAULT_ALPHA: f64 = 0.05;

    /// Creates a neuron with `nx` input features, weights drawn from N(0, 1)
    /// and a zero bias. Fails when `nx` is zero.
    pub fn new(nx: usize) -> Result<Neuron, NeuronError> {
        if nx < 1 {
            return Err(NeuronError::InvalidFeatureCount);
        }
        Ok(Neuron {
            nx,
            w: Matrix::standard_normal(1, nx),
            b: 0.0,
            a: Matrix::default(),
        })
    }

    /// Number of input features, fixed at construction.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Weight row-vector, shape (1, nx).
    pub fn w(&self) -> &Matrix {
        &self.w
    }

    /// Scalar bias.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Activations of the most recent forward pass, shape (1, m); the empty
    /// matrix before any forward pass has run.
    pub fn a(&self) -> &Matrix {
        &self.a
    }

    /// Forward propagation: `z = w·x + b`, then the sigmoid element-wise.
    /// Stores and returns the activation, shape (1, m).
    pub fn forward_prop(&mut self, x: &Matrix) -> &Matrix {
        let z = (self.w.clone() * x.clone()).map(|v| v + self.b);
        self.a = z.map(sigmoid);
        &self.a
    }

    /// Mean binary cross-entropy of activations `a` against labels `y`, both
    /// shape (1, m): `-(1/m) Σ [y·ln(a) + (1-y)·ln(1.0000001 - a)]`.
    /// Panics when the two shapes differ.
    pub fn cost(&self, y: &Matrix, a: &Matrix) -> f64 {
        if y.rows != a.rows || y.cols != a.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let m = y.cols as f64;
        let total: f64 = y.data[0].iter()
            .zip(a.data[0].iter())
            .map(|(yi, ai)| yi * ai.ln() + (1.0 - yi) * (1.0 + COST_EPSILON - ai).ln())
            .sum();
        -total / m
    }

    /// Runs a forward pass over `x`, then returns the binary prediction
    /// (activation thresholded at 0.5; the boundary maps to 1) together with
    /// the cost against `y`.
    pub fn evaluate(&mut self, x: &Matrix, y: &Matrix) -> (Matrix, f64) {
        self.forward_prop(x);
        let cost = self.cost(y, &self.a);
        let prediction = self.a.map(|p| if p >= 0.5 { 1.0 } else { 0.0 });
        (prediction, cost)
    }

    /// One step of full-batch gradient descent for logistic regression:
    /// `dz = a - y`, `dw = (1/m)·(x·dzᵀ)ᵀ`, `db = (1/m)·Σ dz`, then
    /// `w -= alpha·dw` and `b -= alpha·db`. Mutating the parameters is the
    /// sole effect.
    pub fn gradient_descent(&mut self, x: &Matrix, y: &Matrix, a: &Matrix, alpha: f64) {
        let m = y.cols as f64;
        let dz = a.clone() - y.clone();
        let dw = (x.clone() * dz.transpose()).transpose().map(|g| g / m);
        let db = dz.sum() / m;
        self.w = self.w.clone() - dw.map(|g| g * alpha);
        self.b -= alpha * db;
    }

    /// Trains the neuron: exactly `iterations` rounds of forward pass plus
    /// gradient step at fixed `alpha` over the full batch, no early stopping.
    /// Returns a final `evaluate` over the training set.
    ///
    /// Fails when `iterations` is zero or `alpha` is not a positive number.
    pub fn train(
        &mut self,
        x: &Matrix,
        y: &Matrix,
        iterations: usize,
        alpha: f64,
    ) -> Result<(Matrix, f64), NeuronError> {
        if iterations < 1 {
            return Err(NeuronError::InvalidIterations);
        }
        if alpha <= 0.0 || alpha.is_nan() {
            return Err(NeuronError::InvalidLearningRate);
        }

        for _ in 0..iterations {
            let a = self.forward_prop(x).clone();
            self.gradient_descent(x, y, &a, alpha);
        }

        Ok(self.evaluate(x, y))
    }
}

#[cfg(test)]
impl Neuron {
    /// Plants known parameters so tests can pin activations exactly.
    fn with_parameters(w: Matrix, b: f64) -> Neuron {
        Neuron {
            nx: w.cols,
            w,
            b,
            a: Matrix::default(),
        }
    }
}
