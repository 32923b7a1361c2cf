use rand::Rng;

use crate::activation::{sigmoid, sigmoid_prime};
use crate::math::matrix::Matrix;

/// A fully-connected feedforward network trained with mini-batch SGD.
///
/// `sizes` lists the number of neurons per layer, input layer first. A
/// network of `L` layers carries `L - 1` weight matrices and bias vectors:
/// `weights[l]` has shape `sizes[l+1] × sizes[l]` and `biases[l]` is a
/// `sizes[l+1] × 1` column vector. Parameters are initialized once at
/// construction and mutated in place by every update; `sizes` never changes.
#[derive(Debug, Clone)]
pub struct Network {
    pub sizes: Vec<usize>,
    pub weights: Vec<Matrix>,
    pub biases: Vec<Matrix>,
}

impl Network {
    /// Builds a network with every weight and bias drawn from N(0, 1)
    /// using the caller's random source.
    ///
    /// # Panics
    /// Panics if `sizes` has fewer than two entries or any entry is zero.
    pub fn new<R: Rng>(sizes: Vec<usize>, rng: &mut R) -> Network {
        assert!(sizes.len() >= 2, "a network needs at least an input and an output layer");
        assert!(sizes.iter().all(|&s| s > 0), "every layer size must be positive");

        let biases = sizes[1..]
            .iter()
            .map(|&y| Matrix::gaussian(y, 1, rng))
            .collect();
        let weights = sizes
            .windows(2)
            .map(|pair| Matrix::gaussian(pair[1], pair[0], rng))
            .collect();

        Network { sizes, weights, biases }
    }

    pub fn num_layers(&self) -> usize {
        self.sizes.len()
    }

    /// Forward pass: applies `a = σ(W·a + b)` layer by layer and returns the
    /// output layer's activation column vector. No side effects.
    ///
    /// # Panics
    /// Panics if `input` is not a `sizes[0] × 1` column vector.
    pub fn feedforward(&self, input: &Matrix) -> Matrix {
        assert_eq!(
            (input.rows, input.cols),
            (self.sizes[0], 1),
            "input must be a {}x1 column vector, got {}x{}",
            self.sizes[0], input.rows, input.cols
        );

        let mut a = input.clone();
        for (w, b) in self.weights.iter().zip(self.biases.iter()) {
            a = (w.clone() * a + b.clone()).map(sigmoid);
        }
        a
    }

    /// Backpropagation for a single training sample `(x, y)`.
    ///
    /// Returns `(bias_gradients, weight_gradients)` for the quadratic cost,
    /// shaped exactly like `self.biases` and `self.weights` layer for layer.
    /// The intermediate activation trace lives only for the duration of this
    /// call.
    pub fn backprop(&self, x: &Matrix, y: &Matrix) -> (Vec<Matrix>, Vec<Matrix>) {
        let mut nabla_b: Vec<Matrix> = self
            .biases
            .iter()
            .map(|b| Matrix::zeros(b.rows, b.cols))
            .collect();
        let mut nabla_w: Vec<Matrix> = self
            .weights
            .iter()
            .map(|w| Matrix::zeros(w.rows, w.cols))
            .collect();

        // Forward pass, retaining every pre-activation z and activation a.
        let mut activation = x.clone();
        let mut activations = vec![x.clone()];
        let mut zs: Vec<Matrix> = Vec::with_capacity(self.weights.len());
        for (w, b) in self.weights.iter().zip(self.biases.iter()) {
            let z = w.clone() * activation + b.clone();
            activation = z.map(sigmoid);
            zs.push(z);
            activations.push(activation.clone());
        }

        // Output error: δ = (a - y) ⊙ σ'(z).
        let last = zs.len() - 1;
        let mut delta = (activations[last + 1].clone() - y.clone())
            .hadamard(&zs[last].map(sigmoid_prime));
        nabla_b[last] = delta.clone();
        nabla_w[last] = delta.clone() * activations[last].transpose();

        // Propagate the error backwards through the hidden layers.
        for l in (0..last).rev() {
            delta = (self.weights[l + 1].transpose() * delta)
                .hadamard(&zs[l].map(sigmoid_prime));
            nabla_b[l] = delta.clone();
            nabla_w[l] = delta.clone() * activations[l].transpose();
        }

        (nabla_b, nabla_w)
    }

    /// Applies one gradient-descent step averaged over `batch`:
    /// `w -= (eta / |batch|) · Σ ∇w`, and likewise for biases. Pure in-place
    /// mutation; gradients are summed over the batch in sample order.
    ///
    /// # Panics
    /// Panics if `batch` is empty or any sample's shape disagrees with the
    /// network.
    pub fn update_mini_batch(&mut self, batch: &[(Matrix, Matrix)], eta: f64) {
        assert!(!batch.is_empty(), "mini-batch must not be empty");

        let mut nabla_b: Vec<Matrix> = self
            .biases
            .iter()
            .map(|b| Matrix::zeros(b.rows, b.cols))
            .collect();
        let mut nabla_w: Vec<Matrix> = self
            .weights
            .iter()
            .map(|w| Matrix::zeros(w.rows, w.cols))
            .collect();

        for (x, y) in batch {
            let (delta_b, delta_w) = self.backprop(x, y);
            for (acc, d) in nabla_b.iter_mut().zip(delta_b) {
                *acc = acc.clone() + d;
            }
            for (acc, d) in nabla_w.iter_mut().zip(delta_w) {
                *acc = acc.clone() + d;
            }
        }

        let step = eta / batch.len() as f64;
        for (w, nw) in self.weights.iter_mut().zip(nabla_w) {
            *w = w.clone() - nw.map(|g| g * step);
        }
        for (b, nb) in self.biases.iter_mut().zip(nabla_b) {
            *b = b.clone() - nb.map(|g| g * step);
        }
    }

    /// Counts test samples whose predicted class, the argmax of the output
    /// activation, matches the label. Read-only; computes no gradients.
    pub fn evaluate(&self, test_data: &[(Matrix, usize)]) -> usize {
        test_data
            .iter()
            .filter(|(x, label)| argmax(&self.feedforward(x).to_column()) == *label)
            .count()
    }
}

/// Index of the maximum element in a slice.
pub fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
