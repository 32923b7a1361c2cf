use crate::math::matrix::Matrix;

pub struct QuadraticCost;

impl QuadraticCost {
    /// Scalar cost for one sample: ½ · Σ (output - target)².
    ///
    /// The ½ factor makes the output-layer derivative exactly
    /// `output - target`, which is the formula `derivative` returns.
    pub fn loss(output: &Matrix, target: &Matrix) -> f64 {
        assert_eq!(
            (output.rows, output.cols),
            (target.rows, target.cols),
            "loss shape mismatch: {}x{} vs {}x{}",
            output.rows, output.cols, target.rows, target.cols
        );
        output
            .data
            .iter()
            .zip(target.data.iter())
            .flat_map(|(row_a, row_b)| row_a.iter().zip(row_b.iter()))
            .map(|(a, y)| (a - y).powi(2))
            .sum::<f64>()
            / 2.0
    }

    /// Output-layer cost derivative: `output - target`.
    pub fn derivative(output: &Matrix, target: &Matrix) -> Matrix {
        output.clone() - target.clone()
    }
}
