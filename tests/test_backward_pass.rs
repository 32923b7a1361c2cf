// Tests for backpropagation gradient shapes and the mini-batch update rule.

use gradnet::{Matrix, Network};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_matrices_close(a: &Matrix, b: &Matrix, tol: f64) {
    assert_eq!((a.rows, a.cols), (b.rows, b.cols));
    for (row_a, row_b) in a.data.iter().zip(b.data.iter()) {
        for (x, y) in row_a.iter().zip(row_b.iter()) {
            assert!((x - y).abs() < tol, "expected {y}, got {x}");
        }
    }
}

#[test]
fn gradient_shapes_match_parameter_shapes() {
    let mut rng = StdRng::seed_from_u64(10);
    let network = Network::new(vec![4, 6, 3, 2], &mut rng);

    let x = Matrix::column(&[0.1, 0.9, -0.3, 0.5]);
    let y = Matrix::column(&[1.0, 0.0]);
    let (nabla_b, nabla_w) = network.backprop(&x, &y);

    assert_eq!(nabla_b.len(), network.biases.len());
    assert_eq!(nabla_w.len(), network.weights.len());
    for (g, b) in nabla_b.iter().zip(network.biases.iter()) {
        assert_eq!((g.rows, g.cols), (b.rows, b.cols));
    }
    for (g, w) in nabla_w.iter().zip(network.weights.iter()) {
        assert_eq!((g.rows, g.cols), (w.rows, w.cols));
    }
}

#[test]
fn single_sample_batch_reduces_to_plain_sgd_step() {
    let mut rng = StdRng::seed_from_u64(11);
    let network = Network::new(vec![2, 3, 1], &mut rng);
    let mut updated = network.clone();

    let x = Matrix::column(&[0.4, -0.7]);
    let y = Matrix::column(&[1.0]);
    let eta = 0.5;

    let (nabla_b, nabla_w) = network.backprop(&x, &y);
    updated.update_mini_batch(&[(x, y)], eta);

    for l in 0..network.weights.len() {
        let expected = network.weights[l].clone() - nabla_w[l].map(|g| g * eta);
        assert_matrices_close(&updated.weights[l], &expected, 1e-12);

        let expected = network.biases[l].clone() - nabla_b[l].map(|g| g * eta);
        assert_matrices_close(&updated.biases[l], &expected, 1e-12);
    }
}

#[test]
fn duplicated_sample_batch_equals_single_sample_batch() {
    // Averaging over a batch of identical samples must equal the
    // single-sample update.
    let mut rng = StdRng::seed_from_u64(12);
    let network = Network::new(vec![3, 4, 2], &mut rng);

    let x = Matrix::column(&[0.2, 0.8, -0.1]);
    let y = Matrix::column(&[0.0, 1.0]);
    let eta = 1.0;

    let mut single = network.clone();
    single.update_mini_batch(&[(x.clone(), y.clone())], eta);

    let mut doubled = network.clone();
    doubled.update_mini_batch(&[(x.clone(), y.clone()), (x, y)], eta);

    for l in 0..network.weights.len() {
        assert_matrices_close(&doubled.weights[l], &single.weights[l], 1e-9);
        assert_matrices_close(&doubled.biases[l], &single.biases[l], 1e-9);
    }
}

#[test]
fn update_mini_batch_leaves_sizes_untouched() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut network = Network::new(vec![2, 5, 2], &mut rng);
    let sizes_before = network.sizes.clone();

    let batch = vec![
        (Matrix::column(&[0.0, 1.0]), Matrix::column(&[1.0, 0.0])),
        (Matrix::column(&[1.0, 0.0]), Matrix::column(&[0.0, 1.0])),
    ];
    network.update_mini_batch(&batch, 3.0);

    assert_eq!(network.sizes, sizes_before);
    for (l, w) in network.weights.iter().enumerate() {
        assert_eq!((w.rows, w.cols), (sizes_before[l + 1], sizes_before[l]));
    }
}

#[test]
#[should_panic(expected = "mini-batch must not be empty")]
fn update_mini_batch_panics_on_empty_batch() {
    let mut rng = StdRng::seed_from_u64(14);
    let mut network = Network::new(vec![2, 2], &mut rng);
    network.update_mini_batch(&[], 0.1);
}

#[test]
#[should_panic(expected = "shape mismatch")]
fn backprop_panics_on_target_shape_mismatch() {
    let mut rng = StdRng::seed_from_u64(15);
    let network = Network::new(vec![2, 3, 2], &mut rng);
    let x = Matrix::column(&[0.5, 0.5]);
    let y = Matrix::column(&[1.0, 0.0, 0.0]);
    let _ = network.backprop(&x, &y);
}
