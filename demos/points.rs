use gradnet::{sgd, Matrix, Network, QuadraticCost, TrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Eight linearly separable 2-D points with binary class labels.
const POINTS: [([f64; 2], usize); 8] = [
    ([3.0, 1.5], 0),
    ([2.0, 1.0], 1),
    ([4.0, 1.5], 0),
    ([3.0, 4.0], 1),
    ([3.5, 0.5], 0),
    ([2.0, 0.5], 1),
    ([5.5, 1.0], 0),
    ([1.0, 1.0], 1),
];

/// One-hot column vector for a class label.
fn one_hot(label: usize, classes: usize) -> Matrix {
    let mut v = vec![0.0; classes];
    v[label] = 1.0;
    Matrix::column(&v)
}

fn total_cost(network: &Network, data: &[(Matrix, Matrix)]) -> f64 {
    data.iter()
        .map(|(x, y)| QuadraticCost::loss(&network.feedforward(x), y))
        .sum()
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut network = Network::new(vec![2, 3, 2], &mut rng);

    let mut training_data: Vec<(Matrix, Matrix)> = POINTS
        .iter()
        .map(|(xy, label)| (Matrix::column(xy), one_hot(*label, 2)))
        .collect();
    let test_data: Vec<(Matrix, usize)> = POINTS
        .iter()
        .map(|(xy, label)| (Matrix::column(xy), *label))
        .collect();

    let cost_before = total_cost(&network, &training_data);

    let config = TrainConfig::new(50, 2, 3.0);
    sgd(&mut network, &mut training_data, &config, Some(&test_data), &mut rng);

    let cost_after = total_cost(&network, &training_data);
    println!("Total quadratic cost: {cost_before:.4} -> {cost_after:.4}");

    for (xy, label) in &POINTS {
        let output = network.feedforward(&Matrix::column(xy));
        println!(
            "Input: {:?} -> predicted {}, label {}",
            xy,
            gradnet::argmax(&output.to_column()),
            label
        );
    }
}
