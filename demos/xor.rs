use gradnet::{Matrix, Network, QuadraticCost};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut network = Network::new(vec![2, 3, 1], &mut rng);

    let samples: Vec<(Matrix, Matrix)> = vec![
        (Matrix::column(&[1.0, 0.0]), Matrix::column(&[1.0])),
        (Matrix::column(&[1.0, 1.0]), Matrix::column(&[0.0])),
        (Matrix::column(&[0.0, 1.0]), Matrix::column(&[1.0])),
        (Matrix::column(&[0.0, 0.0]), Matrix::column(&[0.0])),
    ];

    let eta = 3.0;
    let epochs = 10000;

    for epoch in 0..epochs {
        network.update_mini_batch(&samples, eta);

        if epoch % 1000 == 0 {
            let cost: f64 = samples
                .iter()
                .map(|(x, y)| QuadraticCost::loss(&network.feedforward(x), y))
                .sum();
            println!("Epoch {epoch}: cost = {cost:.6}");
        }
    }

    for (x, _) in &samples {
        let output = network.feedforward(x);
        println!(
            "Input: {:?} -> Output: {:.4}",
            x.to_column(),
            output.data[0][0]
        );
    }
}
