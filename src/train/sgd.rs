use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Trains `network` with mini-batch stochastic gradient descent.
///
/// Each epoch shuffles `training_data` in place with `rng` (uniform random
/// permutation), partitions it into contiguous mini-batches of
/// `config.mini_batch_size` (the last batch may be shorter) and applies one
/// `update_mini_batch` per batch in order.
///
/// When `test_data` is supplied the network is evaluated after every epoch
/// and a progress line `Epoch {j}: {correct} / {total}` is printed; without
/// it, `Epoch {j} complete` is printed instead. The per-epoch numbers are
/// also returned as `EpochStats`, one entry per completed epoch.
///
/// # Panics
/// Panics if `training_data` is empty, `config.epochs` or
/// `config.mini_batch_size` is zero, or `config.learning_rate` is not
/// positive. Sample shapes that disagree with the network abort inside the
/// matrix operations.
pub fn sgd<R: Rng>(
    network: &mut Network,
    training_data: &mut [(Matrix, Matrix)],
    config: &TrainConfig,
    test_data: Option<&[(Matrix, usize)]>,
    rng: &mut R,
) -> Vec<EpochStats> {
    assert!(!training_data.is_empty(), "training_data must not be empty");
    assert!(config.epochs > 0, "epochs must be at least 1");
    assert!(config.mini_batch_size > 0, "mini_batch_size must be at least 1");
    assert!(config.learning_rate > 0.0, "learning_rate must be positive");

    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 0..config.epochs {
        let t_start = Instant::now();

        training_data.shuffle(rng);
        for batch in training_data.chunks(config.mini_batch_size) {
            network.update_mini_batch(batch, config.learning_rate);
        }

        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        let (correct, test_total) = match test_data {
            Some(test) => {
                let correct = network.evaluate(test);
                println!("Epoch {epoch}: {correct} / {}", test.len());
                (Some(correct), Some(test.len()))
            }
            None => {
                println!("Epoch {epoch} complete");
                (None, None)
            }
        };

        history.push(EpochStats {
            epoch,
            correct,
            test_total,
            elapsed_ms,
        });
    }

    history
}
