/// Hyperparameters for one `sgd` run.
///
/// # Fields
/// - `epochs`          — total number of full passes over the training data
/// - `mini_batch_size` — samples per mini-batch; use `1` for online SGD.
///                       The last batch of an epoch may be smaller.
/// - `learning_rate`   — step size η applied per mini-batch update
pub struct TrainConfig {
    pub epochs: usize,
    pub mini_batch_size: usize,
    pub learning_rate: f64,
}

impl TrainConfig {
    pub fn new(epochs: usize, mini_batch_size: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            mini_batch_size,
            learning_rate,
        }
    }
}
