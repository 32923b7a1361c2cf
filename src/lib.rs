pub mod activation;
pub mod loss;
pub mod math;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::{sigmoid, sigmoid_prime};
pub use loss::quadratic::QuadraticCost;
pub use math::matrix::Matrix;
pub use network::network::{argmax, Network};
pub use train::epoch_stats::EpochStats;
pub use train::sgd::sgd;
pub use train::train_config::TrainConfig;
