pub mod epoch_stats;
pub mod sgd;
pub mod train_config;

pub use epoch_stats::EpochStats;
pub use sgd::sgd;
pub use train_config::TrainConfig;
