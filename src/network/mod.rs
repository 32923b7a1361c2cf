pub mod network;

pub use network::{argmax, Network};
