#[macro_use]
pub mod bnet;

pub use bnet::model::{Network, NetworkBuilder};
pub use bnet::NetworkError;
