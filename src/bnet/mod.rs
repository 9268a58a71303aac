#[macro_use]
pub mod common;
pub mod inference;
pub mod model;
pub mod scenarios;

// Re-export color printing macros
pub use crate::print_blue;
pub use crate::print_green;
pub use crate::print_red;
pub use crate::print_yellow;

/// Exports the main types for easy access
pub use common::error::NetworkError;
pub use inference::{estimate_conditional, estimate_conditional_mcmc, estimate_prior, sample_joint};
pub use model::{derive_conditional_from_examples, CptIndexing, Evidence, Network, NetworkBuilder, NodeId};
