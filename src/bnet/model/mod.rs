pub mod cpt;
pub mod evidence;
pub mod network;
pub mod node;

pub use cpt::{derive_conditional_from_examples, Cpt, CptIndexing, Example};
pub use evidence::Evidence;
pub use network::{Network, NetworkBuilder};
pub use node::{NodeId, VariableNode};
