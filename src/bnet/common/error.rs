//! Error types for network construction and sampling.

use thiserror::Error;

/// Errors surfaced by the network model and the sampling engine.
///
/// Every variant describes malformed input (topology, CPT, examples, or a
/// sample budget too small for the evidence). None of them are transient, so
/// callers fix the input rather than retrying.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NetworkError {
    #[error("malformed CPT for '{node}': expected {expected} entries for {parents} parent(s), got {actual}")]
    MalformedCpt {
        node: String,
        parents: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid probability {value} at CPT index {index} of '{node}'")]
    InvalidProbability {
        node: String,
        index: usize,
        value: f64,
    },

    /// Legacy CPT indexing only understands 0, 1 or 2 parents.
    #[error("unsupported topology: '{node}' has {parents} parents, legacy indexing supports at most 2")]
    UnsupportedTopology { node: String, parents: usize },

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("duplicate node name: {0}")]
    DuplicateNode(String),

    /// A parent has to be constructed before any of its children.
    #[error("'{node}' references parent '{parent}' which has not been constructed yet")]
    ForwardReference { node: String, parent: String },

    #[error("'{node}' has no sampled value yet")]
    Unsampled { node: String },

    /// Zero samples survived the evidence filter, so the estimate is 0/0.
    #[error("insufficient samples: none of {drawn} samples matched the evidence")]
    InsufficientSamples { drawn: usize },

    #[error("division by zero: no examples with condition = {condition}")]
    DivisionByZero { condition: bool },

    #[error("impossible state while resampling '{node}': both values have zero weight")]
    ImpossibleState { node: String },
}
