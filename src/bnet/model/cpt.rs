use clap::ValueEnum;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::bnet::common::error::NetworkError;

/// A single training observation in the form `(condition, outcome)`.
pub type Example = (bool, bool);

/// How a node's parent assignment is turned into a CPT slot.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
pub enum CptIndexing {
    /// Switch on arity: 0, 1 or 2 parents. With two parents the mixed
    /// assignments (true, false) and (false, true) both read slot 1 and
    /// (false, false) reads slot 2; slot 3 is never consulted.
    #[default]
    #[serde(rename = "legacy")]
    Legacy,

    /// `index = Σ (parent_i == false) * 2^(k-i-1)` for any number of parents.
    #[serde(rename = "binary")]
    Binary,
}

/// Conditional probability table: P(node = true) for each parent assignment.
///
/// Slot 0 corresponds to every parent being true; the last slot to every
/// parent being false.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cpt {
    probabilities: Vec<f64>,
}

impl Cpt {
    pub fn new(probabilities: Vec<f64>) -> Self {
        Cpt { probabilities }
    }

    pub fn entries(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Checks `len == 2^parents` and that every entry is a probability.
    pub fn validate(&self, node: &str, parents: usize) -> Result<(), NetworkError> {
        let expected = u32::try_from(parents)
            .ok()
            .and_then(|shift| 1usize.checked_shl(shift))
            .unwrap_or(usize::MAX);
        if self.probabilities.len() != expected {
            return Err(NetworkError::MalformedCpt {
                node: node.to_string(),
                parents,
                expected,
                actual: self.probabilities.len(),
            });
        }
        for (index, &value) in self.probabilities.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(NetworkError::InvalidProbability {
                    node: node.to_string(),
                    index,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Returns the literal table entry addressed by `parent_values`.
    pub fn probability_of_true(
        &self,
        node: &str,
        parent_values: &[bool],
        indexing: CptIndexing,
    ) -> Result<f64, NetworkError> {
        let index = match indexing {
            CptIndexing::Legacy => legacy_index(node, parent_values)?,
            CptIndexing::Binary => binary_index(parent_values),
        };
        trace!("cpt lookup {} {:?} -> slot {}", node, parent_values, index);
        self.probabilities
            .get(index)
            .copied()
            .ok_or_else(|| NetworkError::MalformedCpt {
                node: node.to_string(),
                parents: parent_values.len(),
                expected: index + 1,
                actual: self.probabilities.len(),
            })
    }
}

/// Arity switch used by the reference networks.
pub fn legacy_index(node: &str, parent_values: &[bool]) -> Result<usize, NetworkError> {
    match parent_values {
        [] => Ok(0),
        [p0] => Ok(if *p0 { 0 } else { 1 }),
        [p0, p1] => Ok(match (p0, p1) {
            (true, true) => 0,
            (true, false) | (false, true) => 1,
            (false, false) => 2,
        }),
        _ => Err(NetworkError::UnsupportedTopology {
            node: node.to_string(),
            parents: parent_values.len(),
        }),
    }
}

/// Reads the parent assignment as a big-endian bit vector where a false
/// parent sets its bit.
pub fn binary_index(parent_values: &[bool]) -> usize {
    parent_values
        .iter()
        .fold(0usize, |index, &value| (index << 1) | usize::from(!value))
}

/// Learns `[P(outcome | condition), P(outcome | !condition)]` by counting.
///
/// Fails when either branch of the condition has no supporting examples,
/// since the training set cannot define that table row.
pub fn derive_conditional_from_examples(examples: &[Example]) -> Result<[f64; 2], NetworkError> {
    // slot 0: condition true, slot 1: condition false
    let mut positive = [0usize; 2];
    let mut total = [0usize; 2];

    for &(condition, outcome) in examples {
        let slot = if condition { 0 } else { 1 };
        positive[slot] += usize::from(outcome);
        total[slot] += 1;
    }

    if total[0] == 0 {
        return Err(NetworkError::DivisionByZero { condition: true });
    }
    if total[1] == 0 {
        return Err(NetworkError::DivisionByZero { condition: false });
    }

    Ok([
        positive[0] as f64 / total[0] as f64,
        positive[1] as f64 / total[1] as f64,
    ])
}
