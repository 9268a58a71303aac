use serde::{Deserialize, Serialize};
use std::fmt;

use super::cpt::Cpt;

/// Position of a node in its network. Parents always have smaller ids than
/// their children, so id order is a topological order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A boolean random variable with its parents and CPT.
#[derive(Clone, Debug)]
pub struct VariableNode {
    name: String,
    parents: Vec<NodeId>,
    cpt: Cpt,
    /// Overwritten on every sampling pass; `None` until the first one.
    value: Option<bool>,
}

impl VariableNode {
    pub(crate) fn new(name: String, parents: Vec<NodeId>, cpt: Cpt) -> Self {
        VariableNode {
            name,
            parents,
            cpt,
            value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    pub fn cpt(&self) -> &Cpt {
        &self.cpt
    }

    pub fn value(&self) -> Option<bool> {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: bool) {
        self.value = Some(value);
    }
}
