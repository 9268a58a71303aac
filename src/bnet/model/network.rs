use log::{debug, info};
use std::collections::HashMap;
use std::fmt;

use super::cpt::{derive_conditional_from_examples, Cpt, CptIndexing, Example};
use super::node::{NodeId, VariableNode};
use crate::bnet::common::error::NetworkError;

/// A fixed DAG of boolean variables stored in construction order.
///
/// The structure never changes after [`NetworkBuilder::build`]; only the
/// per-node sampled values are mutated.
#[derive(Clone, Debug)]
pub struct Network {
    nodes: Vec<VariableNode>,
    index: HashMap<String, NodeId>,
    children: Vec<Vec<NodeId>>,
    indexing: CptIndexing,
}

impl Network {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn indexing(&self) -> CptIndexing {
        self.indexing
    }

    /// Node ids in topological (construction) order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn nodes(&self) -> &[VariableNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Result<&VariableNode, NetworkError> {
        self.nodes
            .get(id.index())
            .ok_or_else(|| NetworkError::UnknownNode(id.to_string()))
    }

    pub fn node_by_name(&self, name: &str) -> Result<&VariableNode, NetworkError> {
        self.node(self.id_of(name)?)
    }

    pub fn id_of(&self, name: &str) -> Result<NodeId, NetworkError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| NetworkError::UnknownNode(name.to_string()))
    }

    pub fn name_of(&self, id: NodeId) -> Result<&str, NetworkError> {
        Ok(self.node(id)?.name())
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], NetworkError> {
        self.children
            .get(id.index())
            .map(Vec::as_slice)
            .ok_or_else(|| NetworkError::UnknownNode(id.to_string()))
    }

    pub fn value(&self, id: NodeId) -> Result<Option<bool>, NetworkError> {
        Ok(self.node(id)?.value())
    }

    /// Overwrites the current value of a node.
    pub fn assign(&mut self, id: NodeId, value: bool) -> Result<(), NetworkError> {
        let node = self
            .nodes
            .get_mut(id.index())
            .ok_or_else(|| NetworkError::UnknownNode(id.to_string()))?;
        node.set_value(value);
        Ok(())
    }

    /// P(node = true | current values of its parents).
    ///
    /// Every parent must already carry a value from the current pass. The
    /// result is always one literal CPT entry, never an interpolation.
    pub fn conditional_probability_of_true(&self, id: NodeId) -> Result<f64, NetworkError> {
        let node = self.node(id)?;
        let mut parent_values = Vec::with_capacity(node.parents().len());
        for &parent in node.parents() {
            let parent_node = self.node(parent)?;
            let value = parent_node.value().ok_or_else(|| NetworkError::Unsampled {
                node: parent_node.name().to_string(),
            })?;
            parent_values.push(value);
        }
        node.cpt()
            .probability_of_true(node.name(), &parent_values, self.indexing)
    }

    /// P(node = value | parents), the complement when `value` is false.
    pub fn probability_of(&self, id: NodeId, value: bool) -> Result<f64, NetworkError> {
        let p = self.conditional_probability_of_true(id)?;
        Ok(if value { p } else { 1.0 - p })
    }

    /// `name = value` pairs in node order, comma separated.
    pub fn render_state(&self) -> String {
        self.nodes
            .iter()
            .map(|node| match node.value() {
                Some(value) => format!("{} = {}", node.name(), value),
                None => format!("{} = unset", node.name()),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_state())
    }
}

/// Collects nodes in topological order and validates each one on insertion.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    nodes: Vec<VariableNode>,
    index: HashMap<String, NodeId>,
    indexing: CptIndexing,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indexing(mut self, indexing: CptIndexing) -> Self {
        self.indexing = indexing;
        self
    }

    /// Adds a node whose parents must all have been added already.
    pub fn add_node(
        &mut self,
        name: &str,
        parents: &[&str],
        probabilities: Vec<f64>,
    ) -> Result<NodeId, NetworkError> {
        if self.index.contains_key(name) {
            return Err(NetworkError::DuplicateNode(name.to_string()));
        }

        let mut parent_ids = Vec::with_capacity(parents.len());
        for parent in parents {
            let parent_id =
                self.index
                    .get(*parent)
                    .copied()
                    .ok_or_else(|| NetworkError::ForwardReference {
                        node: name.to_string(),
                        parent: parent.to_string(),
                    })?;
            parent_ids.push(parent_id);
        }

        let cpt = Cpt::new(probabilities);
        cpt.validate(name, parent_ids.len())?;

        let id = NodeId(self.nodes.len());
        debug!("adding node {} {} parents={:?} cpt={:?}", id, name, parents, cpt.entries());
        self.nodes
            .push(VariableNode::new(name.to_string(), parent_ids, cpt));
        self.index.insert(name.to_string(), id);
        Ok(id)
    }

    /// Adds a single-parent node whose CPT is learned from `(parent, node)`
    /// observations.
    pub fn add_learned_node(
        &mut self,
        name: &str,
        parent: &str,
        examples: &[Example],
    ) -> Result<NodeId, NetworkError> {
        let probabilities = derive_conditional_from_examples(examples)?;
        debug!(
            "learned cpt for {} from {} examples: {:?}",
            name,
            examples.len(),
            probabilities
        );
        self.add_node(name, &[parent], probabilities.to_vec())
    }

    pub fn build(self) -> Network {
        let mut children = vec![Vec::new(); self.nodes.len()];
        for (index, node) in self.nodes.iter().enumerate() {
            for parent in node.parents() {
                children[parent.index()].push(NodeId(index));
            }
        }
        info!(
            "built network with {} nodes ({:?} indexing)",
            self.nodes.len(),
            self.indexing
        );
        Network {
            nodes: self.nodes,
            index: self.index,
            children,
            indexing: self.indexing,
        }
    }
}
