use super::network::Network;
use super::node::NodeId;
use crate::bnet::common::error::NetworkError;

/// Observed values a sample has to agree with, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Evidence {
    observations: Vec<(NodeId, bool)>,
}

impl Evidence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `(name, value)` pairs against `network`.
    pub fn from_names(network: &Network, pairs: &[(&str, bool)]) -> Result<Self, NetworkError> {
        let mut evidence = Evidence::new();
        for &(name, value) in pairs {
            evidence.observe(network.id_of(name)?, value);
        }
        Ok(evidence)
    }

    pub fn with(mut self, node: NodeId, value: bool) -> Self {
        self.observe(node, value);
        self
    }

    /// Records an observation. Observing the same node twice keeps the
    /// latest value.
    pub fn observe(&mut self, node: NodeId, value: bool) {
        match self.observations.iter_mut().find(|(id, _)| *id == node) {
            Some(entry) => entry.1 = value,
            None => self.observations.push((node, value)),
        }
    }

    pub fn value_of(&self, node: NodeId) -> Option<bool> {
        self.observations
            .iter()
            .find(|(id, _)| *id == node)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(NodeId, bool)> {
        self.observations.iter()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// True when every observed node currently holds the observed value.
    pub fn is_satisfied_by(&self, network: &Network) -> Result<bool, NetworkError> {
        for &(node, expected) in &self.observations {
            if network.value(node)? != Some(expected) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Human readable `Name=value` labels, used in reports.
    pub fn describe(&self, network: &Network) -> Result<Vec<String>, NetworkError> {
        let mut labels = Vec::with_capacity(self.observations.len());
        for &(node, value) in &self.observations {
            labels.push(format!("{}={}", network.name_of(node)?, value));
        }
        Ok(labels)
    }
}
