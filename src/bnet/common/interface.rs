use rand::RngCore;

use super::error::NetworkError;
use crate::bnet::inference::{Algorithm, Estimate};
use crate::bnet::model::{CptIndexing, Evidence, Example, Network, NodeId};

/// A sampling algorithm that answers P(query = true | evidence).
///
/// The random source is passed in so callers can seed it; the network is
/// borrowed mutably because sampling overwrites node values.
pub trait ConditionalEstimator {
    fn algorithm(&self) -> Algorithm;

    fn estimate(
        &self,
        network: &mut Network,
        query: NodeId,
        evidence: &Evidence,
        num_samples: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Estimate, NetworkError>;
}

/// A named query against a scenario network, expressed with node names.
#[derive(Clone, Debug, PartialEq)]
pub struct QuerySpec {
    pub label: String,
    pub query: String,
    pub evidence: Vec<(String, bool)>,
    pub num_samples: usize,
}

impl QuerySpec {
    pub fn new(label: &str, query: &str, evidence: &[(&str, bool)], num_samples: usize) -> Self {
        QuerySpec {
            label: label.to_string(),
            query: query.to_string(),
            evidence: evidence
                .iter()
                .map(|(name, value)| (name.to_string(), *value))
                .collect(),
            num_samples,
        }
    }

    pub fn resolve(&self, network: &Network) -> Result<(NodeId, Evidence), NetworkError> {
        let query = network.id_of(&self.query)?;
        let mut evidence = Evidence::new();
        for (name, value) in &self.evidence {
            evidence.observe(network.id_of(name)?, *value);
        }
        Ok((query, evidence))
    }
}

/// Builds a fixed network and the demo queries that go with it.
pub trait ScenarioMaker {
    fn name(&self) -> &str;

    fn build_network(&self, indexing: CptIndexing) -> Result<Network, NetworkError>;

    fn queries(&self) -> Vec<QuerySpec>;

    /// Observations any learned CPT in the network was derived from.
    fn training_examples(&self) -> &[Example] {
        &[]
    }
}
