use log::{debug, info, trace};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::{prior::sample_joint, report::Estimate, Algorithm};
use crate::bnet::common::error::NetworkError;
use crate::bnet::common::interface::ConditionalEstimator;
use crate::bnet::model::{Evidence, Network, NodeId};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GibbsConfig {
    /// Sweeps discarded before counting starts.
    pub burn_in: usize,
    /// Forward samples tried when looking for a start state that agrees
    /// with the evidence.
    pub max_start_attempts: usize,
}

impl Default for GibbsConfig {
    fn default() -> Self {
        GibbsConfig {
            burn_in: 100,
            max_start_attempts: 10_000,
        }
    }
}

/// Estimates P(query = true | evidence) with a Gibbs chain.
///
/// The chain starts from a forward sample that already agrees with the
/// evidence, so every node's current value has positive weight. Each
/// sweep resamples every unobserved node from its Markov-blanket conditional
/// in node order; after `burn_in` sweeps the query value is counted once per
/// sweep, `num_samples` times.
pub fn gibbs_sample<R: Rng + ?Sized>(
    network: &mut Network,
    query: NodeId,
    evidence: &Evidence,
    num_samples: usize,
    config: &GibbsConfig,
    rng: &mut R,
) -> Result<Estimate, NetworkError> {
    let query_name = network.name_of(query)?.to_string();
    let evidence_labels = evidence.describe(network)?;
    if num_samples == 0 {
        return Err(NetworkError::InsufficientSamples { drawn: 0 });
    }
    info!(
        "gibbs sampling P({} | {}) with {} sweeps after {} burn-in",
        query_name,
        evidence_labels.join(", "),
        num_samples,
        config.burn_in
    );

    draw_start_state(network, evidence, config.max_start_attempts, rng)?;
    let free: Vec<NodeId> = network
        .ids()
        .filter(|id| evidence.value_of(*id).is_none())
        .collect();

    for _ in 0..config.burn_in {
        sweep(network, &free, rng)?;
    }

    let mut hits = 0usize;
    for _ in 0..num_samples {
        sweep(network, &free, rng)?;
        if network.value(query)? == Some(true) {
            hits += 1;
        }
    }
    debug!(
        "gibbs sampling {}: {} of {} sweeps true ({} free nodes)",
        query_name,
        hits,
        num_samples,
        free.len()
    );

    Ok(Estimate {
        algorithm: Algorithm::Gibbs,
        query: query_name,
        evidence: evidence_labels,
        probability: hits as f64 / num_samples as f64,
        samples_drawn: config.burn_in + num_samples,
        samples_accepted: num_samples,
    })
}

/// MCMC counterpart of `estimate_conditional`, using the default burn-in.
pub fn estimate_conditional_mcmc<R: Rng + ?Sized>(
    network: &mut Network,
    query: NodeId,
    evidence: &Evidence,
    num_samples: usize,
    rng: &mut R,
) -> Result<f64, NetworkError> {
    gibbs_sample(network, query, evidence, num_samples, &GibbsConfig::default(), rng)
        .map(|estimate| estimate.probability)
}

/// Redraws forward samples until one satisfies `evidence`.
fn draw_start_state<R: Rng + ?Sized>(
    network: &mut Network,
    evidence: &Evidence,
    max_attempts: usize,
    rng: &mut R,
) -> Result<(), NetworkError> {
    for attempt in 1..=max_attempts {
        sample_joint(network, rng)?;
        if evidence.is_satisfied_by(network)? {
            trace!("gibbs start state found after {} draws", attempt);
            return Ok(());
        }
    }
    Err(NetworkError::InsufficientSamples { drawn: max_attempts })
}

fn sweep<R: Rng + ?Sized>(network: &mut Network, free: &[NodeId], rng: &mut R) -> Result<(), NetworkError> {
    for &node in free {
        let probability = blanket_probability_of_true(network, node)?;
        let value = rng.r#gen::<f64>() < probability;
        trace!("gibbs {} p={} -> {}", node, probability, value);
        network.assign(node, value)?;
    }
    Ok(())
}

/// P(node = true | Markov blanket), all other nodes held at their current
/// values. Leaves `node` assigned to false on return.
///
/// Zero weight for both values means the surrounding assignment itself has
/// zero probability.
pub fn blanket_probability_of_true(network: &mut Network, node: NodeId) -> Result<f64, NetworkError> {
    let weight_true = blanket_weight(network, node, true)?;
    let weight_false = blanket_weight(network, node, false)?;
    let total = weight_true + weight_false;
    if total <= 0.0 {
        return Err(NetworkError::ImpossibleState {
            node: network.name_of(node)?.to_string(),
        });
    }
    Ok(weight_true / total)
}

/// P(node = value | parents) * Π P(child | its parents) with `node = value`.
fn blanket_weight(network: &mut Network, node: NodeId, value: bool) -> Result<f64, NetworkError> {
    network.assign(node, value)?;
    let mut weight = network.probability_of(node, value)?;
    for &child in network.children(node)? {
        let child_value = network.value(child)?.ok_or_else(|| NetworkError::Unsampled {
            node: network.name_of(child).unwrap_or("?").to_string(),
        })?;
        weight *= network.probability_of(child, child_value)?;
    }
    Ok(weight)
}

pub struct GibbsSampler {
    pub config: GibbsConfig,
}

impl GibbsSampler {
    pub fn new(config: GibbsConfig) -> Self {
        GibbsSampler { config }
    }
}

impl ConditionalEstimator for GibbsSampler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Gibbs
    }

    fn estimate(
        &self,
        network: &mut Network,
        query: NodeId,
        evidence: &Evidence,
        num_samples: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Estimate, NetworkError> {
        gibbs_sample(network, query, evidence, num_samples, &self.config, rng)
    }
}
