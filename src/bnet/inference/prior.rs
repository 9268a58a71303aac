use log::{debug, trace};
use rand::Rng;

use super::{report::Estimate, Algorithm};
use crate::bnet::common::error::NetworkError;
use crate::bnet::model::{Network, NodeId};

/// Draws one full assignment by ancestral sampling.
///
/// Nodes are visited in construction order, so every lookup sees parent
/// values from this pass. A node becomes true when `r < p` with `r` uniform
/// in [0, 1), which keeps p = 0 and p = 1 deterministic.
pub fn sample_joint<R: Rng + ?Sized>(network: &mut Network, rng: &mut R) -> Result<(), NetworkError> {
    for index in 0..network.len() {
        let id = NodeId(index);
        let probability = network.conditional_probability_of_true(id)?;
        let draw = rng.r#gen::<f64>();
        let value = draw < probability;
        trace!("sample {} p={} r={} -> {}", id, probability, draw, value);
        network.assign(id, value)?;
    }
    Ok(())
}

/// Unconditional frequency of `query = true` over `num_samples` joint samples.
pub fn prior_sample<R: Rng + ?Sized>(
    network: &mut Network,
    query: NodeId,
    num_samples: usize,
    rng: &mut R,
) -> Result<Estimate, NetworkError> {
    let query_name = network.name_of(query)?.to_string();
    if num_samples == 0 {
        return Err(NetworkError::InsufficientSamples { drawn: 0 });
    }

    let mut hits = 0usize;
    for _ in 0..num_samples {
        sample_joint(network, rng)?;
        if network.value(query)? == Some(true) {
            hits += 1;
        }
    }
    debug!("prior sampling {}: {} of {} true", query_name, hits, num_samples);

    Ok(Estimate {
        algorithm: Algorithm::Prior,
        query: query_name,
        evidence: Vec::new(),
        probability: hits as f64 / num_samples as f64,
        samples_drawn: num_samples,
        samples_accepted: num_samples,
    })
}

pub fn estimate_prior<R: Rng + ?Sized>(
    network: &mut Network,
    query: NodeId,
    num_samples: usize,
    rng: &mut R,
) -> Result<f64, NetworkError> {
    prior_sample(network, query, num_samples, rng).map(|estimate| estimate.probability)
}
