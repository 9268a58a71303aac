use log::{debug, info};
use rand::{Rng, RngCore};

use super::{prior::sample_joint, report::Estimate, Algorithm};
use crate::bnet::common::error::NetworkError;
use crate::bnet::common::interface::ConditionalEstimator;
use crate::bnet::model::{Evidence, Network, NodeId};

/// Estimates P(query = true | evidence) by rejection sampling.
///
/// Draws `num_samples` joint samples and keeps only those that agree with
/// every observation. When none survive the ratio is 0/0 and the call fails
/// with [`NetworkError::InsufficientSamples`] instead of returning NaN; rare
/// evidence needs a larger sample budget.
pub fn rejection_sample<R: Rng + ?Sized>(
    network: &mut Network,
    query: NodeId,
    evidence: &Evidence,
    num_samples: usize,
    rng: &mut R,
) -> Result<Estimate, NetworkError> {
    let query_name = network.name_of(query)?.to_string();
    let evidence_labels = evidence.describe(network)?;
    info!(
        "rejection sampling P({} | {}) with {} samples",
        query_name,
        evidence_labels.join(", "),
        num_samples
    );

    // {true, false} counts for the query among accepted samples
    let mut counts = [0usize; 2];
    for _ in 0..num_samples {
        sample_joint(network, rng)?;
        if !evidence.is_satisfied_by(network)? {
            continue;
        }
        if network.value(query)? == Some(true) {
            counts[0] += 1;
        } else {
            counts[1] += 1;
        }
    }

    let accepted = counts[0] + counts[1];
    debug!(
        "rejection sampling {}: accepted {} of {} (true={}, false={})",
        query_name, accepted, num_samples, counts[0], counts[1]
    );
    if accepted == 0 {
        return Err(NetworkError::InsufficientSamples { drawn: num_samples });
    }

    Ok(Estimate {
        algorithm: Algorithm::Rejection,
        query: query_name,
        evidence: evidence_labels,
        probability: counts[0] as f64 / accepted as f64,
        samples_drawn: num_samples,
        samples_accepted: accepted,
    })
}

/// P(query = true | evidence) as a bare probability.
pub fn estimate_conditional<R: Rng + ?Sized>(
    network: &mut Network,
    query: NodeId,
    evidence: &Evidence,
    num_samples: usize,
    rng: &mut R,
) -> Result<f64, NetworkError> {
    rejection_sample(network, query, evidence, num_samples, rng).map(|estimate| estimate.probability)
}

pub struct RejectionSampler;

impl ConditionalEstimator for RejectionSampler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Rejection
    }

    fn estimate(
        &self,
        network: &mut Network,
        query: NodeId,
        evidence: &Evidence,
        num_samples: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Estimate, NetworkError> {
        rejection_sample(network, query, evidence, num_samples, rng)
    }
}
