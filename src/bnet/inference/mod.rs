pub mod gibbs;
pub mod prior;
pub mod rejection;
pub mod report;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use gibbs::{estimate_conditional_mcmc, gibbs_sample, GibbsConfig, GibbsSampler};
pub use prior::{estimate_prior, prior_sample, sample_joint};
pub use rejection::{estimate_conditional, rejection_sample, RejectionSampler};
pub use report::{Estimate, EstimateReport};

/// The sampling algorithms an [`Estimate`] can come from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Prior,
    Rejection,
    Gibbs,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Prior => "prior sampling",
            Algorithm::Rejection => "rejection sampling",
            Algorithm::Gibbs => "gibbs sampling",
        };
        write!(f, "{}", name)
    }
}
