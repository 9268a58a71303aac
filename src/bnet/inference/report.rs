use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::Algorithm;

/// One probability estimate together with how it was obtained.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub algorithm: Algorithm,
    /// Name of the query variable
    pub query: String,
    /// Observations as `Name=value` labels
    pub evidence: Vec<String>,
    pub probability: f64,
    /// Joint samples (or Gibbs sweeps, burn-in included) drawn
    pub samples_drawn: usize,
    /// Samples that contributed to the probability
    pub samples_accepted: usize,
}

impl Estimate {
    /// Renders the estimate as `P(query | evidence) = p`.
    pub fn render(&self) -> String {
        if self.evidence.is_empty() {
            format!("P({}) = {:.4}", self.query, self.probability)
        } else {
            format!(
                "P({} | {}) = {:.4}",
                self.query,
                self.evidence.join(", "),
                self.probability
            )
        }
    }

    pub fn acceptance_rate(&self) -> f64 {
        if self.samples_drawn == 0 {
            return 0.0;
        }
        self.samples_accepted as f64 / self.samples_drawn as f64
    }
}

/// The estimates produced by one run of a scenario.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EstimateReport {
    pub scenario: String,
    pub seed: Option<u64>,
    pub generated_at: DateTime<Utc>,
    pub estimates: Vec<Estimate>,
}

impl EstimateReport {
    pub fn new(scenario: &str, seed: Option<u64>) -> Self {
        EstimateReport {
            scenario: scenario.to_string(),
            seed,
            generated_at: Utc::now(),
            estimates: Vec::new(),
        }
    }

    pub fn push(&mut self, estimate: Estimate) {
        self.estimates.push(estimate);
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing report to {}", path.display()))?;
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading report from {}", path.display()))?;
        let report = serde_json::from_str(&json)?;
        Ok(report)
    }
}
