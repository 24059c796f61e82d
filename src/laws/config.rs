//! Configuration for sampled law checks

use crate::{utils, AlgebraError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How law checks pick and process their samples
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LawConfig {
    /// Number of representations drawn by [`LawChecker::random`](super::LawChecker::random)
    pub sample_size: usize,
    /// Samples larger than this run the pair and triple checks in parallel
    pub parallel_threshold: usize,
    /// Seed for reproducible random samples
    pub seed: Option<u64>,
    /// Also check that multiplication commutes for structures that do not
    /// require it
    pub check_commutativity: bool,
}

impl Default for LawConfig {
    fn default() -> Self {
        LawConfig {
            sample_size: 32,
            parallel_threshold: 8,
            seed: None,
            check_commutativity: false,
        }
    }
}

impl LawConfig {
    /// Parse a configuration from JSON, missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LawConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: LawConfig = utils::load_json(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        utils::save_json(self, path)
    }

    /// Reject configurations that cannot drive a check
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            return Err(AlgebraError::InvalidConfig(
                "sample_size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Builder method: set the seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set the sample size
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }
}
