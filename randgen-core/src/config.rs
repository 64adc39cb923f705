// SPDX-License-Identifier: MIT
//
// Randgen: Randomized Primitive Generation Engine
// Copyright (c) 2025 Valer Bocan, PhD, CSSLP
// Email: valer.bocan@upt.ro
//
// Department of Computer and Information Technology
// Politehnica University of Timisoara

//! Configuration management for randgen

use crate::{Error, Result, MAX_FLOAT_PRECISION};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Generator configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible streams; clock-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Reseed from process id and clock before every alphabet-sampling call
    #[serde(default)]
    pub reseed_before_sampling: bool,

    /// Fractional digits for float output
    #[serde(default = "default_float_precision")]
    pub float_precision: u32,

    /// Upper bound on requested lengths and counts
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reseed_before_sampling: false,
            float_precision: default_float_precision(),
            max_length: default_max_length(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from `RANDGEN_*` environment variables
    pub fn from_env() -> Result<Self> {
        let config: Self = envy::prefixed("RANDGEN_")
            .from_env()
            .map_err(|e| Error::Config(format!("Failed to parse environment variables: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.float_precision > MAX_FLOAT_PRECISION {
            return Err(Error::Config(format!(
                "float_precision must be at most {}",
                MAX_FLOAT_PRECISION
            )));
        }

        if self.max_length == 0 {
            return Err(Error::Config("max_length must be > 0".to_string()));
        }

        if self.seed.is_some() && self.reseed_before_sampling {
            return Err(Error::Config(
                "seed and reseed_before_sampling are mutually exclusive".to_string(),
            ));
        }

        Ok(())
    }

    /// Reject a fractional precision above [`MAX_FLOAT_PRECISION`]
    pub fn check_precision(&self, requested: u32) -> Result<u32> {
        if requested > MAX_FLOAT_PRECISION {
            return Err(Error::Config(format!(
                "Requested precision {} exceeds {}",
                requested, MAX_FLOAT_PRECISION
            )));
        }
        Ok(requested)
    }

    /// Reject a requested length or count above `max_length`
    pub fn check_length(&self, requested: usize) -> Result<usize> {
        if requested > self.max_length {
            return Err(Error::Config(format!(
                "Requested {} exceeds max_length {}",
                requested, self.max_length
            )));
        }
        Ok(requested)
    }
}

// Default value functions
fn default_float_precision() -> u32 {
    2
}

fn default_max_length() -> usize {
    1024 * 1024
}
