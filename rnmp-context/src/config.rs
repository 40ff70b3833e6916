use std::fs::read_to_string;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rnmp_core::models::{Analysis, DinucOrientation, TrinucOrientation};

use crate::consts::DEFAULT_DINUC_DISTANCE;
use crate::errors::{ContextError, Result};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

///
/// What to count and where to put it.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// dinuc = true
/// dinuc_distances = [1, 2, 3]
/// output_basename = "results/wt"
/// ```
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct ContextConfig {
    /// Read column 3 of the position files as the incorporation weight.
    pub use_frequency: bool,
    pub mono: bool,
    pub dinuc: bool,
    pub dinuc_distances: Vec<usize>,
    pub trinuc: bool,
    pub output_basename: String,
}

impl Default for ContextConfig {
    fn default() -> Self {
        ContextConfig {
            use_frequency: false,
            mono: false,
            dinuc: false,
            dinuc_distances: vec![DEFAULT_DINUC_DISTANCE],
            trinuc: false,
            output_basename: String::new(),
        }
    }
}

impl TryFrom<&Path> for ContextConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> std::result::Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

impl ContextConfig {
    ///
    /// Normalise the configuration before a run: fall back to mononucleotide
    /// counting when nothing was requested, drop repeated distances and reject
    /// a distance of zero.
    ///
    pub fn validate(mut self) -> Result<Self> {
        if !(self.mono || self.dinuc || self.trinuc) {
            info!("No analysis requested, counting mononucleotides by default");
            self.mono = true;
        }

        if self.dinuc_distances.is_empty() {
            self.dinuc_distances.push(DEFAULT_DINUC_DISTANCE);
        }

        let mut distances: Vec<usize> = Vec::with_capacity(self.dinuc_distances.len());
        for d in self.dinuc_distances {
            if d == 0 {
                return Err(ContextError::InvalidDistance(d));
            }
            if !distances.contains(&d) {
                distances.push(d);
            }
        }
        self.dinuc_distances = distances;

        Ok(self)
    }

    ///
    /// Expand the enabled modes into the matrices a run fills, in output order:
    /// mono, then both dinucleotide orientations per distance, then the three
    /// trinucleotide orientations.
    ///
    pub fn analyses(&self) -> Vec<Analysis> {
        let mut analyses = Vec::new();

        if self.mono {
            analyses.push(Analysis::Mono);
        }

        if self.dinuc {
            for distance in &self.dinuc_distances {
                for orientation in DinucOrientation::ALL {
                    analyses.push(Analysis::Dinuc {
                        distance: *distance,
                        orientation,
                    });
                }
            }
        }

        if self.trinuc {
            for orientation in TrinucOrientation::ALL {
                analyses.push(Analysis::Trinuc(orientation));
            }
        }

        analyses
    }
}
