//! TOML parameter files.
//!
//! A parameter file has a `[general]` table (run length, seed, snapshot
//! interval) and a `[model]` table that deserializes straight into
//! [`FlockParams`].  The batch file is a flat table.

use std::path::Path;

use anyhow::{Context, Result, bail};
use flock_core::{FlockParams, SimConfig};
use serde::{Deserialize, Serialize};

/// `[general]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct General {
    #[serde(default)]
    pub description: String,

    pub step_max: u64,

    #[serde(default)]
    pub seed: u64,

    /// Snapshot every N ticks; 0 disables position output.
    #[serde(default = "default_output_interval")]
    pub output_interval: u64,
}

fn default_output_interval() -> u64 {
    1
}

/// A full parameter file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamFile {
    pub general: General,
    pub model:   FlockParams,
}

impl ParamFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read parameter file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid parameter file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let file: ParamFile = toml::from_str(text)?;
        file.model.validate()?;
        Ok(file)
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            description:           self.general.description.clone(),
            step_max:              self.general.step_max,
            seed:                  self.general.seed,
            output_interval_ticks: self.general.output_interval,
        }
    }

    /// Emit the parameters at debug level, one TOML line per event.
    pub fn log(&self) {
        match toml::to_string(self) {
            Ok(text) => {
                tracing::debug!("==== Parameters ====");
                for line in text.lines() {
                    tracing::debug!("{line}");
                }
            }
            Err(e) => tracing::warn!("could not render parameters: {e}"),
        }
    }
}

/// A batch file: how many runs, how wide, and how to seed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchFile {
    pub task_num: usize,

    /// Rayon pool size; 0 uses every logical core.
    #[serde(default)]
    pub n_jobs: usize,

    #[serde(default)]
    pub seed_base: u64,

    /// Per-task vision radius.  When present its length must equal
    /// `task_num`.
    #[serde(default)]
    pub vision: Option<Vec<f64>>,
}

impl BatchFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read batch file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid batch file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let file: BatchFile = toml::from_str(text)?;
        if let Some(v) = &file.vision {
            if v.len() != file.task_num {
                bail!("vision has {} entries but task_num is {}", v.len(), file.task_num);
            }
        }
        Ok(file)
    }

    /// Model parameters of task `k`.
    pub fn task_params(&self, base: &FlockParams, k: usize) -> FlockParams {
        match self.vision.as_ref().and_then(|v| v.get(k)) {
            Some(&vision) => FlockParams { vision, ..base.clone() },
            None => base.clone(),
        }
    }
}
