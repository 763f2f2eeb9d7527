//! Runtime configuration utilities for relsnip.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Root folder for annotated corpus input.
    pub data_dir: PathBuf,
    /// Root folder for generated snippet files.
    pub outputs_dir: PathBuf,
    /// Tokens of outer context on each side of a mention pair.
    pub context_size: usize,
    /// Probability of keeping a negative pair during training.
    pub negative_keep: f64,
    /// Seed for the negative down-sampling RNG.
    pub downsample_seed: u64,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./outputs"));
        let context_size = env::var("CONTEXT_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);
        let negative_keep = env::var("NEGATIVE_KEEP")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.5);
        let downsample_seed = env::var("DOWNSAMPLE_SEED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        std::fs::create_dir_all(&data_dir).context("creating data dir")?;
        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            data_dir,
            outputs_dir,
            context_size,
            negative_keep,
            downsample_seed,
        })
    }

    /// Convenience helper for derived input path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }
}
