use std::{fs, path::Path};

use anyhow::{Context, ensure};
use clap::ValueEnum;
use libgame::{board::MAX_SIZE, rule::PendingPolicy, variant::Variant};
use serde::{Deserialize, Serialize};

use crate::cli::Args;

pub const DEFAULT_DELAY_MS: u64 = 125;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub variant: VariantChoice,
    pub size: Option<usize>, // Falls back to the variant's default size.
    pub delay_ms: u64,
    pub seed: Option<u64>, // Random board seed; drawn from the OS when absent.
    pub clear_stale_pending: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: VariantChoice::default(),
            size: None,
            delay_ms: DEFAULT_DELAY_MS,
            seed: None,
            clear_stale_pending: false,
        }
    }
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let config_serialized =
            fs::read(path).with_context(|| format!("Couldn't read config {}", path.display()))?;

        serde_json::from_slice(&config_serialized)
            .with_context(|| format!("Couldn't deserialize config {}", path.display()))
    }

    /// Command line flags take precedence over the file.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(variant) = args.variant {
            self.variant = variant;
        }

        if let Some(size) = args.size {
            self.size = Some(size);
        }

        if let Some(delay_ms) = args.delay_ms {
            self.delay_ms = delay_ms;
        }

        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }

        self.clear_stale_pending |= args.clear_stale_pending;
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant.into()
    }

    pub fn board_size(&self) -> anyhow::Result<usize> {
        let size = self.size.unwrap_or_else(|| self.variant().default_size());
        ensure!(
            (3..=MAX_SIZE).contains(&size),
            "board size must be between 3 and {MAX_SIZE}, got {size}"
        );
        Ok(size)
    }

    pub fn pending_policy(&self) -> PendingPolicy {
        if self.clear_stale_pending {
            PendingPolicy::Clear
        } else {
            PendingPolicy::Preserve
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum VariantChoice {
    /// 16x16, four neighbors, border never changes
    #[default]
    FixedBorder,

    /// 32x32, eight neighbors, Conway's rule
    FullGrid,
}

impl From<VariantChoice> for Variant {
    fn from(value: VariantChoice) -> Self {
        match value {
            VariantChoice::FixedBorder => Variant::FixedBorder,
            VariantChoice::FullGrid => Variant::FullGrid,
        }
    }
}
