//! Command implementations.

pub mod config;
pub mod demo;
pub mod fix;
pub mod readiness;
pub mod report;
pub mod rules;
pub mod serve;
pub mod validate;

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use grant_assist_core::ProposalSnapshot;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    #[serde(rename = "md")]
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => anyhow::bail!("Unknown format: {}. Use 'text', 'json' or 'md'", s),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
            Self::Markdown => f.write_str("md"),
        }
    }
}

/// Load a proposal snapshot exported from the app store.
pub fn load_snapshot(path: &Path) -> Result<ProposalSnapshot> {
    debug!(path = %path.display(), "loading_snapshot");
    ProposalSnapshot::load(path)
        .with_context(|| format!("Failed to load proposal state from {}", path.display()))
}

/// Write rendered output to a file, or print it when no path is given.
pub fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    let Some(output_path) = output else {
        println!("{content}");
        return Ok(());
    };

    // Ensure parent directory exists
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    std::fs::write(output_path, content)
        .with_context(|| format!("Failed to write output to: {}", output_path.display()))?;

    println!("Output written to: {}", output_path.display());
    Ok(())
}
