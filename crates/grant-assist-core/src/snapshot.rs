//! The full proposal state snapshot.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::project::{ProjectInfo, ResearcherInfo};
use crate::requirements::Requirements;
use crate::resources::{ReferenceSource, Resources};
use crate::section::ProposalSections;
use crate::validation::ValidationResult;

/// Everything the compliance engine reads, as exported by the app store.
///
/// Keys the engine does not use (chat messages, UI state, learnings) are
/// ignored on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProposalSnapshot {
    pub requirements: Requirements,
    pub researcher_info: ResearcherInfo,
    pub project_info: ProjectInfo,
    pub resources: Resources,
    pub reference_sources: Vec<ReferenceSource>,
    pub proposal_sections: ProposalSections,
    /// Result of the most recent validation run stored by the app.
    pub validation: ValidationResult,
}

impl ProposalSnapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Write the snapshot as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_pretty()?).map_err(|source| CoreError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
