//! Proposal state snapshot model for the grant-writing assistant.
//!
//! The surrounding application owns proposal state and mutates it as the
//! researcher moves through the workflow. This crate describes that state as
//! plain, immutable-per-call data so the compliance engine can evaluate it
//! without touching storage, auth, or UI.
//!
//! ## Core Concepts
//!
//! - **Section**: one of the seven fixed components of a proposal
//! - **Drafted**: a section whose draft text is present and non-blank
//! - **Requirements**: externally supplied constraints, any of which may be absent
//! - **Snapshot**: everything above bundled together, as exported by the app store
//!
//! Field names serialize in camelCase so a state file exported from the web
//! application's store loads unchanged.
//!
//! ```rust
//! use grant_assist_core::{ProposalSnapshot, SectionName};
//!
//! let snapshot = ProposalSnapshot::from_json(r#"{
//!     "proposalSections": { "abstract": { "draft": "We study decisions.", "approved": true } }
//! }"#).unwrap();
//!
//! assert_eq!(snapshot.proposal_sections.drafted(), vec![SectionName::Abstract]);
//! ```

mod error;
pub mod fixtures;
mod project;
mod requirements;
mod resources;
mod section;
mod snapshot;
mod text;
mod validation;

pub use error::{CoreError, CoreResult};
pub use project::{Aim, ProjectInfo, ResearcherInfo};
pub use requirements::{BudgetLimits, Eligibility, Formatting, PageLimits, Requirements};
pub use resources::{BudgetTotals, ReferenceSource, Resources};
pub use section::{Bibliography, ProposalSections, SectionDraft, SectionName};
pub use snapshot::ProposalSnapshot;
pub use text::{format_amount, has_content, is_set, word_count};
pub use validation::{ComplianceIssue, IssueCategory, Severity, ValidationResult};
