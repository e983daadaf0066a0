//! In-memory snapshot builders.
//!
//! Used by tests across the workspace and by the CLI `demo` command to
//! produce realistic proposal state without a running application.

use crate::project::{Aim, ResearcherInfo};
use crate::resources::ReferenceSource;
use crate::section::{SectionDraft, SectionName};
use crate::snapshot::ProposalSnapshot;

/// Builder for [`ProposalSnapshot`] values.
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    snapshot: ProposalSnapshot,
}

impl SnapshotBuilder {
    /// Start from the fresh, never-edited proposal state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a section's draft text.
    pub fn draft(mut self, name: SectionName, text: &str) -> Self {
        self.snapshot.proposal_sections.section_mut(name).draft = Some(text.to_string());
        self
    }

    /// Draft every section with placeholder text.
    pub fn draft_all(mut self) -> Self {
        for name in SectionName::ALL {
            *self.snapshot.proposal_sections.section_mut(name) =
                SectionDraft::drafted(format!("{} draft content.", name.label()));
        }
        self
    }

    /// Mark a section approved.
    pub fn approve(mut self, name: SectionName) -> Self {
        self.snapshot.proposal_sections.section_mut(name).approved = true;
        self
    }

    pub fn approve_all(mut self) -> Self {
        for name in SectionName::ALL {
            self.snapshot.proposal_sections.section_mut(name).approved = true;
        }
        self
    }

    pub fn word_count(mut self, name: SectionName, count: f64) -> Self {
        self.snapshot.proposal_sections.section_mut(name).word_count = Some(count);
        self
    }

    pub fn page_count(mut self, name: SectionName, pages: f64) -> Self {
        self.snapshot.proposal_sections.section_mut(name).page_count = Some(pages);
        self
    }

    pub fn bibliography(mut self, entries: &[&str]) -> Self {
        self.snapshot.proposal_sections.bibliography.entries =
            entries.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn required_sections(mut self, names: &[&str]) -> Self {
        self.snapshot.requirements.required_sections =
            names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn page_limits(mut self, background: Option<f64>, methods: Option<f64>) -> Self {
        self.snapshot.requirements.page_limits.background = background;
        self.snapshot.requirements.page_limits.methods = methods;
        self
    }

    pub fn budget_limits(mut self, annual: Option<f64>, total: Option<f64>) -> Self {
        self.snapshot.requirements.budget.annual_maximum = annual;
        self.snapshot.requirements.budget.total_maximum = total;
        self
    }

    /// Set per-year totals (year1..year4) and the overall total.
    pub fn budget_totals(mut self, years: [Option<f64>; 4], total: Option<f64>) -> Self {
        let totals = &mut self.snapshot.resources.budget_totals;
        totals.year1 = years[0];
        totals.year2 = years[1];
        totals.year3 = years[2];
        totals.year4 = years[3];
        totals.total = total;
        self
    }

    /// Fill font, margins and file format.
    pub fn formatting(mut self, font: &str, margins: &str, file_format: &str) -> Self {
        let formatting = &mut self.snapshot.requirements.formatting;
        formatting.font = Some(font.to_string());
        formatting.margins = Some(margins.to_string());
        formatting.file_format = Some(file_format.to_string());
        self
    }

    /// Replace the aims with complete ones (title + hypothesis).
    pub fn complete_aims(mut self, count: u32) -> Self {
        self.snapshot.project_info.aims = (1..=count)
            .map(|number| Aim {
                number,
                title: Some(format!("Aim {number}")),
                hypothesis: Some(format!("Hypothesis {number}")),
                approach: None,
            })
            .collect();
        self
    }

    pub fn aim(mut self, aim: Aim) -> Self {
        self.snapshot.project_info.aims.push(aim);
        self
    }

    pub fn source(mut self, id: &str, label: &str, filename: &str) -> Self {
        self.snapshot
            .reference_sources
            .push(ReferenceSource::new(id, label, filename));
        self
    }

    pub fn researcher(mut self, name: &str, department: &str) -> Self {
        self.snapshot.researcher_info = ResearcherInfo {
            name: Some(name.to_string()),
            department: Some(department.to_string()),
            ..self.snapshot.researcher_info
        };
        self
    }

    pub fn build(self) -> ProposalSnapshot {
        self.snapshot
    }

    /// A proposal that passes every automated check.
    pub fn submission_ready() -> ProposalSnapshot {
        Self::new()
            .researcher("Dana Levi", "Neurobiology")
            .draft_all()
            .approve_all()
            .bibliography(&["Levi D. et al. (2023) Neuron 111:1-12"])
            .required_sections(&["Abstract", "Methods", "Budget"])
            .page_limits(Some(5.0), Some(10.0))
            .page_count(SectionName::Background, 4.0)
            .page_count(SectionName::Methods, 9.5)
            .budget_limits(Some(300_000.0), Some(1_200_000.0))
            .budget_totals(
                [
                    Some(280_000.0),
                    Some(290_000.0),
                    Some(275_000.0),
                    Some(250_000.0),
                ],
                Some(1_095_000.0),
            )
            .formatting("Arial 11", "2cm", "PDF")
            .complete_aims(3)
            .source("src-1", "Pilot study", "pilot.pdf")
            .build()
    }
}
