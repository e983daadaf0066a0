//! Proposal sections: the seven fixed document components plus bibliography.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::text::has_content;

/// One of the seven fixed proposal sections.
///
/// The set is closed; variant order is the canonical section order used
/// wherever sections are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionName {
    Abstract,
    Background,
    Aims,
    Methods,
    Innovation,
    Budget,
    Risks,
}

impl SectionName {
    /// All sections in canonical order.
    pub const ALL: [SectionName; 7] = [
        SectionName::Abstract,
        SectionName::Background,
        SectionName::Aims,
        SectionName::Methods,
        SectionName::Innovation,
        SectionName::Budget,
        SectionName::Risks,
    ];

    /// Number of sections a complete proposal has.
    pub const COUNT: usize = Self::ALL.len();

    /// Lowercase key as stored in proposal state.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Abstract => "abstract",
            SectionName::Background => "background",
            SectionName::Aims => "aims",
            SectionName::Methods => "methods",
            SectionName::Innovation => "innovation",
            SectionName::Budget => "budget",
            SectionName::Risks => "risks",
        }
    }

    /// Human-readable section title.
    pub fn label(&self) -> &'static str {
        match self {
            SectionName::Abstract => "Abstract",
            SectionName::Background => "Scientific Background",
            SectionName::Aims => "Specific Aims",
            SectionName::Methods => "Research Plan & Methods",
            SectionName::Innovation => "Innovation & Significance",
            SectionName::Budget => "Budget & Justification",
            SectionName::Risks => "Risk Mitigation",
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the serialized name, ignoring case and surrounding whitespace.
impl FromStr for SectionName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownSection {
                name: s.to_string(),
            })
    }
}

/// Draft state of a single section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionDraft {
    /// Current draft text, if any has been produced.
    pub draft: Option<String>,
    /// Explicitly accepted by the researcher.
    pub approved: bool,
    /// Recorded word count; takes precedence over counting the draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<f64>,
    /// Recorded rendered page count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<f64>,
}

impl SectionDraft {
    /// Create a section holding the given draft text.
    pub fn drafted(text: impl Into<String>) -> Self {
        Self {
            draft: Some(text.into()),
            ..Self::default()
        }
    }

    /// Whether the draft is present and non-blank.
    pub fn is_drafted(&self) -> bool {
        has_content(self.draft.as_deref())
    }
}

/// Collected bibliography entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bibliography {
    pub entries: Vec<String>,
}

/// All proposal sections keyed by their fixed names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalSections {
    pub r#abstract: SectionDraft,
    pub background: SectionDraft,
    pub aims: SectionDraft,
    pub methods: SectionDraft,
    pub innovation: SectionDraft,
    pub budget: SectionDraft,
    pub risks: SectionDraft,
    pub bibliography: Bibliography,
}

impl ProposalSections {
    /// Get a section by name.
    pub fn section(&self, name: SectionName) -> &SectionDraft {
        match name {
            SectionName::Abstract => &self.r#abstract,
            SectionName::Background => &self.background,
            SectionName::Aims => &self.aims,
            SectionName::Methods => &self.methods,
            SectionName::Innovation => &self.innovation,
            SectionName::Budget => &self.budget,
            SectionName::Risks => &self.risks,
        }
    }

    /// Get a mutable section by name.
    pub fn section_mut(&mut self, name: SectionName) -> &mut SectionDraft {
        match name {
            SectionName::Abstract => &mut self.r#abstract,
            SectionName::Background => &mut self.background,
            SectionName::Aims => &mut self.aims,
            SectionName::Methods => &mut self.methods,
            SectionName::Innovation => &mut self.innovation,
            SectionName::Budget => &mut self.budget,
            SectionName::Risks => &mut self.risks,
        }
    }

    /// Iterate sections in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionName, &SectionDraft)> {
        SectionName::ALL
            .into_iter()
            .map(move |name| (name, self.section(name)))
    }

    /// Sections with non-blank drafts, in canonical order.
    pub fn drafted(&self) -> Vec<SectionName> {
        self.iter()
            .filter(|(_, section)| section.is_drafted())
            .map(|(name, _)| name)
            .collect()
    }

    /// Sections without a non-blank draft, in canonical order.
    pub fn missing(&self) -> Vec<SectionName> {
        self.iter()
            .filter(|(_, section)| !section.is_drafted())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn drafted_count(&self) -> usize {
        self.iter().filter(|(_, s)| s.is_drafted()).count()
    }

    pub fn approved_count(&self) -> usize {
        self.iter().filter(|(_, s)| s.approved).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_name_roundtrip_str() {
        for name in SectionName::ALL {
            assert_eq!(name.as_str().parse::<SectionName>().unwrap(), name);
        }
    }

    #[test]
    fn test_unknown_section_fails_fast() {
        let err = "bibliography".parse::<SectionName>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownSection { ref name } if name == "bibliography"));
    }

    #[test]
    fn test_blank_draft_is_not_drafted() {
        assert!(!SectionDraft::drafted("  \n ").is_drafted());
        assert!(SectionDraft::drafted(" text ").is_drafted());
        assert!(!SectionDraft::default().is_drafted());
    }

    #[test]
    fn test_drafted_and_missing_preserve_order() {
        let mut sections = ProposalSections::default();
        sections.risks = SectionDraft::drafted("risk plan");
        sections.methods = SectionDraft::drafted("methods");

        assert_eq!(
            sections.drafted(),
            vec![SectionName::Methods, SectionName::Risks]
        );
        assert_eq!(
            sections.missing(),
            vec![
                SectionName::Abstract,
                SectionName::Background,
                SectionName::Aims,
                SectionName::Innovation,
                SectionName::Budget,
            ]
        );
        assert_eq!(sections.drafted_count(), 2);
    }

    #[test]
    fn test_abstract_key_deserializes() {
        let sections: ProposalSections = serde_json::from_str(
            r#"{"abstract": {"draft": "a", "approved": true, "wordCount": 12}}"#,
        )
        .unwrap();
        assert_eq!(sections.r#abstract.word_count, Some(12.0));
        assert_eq!(sections.approved_count(), 1);
    }
}
