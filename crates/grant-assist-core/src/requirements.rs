//! Externally supplied funder requirements.
//!
//! Every field may be absent because requirements are fetched from the funder
//! documentation at some point during the workflow. Absence means the
//! corresponding check is skipped or routed to manual review, never failed.

use serde::{Deserialize, Serialize};

/// Funder requirements for the call being applied to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Requirements {
    /// Whether requirements have been fetched from the funder docs.
    pub fetched: bool,
    pub source_url: Option<String>,
    pub fetch_date: Option<String>,
    pub eligibility: Eligibility,
    pub budget: BudgetLimits,
    /// Project duration in years.
    pub duration: Option<f64>,
    pub deadline: Option<String>,
    pub page_limits: PageLimits,
    /// Section names the funder requires, compared case-insensitively.
    pub required_sections: Vec<String>,
    pub formatting: Formatting,
}

/// Eligibility constraints, informational only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Eligibility {
    pub position_requirement: Option<String>,
    pub years_since_appointment: Option<f64>,
    pub institution_requirement: Option<String>,
    pub prior_funding_restriction: Option<String>,
}

/// Budget caps in the call's currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BudgetLimits {
    pub annual_maximum: Option<f64>,
    pub total_maximum: Option<f64>,
    pub currency: String,
}

impl Default for BudgetLimits {
    fn default() -> Self {
        Self {
            annual_maximum: None,
            total_maximum: None,
            currency: "NIS".to_string(),
        }
    }
}

/// Page limits per document part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageLimits {
    pub total: Option<f64>,
    pub background: Option<f64>,
    pub methods: Option<f64>,
    pub cv: Option<f64>,
}

/// Document formatting rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Formatting {
    pub language: Option<String>,
    pub font: Option<String>,
    pub margins: Option<String>,
    pub file_format: Option<String>,
}

impl Formatting {
    /// Whether font, margins and file format are all present.
    ///
    /// Language is not part of this check.
    pub fn is_complete(&self) -> bool {
        [&self.font, &self.margins, &self.file_format]
            .iter()
            .all(|field| field.as_deref().is_some_and(|v| !v.is_empty()))
    }
}
