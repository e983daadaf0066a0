//! Budget totals and uploaded reference sources.

use serde::{Deserialize, Serialize};

/// Requested budget per year and overall.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BudgetTotals {
    pub year1: Option<f64>,
    pub year2: Option<f64>,
    pub year3: Option<f64>,
    pub year4: Option<f64>,
    pub total: Option<f64>,
}

impl BudgetTotals {
    /// Per-year totals in year order.
    pub fn years(&self) -> [Option<f64>; 4] {
        [self.year1, self.year2, self.year3, self.year4]
    }
}

/// Budget-related resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resources {
    pub budget_totals: BudgetTotals,
}

/// An uploaded grounding document (paper, prior grant, reviewer notes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceSource {
    pub id: String,
    pub label: String,
    pub filename: String,
}

impl ReferenceSource {
    pub fn new(id: impl Into<String>, label: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            filename: filename.into(),
        }
    }
}
