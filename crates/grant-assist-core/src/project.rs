//! Researcher profile and scientific plan.

use serde::{Deserialize, Serialize};

use crate::text::has_content;

/// Who is applying.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResearcherInfo {
    pub name: Option<String>,
    pub institution: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub appointment_date: Option<String>,
    pub prior_positions: Vec<String>,
    pub email: Option<String>,
}

impl ResearcherInfo {
    /// Name and department are both non-blank.
    pub fn has_profile(&self) -> bool {
        has_content(self.name.as_deref()) && has_content(self.department.as_deref())
    }
}

/// A single specific aim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Aim {
    pub number: u32,
    pub title: Option<String>,
    pub hypothesis: Option<String>,
    pub approach: Option<String>,
}

impl Aim {
    /// Title plus at least one of hypothesis or approach.
    pub fn is_complete(&self) -> bool {
        has_content(self.title.as_deref())
            && (has_content(self.hypothesis.as_deref()) || has_content(self.approach.as_deref()))
    }
}

/// Scientific plan captured during the interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectInfo {
    pub title: Option<String>,
    pub central_question: Option<String>,
    /// Aims in the order the researcher listed them.
    pub aims: Vec<Aim>,
    pub duration: Option<f64>,
}

impl Default for ProjectInfo {
    /// A fresh project starts with two empty aim slots.
    fn default() -> Self {
        Self {
            title: None,
            central_question: None,
            aims: vec![
                Aim {
                    number: 1,
                    ..Aim::default()
                },
                Aim {
                    number: 2,
                    ..Aim::default()
                },
            ],
            duration: None,
        }
    }
}

impl ProjectInfo {
    pub fn complete_aims(&self) -> usize {
        self.aims.iter().filter(|aim| aim.is_complete()).count()
    }
}
