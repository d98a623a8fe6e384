//! Contradiction records produced by the pairwise finding scan.

use serde::{Deserialize, Serialize};

/// The kind of conflict detected between two findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContradictionType {
    Quantitative,
    Temporal,
    Interpretive,
}

impl ContradictionType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Quantitative => "quantitative",
            Self::Temporal => "temporal",
            Self::Interpretive => "interpretive",
        }
    }
}

/// How serious a contradiction is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A detected contradiction between two findings.
///
/// Produced fresh per analysis run and reported separately; never persisted
/// onto a `Finding`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contradiction {
    pub finding_a_id: String,
    pub finding_a_summary: String,
    pub finding_b_id: String,
    pub finding_b_summary: String,
    pub contradiction_type: ContradictionType,
    pub description: String,
    pub severity: Severity,
    pub resolution_hint: String,
}
