//! Verification signals from the external verification stage.
//!
//! Every field and sub-object is optional — the verification stage runs a
//! configurable subset of checks, and the engine must never require
//! completeness. Missing parts default to neutral behavior.

use serde::{Deserialize, Serialize};

/// Bias classification from the bias-detection check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BiasType {
    VendorMarketing,
    AnalystConflict,
    CompetitiveAttack,
    SelectionBias,
    #[default]
    None,
}

impl BiasType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::VendorMarketing => "vendor_marketing",
            Self::AnalystConflict => "analyst_conflict",
            Self::CompetitiveAttack => "competitive_attack",
            Self::SelectionBias => "selection_bias",
            Self::None => "none",
        }
    }
}

/// Result of the bias-detection check.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BiasReport {
    pub bias_detected: bool,
    /// Bias severity in [0, 1]. Scores at or below 0.3 are ignored.
    pub bias_score: f64,
    pub bias_type: BiasType,
}

/// Expert judgment on whether a claim is plausible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Plausibility {
    #[default]
    Plausible,
    Questionable,
    Implausible,
}

impl Plausibility {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Plausible => "plausible",
            Self::Questionable => "questionable",
            Self::Implausible => "implausible",
        }
    }
}

/// Result of the expert plausibility check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpertCheck {
    pub plausibility: Plausibility,
    pub plausibility_score: f64,
    pub extraordinary_claim: bool,
}

impl Default for ExpertCheck {
    fn default() -> Self {
        Self {
            plausibility: Plausibility::Plausible,
            plausibility_score: 0.7,
            extraordinary_claim: false,
        }
    }
}

/// How well other findings corroborate this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CorroborationLevel {
    Strong,
    Moderate,
    Weak,
    Uncorroborated,
    #[default]
    Unknown,
}

impl CorroborationLevel {
    /// Likelihood ratio this corroboration level contributes.
    pub fn likelihood_ratio(&self) -> f64 {
        match self {
            Self::Strong => 1.3,
            Self::Moderate => 1.1,
            Self::Weak => 0.95,
            Self::Uncorroborated => 0.8,
            Self::Unknown => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
            Self::Uncorroborated => "uncorroborated",
            Self::Unknown => "unknown",
        }
    }
}

/// Result of the cross-reference check.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CrossReference {
    pub corroboration_level: CorroborationLevel,
    /// IDs of findings that conflict with this one. Each compounds a 0.9×
    /// penalty on the likelihood ratio, with no upper bound on the count.
    pub contradicting_findings: Vec<String>,
}

/// The full (possibly partial) verification record for one finding.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VerificationBundle {
    pub bias: Option<BiasReport>,
    pub expert_check: Option<ExpertCheck>,
    pub cross_reference: Option<CrossReference>,
}
