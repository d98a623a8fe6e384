//! Evidence chain: the ordered record of every adjustment applied to a
//! confidence value.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// What kind of evidence a chain node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceType {
    SourceCredibility,
    Corroboration,
    BiasDetection,
    ExpertSanity,
    CrossReference,
}

impl EvidenceType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SourceCredibility => "source_credibility",
            Self::Corroboration => "corroboration",
            Self::BiasDetection => "bias_detection",
            Self::ExpertSanity => "expert_sanity",
            Self::CrossReference => "cross_reference",
        }
    }
}

/// One piece of evidence in the chain.
///
/// `posterior` is always derived at construction as
/// `likelihood * prior / marginal`, falling back to `prior` when the marginal
/// is zero, and is never recomputed afterward. [`EvidenceNode::new`] is the
/// only way to build a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceNode {
    pub evidence_type: EvidenceType,
    pub name: String,
    pub prior: f64,
    pub likelihood: f64,
    pub marginal: f64,
    pub posterior: f64,
    pub explanation: String,
}

impl EvidenceNode {
    /// Build a node, deriving the posterior via Bayes' theorem.
    pub fn new(
        evidence_type: EvidenceType,
        name: impl Into<String>,
        prior: f64,
        likelihood: f64,
        marginal: f64,
        explanation: impl Into<String>,
    ) -> Self {
        let posterior = if marginal > 0.0 {
            (likelihood * prior) / marginal
        } else {
            prior
        };
        Self {
            evidence_type,
            name: name.into(),
            prior,
            likelihood,
            marginal,
            posterior,
            explanation: explanation.into(),
        }
    }

    /// Whether this node moved belief upward.
    pub fn raised_belief(&self) -> bool {
        self.posterior > self.prior
    }
}

/// Structured explanation of how a confidence value was computed.
///
/// `evidence_chain` is in application order: the order nodes were constructed
/// is the order their adjustments were applied.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfidenceExplanation {
    pub base_confidence: f64,
    pub final_confidence: f64,
    pub summary: String,
    pub evidence_chain: Vec<EvidenceNode>,
    /// Actionable suggestions, at most 5 entries.
    pub what_would_increase: SmallVec<[String; 5]>,
    /// Risk factors, at most 5 entries.
    pub what_would_decrease: SmallVec<[String; 5]>,
}
