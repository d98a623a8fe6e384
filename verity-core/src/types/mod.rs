//! The Verity data model: findings, sources, verification signals, evidence
//! chains, and contradiction records.

mod contradiction;
mod evidence;
mod extracted;
mod finding;
mod source;
mod verification;

pub use contradiction::{Contradiction, ContradictionType, Severity};
pub use evidence::{ConfidenceExplanation, EvidenceNode, EvidenceType};
pub use extracted::{ExtractedData, MetricKey};
pub use finding::{Finding, SourceRef, TemporalContext};
pub use source::{CredibilityLabel, Source, SourceType};
pub use verification::{
    BiasReport, BiasType, CorroborationLevel, CrossReference, ExpertCheck, Plausibility,
    VerificationBundle,
};
