//! Analysis engine for the Verity evidence pipeline.
//!
//! Two subsystems over the `verity-core` data model:
//!
//! - [`confidence`] — per-finding Bayesian confidence scoring with a full
//!   evidence chain and human-readable explanation
//! - [`contradiction`] — pairwise conflict detection (quantitative,
//!   temporal, interpretive) across a finding set
//!
//! [`pipeline`] ties both together for batch use.

pub mod confidence;
pub mod contradiction;
pub mod pipeline;

pub use confidence::{calculate_confidence, calculate_confidence_capped};
pub use contradiction::ContradictionDetector;
pub use pipeline::{
    analyze, analyze_with_cross_reference, enrich_findings, enrich_sources, AnalysisReport,
};
