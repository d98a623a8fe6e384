//! Core types, errors, config, tracing, and constants for the Verity
//! evidence engine.
//!
//! The engine combines heterogeneous, partial evidence about research
//! findings into calibrated posterior confidences, and detects logical
//! contradictions across a finding set. This crate holds the shared data
//! model and ambient concerns; the algorithms live in `verity-analysis`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::EngineConfig;
pub use errors::{ConfigError, DetectorError};
pub use types::{
    BiasReport, BiasType, ConfidenceExplanation, Contradiction, ContradictionType,
    CorroborationLevel, CredibilityLabel, CrossReference, EvidenceNode, EvidenceType,
    ExpertCheck, ExtractedData, Finding, MetricKey, Plausibility, Severity, Source, SourceRef,
    SourceType, TemporalContext, VerificationBundle,
};
