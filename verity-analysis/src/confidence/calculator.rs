//! Per-finding confidence orchestration.
//!
//! Pure and deterministic: identical (finding, sources, verification) inputs
//! always yield identical outputs. The evidence chain is built fresh per
//! call and returned, never held as shared state.

use verity_core::constants::{
    CONFIDENCE_CEILING, CONFIDENCE_FLOOR, MAX_SOURCES_PER_FINDING, SOURCE_BLEND_WEIGHT,
};
use verity_core::types::{
    ConfidenceExplanation, EvidenceNode, EvidenceType, Finding, Source, VerificationBundle,
};

use super::combine::combine_credibilities;
use super::credibility::estimate_credibility;
use super::explain::build_explanation;
use super::verification::integrate_verification;

/// Compute the calibrated posterior confidence for one finding.
///
/// Uses at most the first [`MAX_SOURCES_PER_FINDING`] sources. Returns the
/// final confidence (clamped to [0.10, 0.95]) and the full structured
/// explanation with the evidence chain in application order.
pub fn calculate_confidence(
    finding: &Finding,
    sources: &[Source],
    verification: Option<&VerificationBundle>,
) -> (f64, ConfidenceExplanation) {
    calculate_confidence_capped(finding, sources, verification, MAX_SOURCES_PER_FINDING)
}

/// [`calculate_confidence`] with an explicit source cap (config override).
pub fn calculate_confidence_capped(
    finding: &Finding,
    sources: &[Source],
    verification: Option<&VerificationBundle>,
    max_sources: usize,
) -> (f64, ConfidenceExplanation) {
    let base_confidence = finding.confidence_score;
    let mut current = base_confidence;
    let mut chain: Vec<EvidenceNode> = Vec::new();

    // Step 1: per-source credibility
    let mut source_posteriors = Vec::new();
    for source in sources.iter().take(max_sources) {
        let (credibility, node) = estimate_credibility(source);
        source_posteriors.push(credibility);
        chain.push(node);
    }

    // Step 2: corroboration-aware combination, blended toward the running
    // confidence with fixed weight
    if !source_posteriors.is_empty() {
        let combined = combine_credibilities(&source_posteriors);
        current = (1.0 - SOURCE_BLEND_WEIGHT) * current + SOURCE_BLEND_WEIGHT * combined;

        chain.push(EvidenceNode::new(
            EvidenceType::Corroboration,
            "Source Agreement",
            base_confidence,
            combined,
            0.5,
            format!(
                "Combined credibility from {} sources",
                source_posteriors.len()
            ),
        ));
    }

    // Step 3: verification evidence, fixed order, odds-space only
    if let Some(bundle) = verification {
        let (updated, nodes) = integrate_verification(current, bundle);
        current = updated;
        chain.extend(nodes);
    }

    // Step 4: final clamp
    let final_confidence = current.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING);

    tracing::debug!(
        finding_id = %finding.finding_id,
        base = base_confidence,
        adjusted = final_confidence,
        evidence_nodes = chain.len(),
        "confidence calculated"
    );

    let explanation = build_explanation(base_confidence, final_confidence, chain, sources);
    (final_confidence, explanation)
}
