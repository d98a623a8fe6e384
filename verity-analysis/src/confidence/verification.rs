//! Verification evidence integration.
//!
//! Folds bias-detection, expert plausibility, and cross-reference signals
//! into a running confidence, in that fixed order, via odds-space updates.
//! Each applied rule appends one evidence node. Missing signals are neutral:
//! no adjustment, no node.

use verity_core::constants::{
    BIAS_SCORE_THRESHOLD, CONTRADICTION_DECAY, EXTRAORDINARY_CLAIM_DISCOUNT,
};
use verity_core::types::{EvidenceNode, EvidenceType, Plausibility, VerificationBundle};

use super::bayes::odds_update;

/// Apply all present verification evidence to `confidence`.
///
/// Returns the updated confidence and the evidence nodes appended by each
/// applied rule, in application order.
pub fn integrate_verification(
    confidence: f64,
    verification: &VerificationBundle,
) -> (f64, Vec<EvidenceNode>) {
    let mut confidence = confidence;
    let mut nodes = Vec::new();

    if let Some(bias) = &verification.bias {
        // Low scores are noise, not evidence
        if bias.bias_score > BIAS_SCORE_THRESHOLD {
            // Biased sources are likelier to push false narratives; the ratio
            // scales from 0.7 (mild) down to 0.3 (severe)
            let likelihood_ratio = 0.7 - bias.bias_score * 0.4;

            let prior = confidence;
            confidence = odds_update(confidence, likelihood_ratio);

            nodes.push(EvidenceNode::new(
                EvidenceType::BiasDetection,
                "Bias Detection",
                prior,
                likelihood_ratio,
                0.5,
                format!(
                    "Bias score: {:.2} - {}",
                    bias.bias_score,
                    bias.bias_type.name()
                ),
            ));
        }
    }

    if let Some(expert) = &verification.expert_check {
        let (likelihood_ratio, explanation) = match expert.plausibility {
            Plausibility::Implausible => {
                (0.3, "Expert assessment: claim is implausible".to_string())
            }
            Plausibility::Questionable => {
                (0.6, "Expert assessment: claim is questionable".to_string())
            }
            Plausibility::Plausible => (
                1.0 + (expert.plausibility_score - 0.7) * 0.3,
                format!(
                    "Expert assessment: claim is plausible ({:.0}%)",
                    expert.plausibility_score * 100.0
                ),
            ),
        };

        let prior = confidence;
        confidence = odds_update(confidence, likelihood_ratio);

        // Recorded likelihood is mirrored into (0, 1] for ratios above 1
        let recorded_likelihood = if likelihood_ratio <= 1.0 {
            likelihood_ratio
        } else {
            1.0 / likelihood_ratio
        };

        nodes.push(EvidenceNode::new(
            EvidenceType::ExpertSanity,
            "Expert Sanity Check",
            prior,
            recorded_likelihood,
            0.5,
            explanation,
        ));

        if expert.extraordinary_claim {
            // Extraordinary claims require extraordinary evidence: a direct
            // multiplicative discount, outside the odds framework
            confidence *= EXTRAORDINARY_CLAIM_DISCOUNT;
            nodes.push(EvidenceNode::new(
                EvidenceType::ExpertSanity,
                "Extraordinary Claim Flag",
                confidence / EXTRAORDINARY_CLAIM_DISCOUNT,
                EXTRAORDINARY_CLAIM_DISCOUNT,
                0.5,
                "Extraordinary claim requires stronger evidence",
            ));
        }
    }

    if let Some(cross_ref) = &verification.cross_reference {
        let mut likelihood_ratio = cross_ref.corroboration_level.likelihood_ratio();

        // Each detected conflict compounds a penalty, with no upper bound
        let contradiction_count = cross_ref.contradicting_findings.len();
        if contradiction_count > 0 {
            likelihood_ratio *= CONTRADICTION_DECAY.powi(contradiction_count as i32);
        }

        let prior = confidence;
        confidence = odds_update(confidence, likelihood_ratio);

        let mut explanation = format!(
            "Cross-reference: {}",
            cross_ref.corroboration_level.name()
        );
        if contradiction_count > 0 {
            explanation.push_str(&format!(" ({contradiction_count} contradictions)"));
        }

        nodes.push(EvidenceNode::new(
            EvidenceType::CrossReference,
            "Cross-Reference Analysis",
            prior,
            likelihood_ratio.min(1.0),
            0.5,
            explanation,
        ));
    }

    (confidence, nodes)
}
