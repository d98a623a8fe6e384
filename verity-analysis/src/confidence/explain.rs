//! Explanation assembly: summary, actionable suggestions, and the
//! human-readable narrative for a computed confidence.

use smallvec::SmallVec;

use verity_core::constants::{HIGH_AUTHORITY_THRESHOLD, MAX_SUGGESTIONS};
use verity_core::types::{ConfidenceExplanation, EvidenceNode, EvidenceType, Source};

use super::authority::domain_authority;

fn pct(x: f64) -> String {
    format!("{:.0}%", x * 100.0)
}

/// Assemble the structured explanation for one finding's confidence run.
///
/// `evidence_chain` must be in application order; it is moved into the
/// explanation unchanged.
pub fn build_explanation(
    base_confidence: f64,
    final_confidence: f64,
    evidence_chain: Vec<EvidenceNode>,
    sources: &[Source],
) -> ConfidenceExplanation {
    let mut what_would_increase: SmallVec<[String; 5]> = SmallVec::new();
    let mut what_would_decrease: SmallVec<[String; 5]> = SmallVec::new();

    // Source diversity
    let distinct_domains = {
        let mut domains: Vec<&str> = sources.iter().map(|s| s.domain.as_str()).collect();
        domains.sort_unstable();
        domains.dedup();
        domains.len()
    };
    if distinct_domains < 3 {
        what_would_increase
            .push("Additional corroborating sources from different domains".to_string());
    }

    // High-authority backing
    let high_authority_count = sources
        .iter()
        .filter(|s| domain_authority(&s.domain).0 > HIGH_AUTHORITY_THRESHOLD)
        .count();
    if high_authority_count < 2 {
        what_would_increase.push(
            "Citations from authoritative sources (academic, government, major publications)"
                .to_string(),
        );
    }

    // Verification flags surfaced verbatim
    for node in &evidence_chain {
        match node.evidence_type {
            EvidenceType::BiasDetection if node.posterior < node.prior => {
                what_would_decrease.push(format!("Bias detected: {}", node.explanation));
            }
            EvidenceType::ExpertSanity => {
                let lower = node.explanation.to_lowercase();
                if lower.contains("implausible") {
                    what_would_decrease
                        .push("Expert assessment flagged claim as implausible".to_string());
                } else if lower.contains("questionable") {
                    what_would_decrease
                        .push("Expert assessment flagged claim as questionable".to_string());
                }
            }
            _ => {}
        }
    }

    if final_confidence < 0.7 {
        what_would_increase.push("Verification by independent fact-checking".to_string());
    }
    if final_confidence > 0.8 {
        what_would_decrease
            .push("Discovery of conflicting evidence or retractions".to_string());
    }

    what_would_increase.truncate(MAX_SUGGESTIONS);
    what_would_decrease.truncate(MAX_SUGGESTIONS);

    let summary = if final_confidence >= base_confidence + 0.1 {
        format!(
            "Confidence increased from {} to {} due to corroborating evidence from credible sources.",
            pct(base_confidence),
            pct(final_confidence)
        )
    } else if final_confidence <= base_confidence - 0.1 {
        format!(
            "Confidence decreased from {} to {} due to verification concerns (bias, plausibility, or lack of corroboration).",
            pct(base_confidence),
            pct(final_confidence)
        )
    } else {
        format!(
            "Confidence of {} reflects balanced evidence from the available sources and verification checks.",
            pct(final_confidence)
        )
    };

    ConfidenceExplanation {
        base_confidence,
        final_confidence,
        summary,
        evidence_chain,
        what_would_increase,
        what_would_decrease,
    }
}

/// Render the multi-line human-readable narrative for an explanation.
pub fn render_narrative(explanation: &ConfidenceExplanation) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "This finding has {} confidence.",
        pct(explanation.final_confidence)
    ));
    lines.push(String::new());
    lines.push("Reasoning:".to_string());
    lines.push(format!(
        "  - Started with {} base confidence",
        pct(explanation.base_confidence)
    ));

    for node in &explanation.evidence_chain {
        let direction = if node.raised_belief() {
            "increased"
        } else {
            "decreased"
        };
        lines.push(format!(
            "  - {}: {} to {}",
            node.name,
            direction,
            pct(node.posterior)
        ));
        if !node.explanation.is_empty() {
            lines.push(format!("    ({})", node.explanation));
        }
    }

    if !explanation.what_would_increase.is_empty() {
        lines.push(String::new());
        lines.push("To increase confidence:".to_string());
        for item in explanation.what_would_increase.iter().take(3) {
            lines.push(format!("  - {item}"));
        }
    }

    if !explanation.what_would_decrease.is_empty() {
        lines.push(String::new());
        lines.push("Factors that could lower confidence:".to_string());
        for item in explanation.what_would_decrease.iter().take(3) {
            lines.push(format!("  - {item}"));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_core::types::SourceType;

    fn sources(domains: &[&str]) -> Vec<Source> {
        domains
            .iter()
            .map(|d| Source {
                url: format!("https://{d}/a"),
                domain: d.to_string(),
                source_type: SourceType::Web,
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_summary_increased() {
        let explanation = build_explanation(0.5, 0.72, vec![], &[]);
        assert!(explanation.summary.contains("increased from 50% to 72%"));
    }

    #[test]
    fn test_summary_decreased() {
        let explanation = build_explanation(0.7, 0.4, vec![], &[]);
        assert!(explanation.summary.contains("decreased from 70% to 40%"));
    }

    #[test]
    fn test_summary_balanced() {
        let explanation = build_explanation(0.55, 0.6, vec![], &[]);
        assert!(explanation.summary.contains("balanced evidence"));
    }

    #[test]
    fn test_few_domains_suggests_diversification() {
        let srcs = sources(&["a.com", "b.com"]);
        let explanation = build_explanation(0.5, 0.5, vec![], &srcs);
        assert!(explanation
            .what_would_increase
            .iter()
            .any(|s| s.contains("different domains")));
    }

    #[test]
    fn test_diverse_high_authority_sources_drop_suggestions() {
        let srcs = sources(&["reuters.com", "sec.gov", "nature.com"]);
        let explanation = build_explanation(0.5, 0.75, vec![], &srcs);
        assert!(!explanation
            .what_would_increase
            .iter()
            .any(|s| s.contains("different domains")));
        assert!(!explanation
            .what_would_increase
            .iter()
            .any(|s| s.contains("authoritative")));
    }

    #[test]
    fn test_bias_flag_surfaced() {
        let node = EvidenceNode::new(
            EvidenceType::BiasDetection,
            "Bias Detection",
            0.6,
            0.4,
            0.5,
            "Bias score: 0.75 - vendor_marketing",
        );
        let explanation = build_explanation(0.6, 0.45, vec![node], &[]);
        assert!(explanation
            .what_would_decrease
            .iter()
            .any(|s| s.contains("vendor_marketing")));
    }

    #[test]
    fn test_suggestion_lists_capped() {
        let nodes: Vec<EvidenceNode> = (0..10)
            .map(|_| {
                EvidenceNode::new(
                    EvidenceType::ExpertSanity,
                    "Expert Sanity Check",
                    0.6,
                    0.3,
                    0.5,
                    "Expert assessment: claim is implausible",
                )
            })
            .collect();
        let explanation = build_explanation(0.6, 0.2, nodes, &[]);
        assert!(explanation.what_would_decrease.len() <= 5);
        assert!(explanation.what_would_increase.len() <= 5);
    }

    #[test]
    fn test_narrative_walks_chain() {
        let node = EvidenceNode::new(
            EvidenceType::CrossReference,
            "Cross-Reference Analysis",
            0.5,
            0.65,
            0.5,
            "Cross-reference: strong",
        );
        let explanation = build_explanation(0.5, 0.62, vec![node], &[]);
        let narrative = render_narrative(&explanation);
        assert!(narrative.contains("This finding has 62% confidence."));
        assert!(narrative.contains("Started with 50% base confidence"));
        assert!(narrative.contains("Cross-Reference Analysis: increased to 65%"));
        assert!(narrative.contains("(Cross-reference: strong)"));
    }
}
