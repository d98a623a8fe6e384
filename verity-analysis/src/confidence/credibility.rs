//! Per-source credibility estimation.
//!
//! Combines the domain authority prior with lightweight content-signal
//! heuristics via a two-hypothesis Bayesian posterior.

use verity_core::constants::{
    CONFIDENCE_CEILING, CONTENT_SIGNAL_CEILING, CONTENT_SIGNAL_FLOOR, NEUTRAL_CONTENT_SIGNAL,
};
use verity_core::types::{CredibilityLabel, EvidenceNode, EvidenceType, Source, SourceType};

use super::authority::domain_authority;

/// Marketing superlatives in a title are a negative quality signal.
const MARKETING_WORDS: [&str; 5] = ["best", "top", "amazing", "revolutionary", "guaranteed"];

/// Estimate P(source is credible) for one source.
///
/// The content-signal score is treated as `P(signal | credible)` and its
/// complement as `P(signal | not credible)`; the posterior comes from the
/// standard two-hypothesis formula with the domain authority as prior.
/// Returns the credibility (clamped to [0.1, 0.95]) and the evidence node
/// recording the domain-match explanation.
pub fn estimate_credibility(source: &Source) -> (f64, EvidenceNode) {
    let (domain_prior, domain_explanation) = domain_authority(&source.domain);

    let signal = content_signals(source);
    let likelihood_if_credible = signal;
    let likelihood_if_not_credible = 1.0 - signal;

    // P(signal) = P(signal|credible)P(credible) + P(signal|not)P(not)
    let marginal = likelihood_if_credible * domain_prior
        + likelihood_if_not_credible * (1.0 - domain_prior);

    let posterior = if marginal > 0.0 {
        (likelihood_if_credible * domain_prior) / marginal
    } else {
        domain_prior
    };
    let posterior = posterior.clamp(CONTENT_SIGNAL_FLOOR, CONFIDENCE_CEILING);

    let evidence = EvidenceNode::new(
        EvidenceType::SourceCredibility,
        format!("Source: {}", source.domain),
        domain_prior,
        likelihood_if_credible,
        marginal,
        domain_explanation,
    );

    (posterior, evidence)
}

/// Assess content quality signals from source metadata.
///
/// Returns P(observed signals | content is high quality), clamped to
/// [0.1, 0.9] so no single source can look certain either way.
pub fn content_signals(source: &Source) -> f64 {
    let mut score = NEUTRAL_CONTENT_SIGNAL;

    if !source.title.is_empty() {
        // Longer, descriptive titles tend to be higher quality
        if source.title.len() > 30 {
            score += 0.05;
        }
        if source.title.len() > 60 {
            score += 0.05;
        }

        let title_lower = source.title.to_lowercase();
        if MARKETING_WORDS.iter().any(|w| title_lower.contains(w)) {
            score -= 0.10;
        }
    }

    if !source.snippet.is_empty() {
        // Substantive snippets suggest better content
        if source.snippet.len() > 100 {
            score += 0.05;
        }
        // Numbers suggest factual content
        if source.snippet.chars().any(|c| c.is_ascii_digit()) {
            score += 0.05;
        }
    }

    score += match source.source_type {
        SourceType::Academic => 0.15,
        SourceType::News => 0.05,
        SourceType::Blog => -0.05,
        SourceType::Social => -0.10,
        SourceType::Web => 0.0,
    };

    score.clamp(CONTENT_SIGNAL_FLOOR, CONTENT_SIGNAL_CEILING)
}

/// Fill `credibility_score` and `credibility_label` on a source in place.
///
/// The score is the same posterior [`estimate_credibility`] computes; the
/// label buckets it for display (>= 0.8 high, >= 0.6 medium, else low).
pub fn enrich_source_credibility(source: &mut Source) {
    let (score, _) = estimate_credibility(source);
    source.credibility_score = Some(score);
    source.credibility_label = Some(CredibilityLabel::from_score(score));
}
