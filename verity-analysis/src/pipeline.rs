//! Batch enrichment: score a whole finding set and detect contradictions.
//!
//! Per-finding scoring is independent, so the calculator fans out across the
//! set with rayon. Contradiction detection runs after scoring on the full
//! set. Input findings are never mutated; enrichment returns copies with the
//! engine-output fields filled in.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use verity_core::config::EngineConfig;
use verity_core::errors::DetectorError;
use verity_core::types::{
    Contradiction, CorroborationLevel, CrossReference, Finding, Source, VerificationBundle,
};

use crate::confidence::calculator::calculate_confidence_capped;
use crate::confidence::credibility::enrich_source_credibility;
use crate::confidence::explain::render_narrative;
use crate::contradiction::ContradictionDetector;

/// Verification results keyed by finding id.
pub type VerificationMap = FxHashMap<String, VerificationBundle>;

/// Full engine output for one finding set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub findings: Vec<Finding>,
    pub contradictions: Vec<Contradiction>,
}

/// Fill credibility scores and labels across a source pool.
pub fn enrich_sources(sources: Vec<Source>) -> Vec<Source> {
    sources
        .into_par_iter()
        .map(|mut source| {
            enrich_source_credibility(&mut source);
            source
        })
        .collect()
}

/// Score every finding against its sources and verification results.
///
/// Source selection per finding: the finding's supporting_sources matched by
/// URL against the pool, falling back to the whole pool when nothing
/// matches. The configured source cap applies after selection.
pub fn enrich_findings(
    findings: &[Finding],
    sources: &[Source],
    verifications: &VerificationMap,
    config: &EngineConfig,
) -> Vec<Finding> {
    let max_sources = config.effective_max_sources();

    let enriched: Vec<Finding> = findings
        .par_iter()
        .map(|finding| {
            let selected = select_sources(finding, sources);
            let verification = verifications.get(&finding.finding_id);
            let (confidence, explanation) =
                calculate_confidence_capped(finding, &selected, verification, max_sources);

            let mut out = finding.clone();
            out.confidence_narrative = Some(render_narrative(&explanation));
            out.adjusted_confidence = Some(confidence);
            out.confidence_explanation = Some(explanation);
            out
        })
        .collect();

    debug!(findings = enriched.len(), "finding enrichment complete");
    enriched
}

/// One-shot enrichment plus contradiction detection.
pub fn analyze(
    findings: &[Finding],
    sources: &[Source],
    verifications: &VerificationMap,
    config: &EngineConfig,
) -> Result<AnalysisReport, DetectorError> {
    let enriched = enrich_findings(findings, sources, verifications, config);
    let detector = ContradictionDetector::with_config(config)?;
    let contradictions = detector.detect(&enriched);
    Ok(AnalysisReport {
        findings: enriched,
        contradictions,
    })
}

/// Two-pass variant: detected contradictions feed back into each finding's
/// cross-reference evidence, and affected findings are re-scored.
///
/// A finding already carrying a cross-reference keeps its corroboration
/// level and gets the detected contradicting ids appended; one without gets
/// a synthesized cross-reference at the unknown level. Findings with no
/// detected contradictions and no prior cross-reference keep their
/// first-pass scores.
pub fn analyze_with_cross_reference(
    findings: &[Finding],
    sources: &[Source],
    verifications: &VerificationMap,
    config: &EngineConfig,
) -> Result<AnalysisReport, DetectorError> {
    let max_sources = config.effective_max_sources();

    let enriched = enrich_findings(findings, sources, verifications, config);
    let detector = ContradictionDetector::with_config(config)?;
    let contradictions = detector.detect(&enriched);

    let mut conflicts: FxHashMap<&str, Vec<String>> = FxHashMap::default();
    for c in &contradictions {
        conflicts
            .entry(c.finding_a_id.as_str())
            .or_default()
            .push(c.finding_b_id.clone());
        conflicts
            .entry(c.finding_b_id.as_str())
            .or_default()
            .push(c.finding_a_id.clone());
    }

    let rescored: Vec<Finding> = enriched
        .into_par_iter()
        .map(|finding| {
            let detected = conflicts.get(finding.finding_id.as_str());
            let existing = verifications.get(&finding.finding_id);
            let Some(updated) = updated_bundle(existing, detected) else {
                return finding;
            };

            let selected = select_sources(&finding, sources);
            let (confidence, explanation) =
                calculate_confidence_capped(&finding, &selected, Some(&updated), max_sources);

            let mut out = finding;
            out.confidence_narrative = Some(render_narrative(&explanation));
            out.adjusted_confidence = Some(confidence);
            out.confidence_explanation = Some(explanation);
            out
        })
        .collect();

    debug!(
        findings = rescored.len(),
        contradictions = contradictions.len(),
        "cross-reference re-scoring complete"
    );
    Ok(AnalysisReport {
        findings: rescored,
        contradictions,
    })
}

/// Merge detected contradictions into a finding's verification bundle.
/// Returns `None` when there is nothing to change.
fn updated_bundle(
    existing: Option<&VerificationBundle>,
    detected: Option<&Vec<String>>,
) -> Option<VerificationBundle> {
    let detected = match detected {
        Some(ids) if !ids.is_empty() => ids,
        _ => return None,
    };

    let mut bundle = existing.cloned().unwrap_or_default();
    let cross_reference = bundle.cross_reference.get_or_insert_with(|| CrossReference {
        corroboration_level: CorroborationLevel::Unknown,
        contradicting_findings: Vec::new(),
    });
    for id in detected {
        if !cross_reference.contradicting_findings.contains(id) {
            cross_reference.contradicting_findings.push(id.clone());
        }
    }
    Some(bundle)
}

/// Sources named by the finding's supporting references, else the full pool.
fn select_sources(finding: &Finding, pool: &[Source]) -> Vec<Source> {
    let matched: Vec<Source> = pool
        .iter()
        .filter(|source| {
            finding
                .supporting_sources
                .iter()
                .any(|sref| sref.url == source.url)
        })
        .cloned()
        .collect();
    if matched.is_empty() {
        pool.to_vec()
    } else {
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_core::types::{SourceRef, SourceType};

    fn finding(id: &str, confidence: f64) -> Finding {
        Finding {
            finding_id: id.to_string(),
            finding_type: "fact".to_string(),
            content: format!("claim {id}"),
            confidence_score: confidence,
            ..Default::default()
        }
    }

    fn source(url: &str, domain: &str) -> Source {
        Source {
            url: url.to_string(),
            domain: domain.to_string(),
            title: "A reasonably descriptive article title".to_string(),
            snippet: "Report with figures: 40% of 1,200 firms surveyed adopted the tool this year."
                .to_string(),
            source_type: SourceType::News,
            ..Default::default()
        }
    }

    #[test]
    fn test_enrich_sources_fills_credibility() {
        let pool = vec![
            source("https://reuters.com/a", "reuters.com"),
            source("https://randomblog123.net/post", "randomblog123.net"),
        ];
        let enriched = enrich_sources(pool);

        assert_eq!(enriched.len(), 2);
        for s in &enriched {
            assert!(s.credibility_score.is_some());
            assert!(s.credibility_label.is_some());
        }
        // Pool order is preserved; the authoritative domain scores higher
        assert!(enriched[0].credibility_score > enriched[1].credibility_score);
    }

    #[test]
    fn test_enrich_fills_engine_fields_only() {
        let findings = vec![finding("f1", 0.5)];
        let sources = vec![source("https://reuters.com/a", "reuters.com")];
        let enriched =
            enrich_findings(&findings, &sources, &VerificationMap::default(), &EngineConfig::default());

        assert_eq!(enriched.len(), 1);
        let f = &enriched[0];
        assert!(f.adjusted_confidence.is_some());
        assert!(f.confidence_explanation.is_some());
        assert!(f.confidence_narrative.is_some());
        assert_eq!(f.content, findings[0].content);
        assert_eq!(f.confidence_score, findings[0].confidence_score);
    }

    #[test]
    fn test_supporting_sources_narrow_the_pool() {
        let mut f = finding("f1", 0.5);
        f.supporting_sources = vec![SourceRef {
            url: "https://reuters.com/a".to_string(),
            title: None,
        }];
        let pool = vec![
            source("https://reuters.com/a", "reuters.com"),
            source("https://randomblog123.net/post", "randomblog123.net"),
        ];

        let selected = select_sources(&f, &pool);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].domain, "reuters.com");
    }

    #[test]
    fn test_no_supporting_match_falls_back_to_pool() {
        let mut f = finding("f1", 0.5);
        f.supporting_sources = vec![SourceRef {
            url: "https://elsewhere.example/x".to_string(),
            title: None,
        }];
        let pool = vec![source("https://reuters.com/a", "reuters.com")];
        assert_eq!(select_sources(&f, &pool).len(), 1);
    }

    #[test]
    fn test_analyze_report_serializes() {
        let findings = vec![finding("f1", 0.5), finding("f2", 0.6)];
        let report = analyze(
            &findings,
            &[],
            &VerificationMap::default(),
            &EngineConfig::default(),
        )
        .unwrap();
        assert_eq!(report.findings.len(), 2);
        assert!(report.contradictions.is_empty());

        let json = serde_json::to_string(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.findings.len(), 2);
    }

    #[test]
    fn test_cross_reference_pass_lowers_conflicting_findings() {
        use verity_core::types::ExtractedData;

        let data = |rate: &str| ExtractedData {
            technology: Some("WidgetAI".to_string()),
            adoption_rate: Some(rate.to_string()),
            ..Default::default()
        };
        let mut f1 = finding("f1", 0.7);
        f1.extracted_data = Some(data("40%"));
        let mut f2 = finding("f2", 0.7);
        f2.extracted_data = Some(data("77%"));
        let findings = vec![f1, f2];

        let config = EngineConfig::default();
        let verifications = VerificationMap::default();
        let single = analyze(&findings, &[], &verifications, &config).unwrap();
        let double = analyze_with_cross_reference(&findings, &[], &verifications, &config).unwrap();

        assert_eq!(double.contradictions.len(), 1);
        for (first, second) in single.findings.iter().zip(&double.findings) {
            // Contradiction decay only ever lowers confidence
            let a = first.adjusted_confidence.unwrap_or(0.0);
            let b = second.adjusted_confidence.unwrap_or(0.0);
            assert!(b <= a, "expected {b} <= {a} for {}", first.finding_id);
        }
    }

    #[test]
    fn test_cross_reference_pass_leaves_clean_findings_alone() {
        let findings = vec![finding("f1", 0.5), finding("f2", 0.6)];
        let config = EngineConfig::default();
        let verifications = VerificationMap::default();
        let single = analyze(&findings, &[], &verifications, &config).unwrap();
        let double = analyze_with_cross_reference(&findings, &[], &verifications, &config).unwrap();

        for (first, second) in single.findings.iter().zip(&double.findings) {
            assert_eq!(first.adjusted_confidence, second.adjusted_confidence);
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        let findings = vec![finding("f1", 0.5), finding("f2", 0.8)];
        let sources = vec![
            source("https://reuters.com/a", "reuters.com"),
            source("https://example.blogspot.com/b", "example.blogspot.com"),
        ];
        let config = EngineConfig::default();
        let verifications = VerificationMap::default();

        let run_a = analyze(&findings, &sources, &verifications, &config).unwrap();
        let run_b = analyze(&findings, &sources, &verifications, &config).unwrap();
        assert_eq!(
            serde_json::to_string(&run_a).unwrap(),
            serde_json::to_string(&run_b).unwrap()
        );
    }
}
