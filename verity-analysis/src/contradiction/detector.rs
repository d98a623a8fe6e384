//! Pairwise contradiction detection across a finding set.
//!
//! Three rules, checked in order per pair; the first hit wins so a pair
//! reports at most one contradiction:
//!
//! 1. Quantitative — same metric, same entity, numbers more than 30% apart
//! 2. Temporal — same finding type, same entity, different referenced dates
//! 3. Interpretive — same topic, opposing sentiment in the finding texts
//!
//! Every rule requires an entity overlap, so findings about different
//! subjects never contradict each other regardless of their numbers.

use tracing::debug;
use verity_core::config::EngineConfig;
use verity_core::constants::{QUANT_DIFF_THRESHOLD_PCT, QUANT_HIGH_SEVERITY_PCT};
use verity_core::errors::DetectorError;
use verity_core::types::{Contradiction, ContradictionType, Finding, MetricKey, Severity};

use super::numeric::{percent_difference, NumberParser};
use super::sentiment::SentimentLexicon;

/// Contradiction detector with compiled matcher state.
///
/// Construction compiles the numeric regex and both sentiment lexicons once;
/// detection over a finding set is then allocation-light per pair.
pub struct ContradictionDetector {
    parser: NumberParser,
    lexicon: SentimentLexicon,
    check_quantitative: bool,
    check_temporal: bool,
    check_interpretive: bool,
}

impl ContradictionDetector {
    /// Build a detector with all three rules enabled.
    pub fn new() -> Result<Self, DetectorError> {
        Self::with_config(&EngineConfig::default())
    }

    /// Build a detector honoring the config's per-rule toggles.
    pub fn with_config(config: &EngineConfig) -> Result<Self, DetectorError> {
        let parser = NumberParser::new().map_err(|e| DetectorError::MatcherBuild {
            matcher: "numeric".to_string(),
            message: e.to_string(),
        })?;
        let lexicon = SentimentLexicon::new().map_err(|e| DetectorError::MatcherBuild {
            matcher: "sentiment".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            parser,
            lexicon,
            check_quantitative: config.effective_detect_quantitative(),
            check_temporal: config.effective_detect_temporal(),
            check_interpretive: config.effective_detect_interpretive(),
        })
    }

    /// Compare all finding pairs and collect contradictions.
    ///
    /// Fewer than two findings trivially yields none. Pair order follows
    /// input order (i < j), so output is deterministic for a given input.
    pub fn detect(&self, findings: &[Finding]) -> Vec<Contradiction> {
        if findings.len() < 2 {
            return Vec::new();
        }

        let mut contradictions = Vec::new();
        for (i, a) in findings.iter().enumerate() {
            for b in &findings[i + 1..] {
                if let Some(contradiction) = self.check_pair(a, b) {
                    contradictions.push(contradiction);
                }
            }
        }

        debug!(
            findings = findings.len(),
            contradictions = contradictions.len(),
            "contradiction detection complete"
        );
        contradictions
    }

    /// First matching rule for a pair, or `None`.
    fn check_pair(&self, a: &Finding, b: &Finding) -> Option<Contradiction> {
        if self.check_quantitative {
            if let Some((description, severity)) = self.quantitative_conflict(a, b) {
                return Some(self.build(
                    a,
                    b,
                    ContradictionType::Quantitative,
                    description,
                    severity,
                    "Check source dates and methodologies. The difference may be due to \
                     different time periods or measurement criteria."
                        .to_string(),
                ));
            }
        }

        if self.check_temporal {
            if let Some(description) = self.temporal_conflict(a, b) {
                return Some(self.build(
                    a,
                    b,
                    ContradictionType::Temporal,
                    description,
                    Severity::Medium,
                    "The sources may be referring to different events or updates. Check context."
                        .to_string(),
                ));
            }
        }

        if self.check_interpretive {
            if let Some(description) = self.interpretive_conflict(a, b) {
                return Some(self.build(
                    a,
                    b,
                    ContradictionType::Interpretive,
                    description,
                    Severity::Medium,
                    "Consider both perspectives. The truth may depend on timeframe, market \
                     segment, or use case."
                        .to_string(),
                ));
            }
        }

        None
    }

    fn build(
        &self,
        a: &Finding,
        b: &Finding,
        contradiction_type: ContradictionType,
        description: String,
        severity: Severity,
        resolution_hint: String,
    ) -> Contradiction {
        Contradiction {
            finding_a_id: a.finding_id.clone(),
            finding_a_summary: a.display_summary(),
            finding_b_id: b.finding_id.clone(),
            finding_b_summary: b.display_summary(),
            contradiction_type,
            description,
            severity,
            resolution_hint,
        }
    }

    /// Conflicting numbers for the same metric and entity.
    ///
    /// The first metric key where both findings carry a parseable value and
    /// the difference clears the threshold wins. Unparseable values skip the
    /// key rather than failing.
    fn quantitative_conflict(&self, a: &Finding, b: &Finding) -> Option<(String, Severity)> {
        let data_a = a.extracted_data.as_ref()?;
        let data_b = b.extracted_data.as_ref()?;

        for key in MetricKey::ALL {
            let (val_a, val_b) = match (data_a.metric(key), data_b.metric(key)) {
                (Some(va), Some(vb)) => (va, vb),
                _ => continue,
            };
            let (num_a, num_b) = match (self.parser.parse(val_a), self.parser.parse(val_b)) {
                (Some(na), Some(nb)) => (na, nb),
                _ => continue,
            };

            let (entity_a, entity_b) = match (data_a.entity(), data_b.entity()) {
                (Some(ea), Some(eb)) => (ea, eb),
                _ => continue,
            };
            if !entity_a.eq_ignore_ascii_case(entity_b) {
                continue;
            }

            let pct_diff = percent_difference(num_a, num_b);
            if pct_diff > QUANT_DIFF_THRESHOLD_PCT {
                let severity = if pct_diff > QUANT_HIGH_SEVERITY_PCT {
                    Severity::High
                } else {
                    Severity::Medium
                };
                return Some((
                    format!(
                        "Conflicting {} for {}: {} vs {} ({:.0}% difference)",
                        key.name(),
                        entity_a,
                        val_a,
                        val_b,
                        pct_diff
                    ),
                    severity,
                ));
            }
        }

        None
    }

    /// Conflicting dates for the same event. Requires matching finding types
    /// and entities; any literal date difference counts.
    fn temporal_conflict(&self, a: &Finding, b: &Finding) -> Option<String> {
        let date_a = a.referenced_date()?;
        let date_b = b.referenced_date()?;

        if a.finding_type != b.finding_type {
            return None;
        }

        let entity_a = a.extracted_data.as_ref()?.entity_company_first()?;
        let entity_b = b.extracted_data.as_ref()?.entity_company_first()?;
        if !entity_a.eq_ignore_ascii_case(entity_b) {
            return None;
        }

        if date_a != date_b {
            return Some(format!(
                "Conflicting dates for {}: {} vs {}",
                entity_a, date_a, date_b
            ));
        }
        None
    }

    /// Opposing sentiment on the same topic. Product-only findings have no
    /// topic entity here, so they never trigger this rule.
    fn interpretive_conflict(&self, a: &Finding, b: &Finding) -> Option<String> {
        let entity_a = a.extracted_data.as_ref()?.topic_entity()?;
        let entity_b = b.extracted_data.as_ref()?.topic_entity()?;
        if !entity_a.eq_ignore_ascii_case(entity_b) {
            return None;
        }

        if self.lexicon.opposed(&a.content, &b.content) {
            return Some(format!(
                "Conflicting assessments of {}: one source is optimistic, another pessimistic",
                entity_a
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_core::types::ExtractedData;

    fn finding(id: &str, content: &str, data: ExtractedData) -> Finding {
        Finding {
            finding_id: id.to_string(),
            finding_type: "market".to_string(),
            content: content.to_string(),
            confidence_score: 0.7,
            extracted_data: Some(data),
            ..Default::default()
        }
    }

    fn metric_data(technology: &str, adoption_rate: &str) -> ExtractedData {
        ExtractedData {
            technology: Some(technology.to_string()),
            adoption_rate: Some(adoption_rate.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_quantitative_conflict_high_severity() {
        let detector = ContradictionDetector::new().unwrap();
        let findings = vec![
            finding("f1", "adoption reported", metric_data("WidgetAI", "40%")),
            finding("f2", "adoption reported", metric_data("WidgetAI", "77%")),
        ];
        let contradictions = detector.detect(&findings);
        assert_eq!(contradictions.len(), 1);
        let c = &contradictions[0];
        assert_eq!(c.contradiction_type, ContradictionType::Quantitative);
        // 40 vs 77 is ~63% apart
        assert_eq!(c.severity, Severity::High);
        assert!(c.description.contains("adoption_rate"));
        assert!(c.description.contains("WidgetAI"));
        assert!(c.description.contains("63% difference"));
    }

    #[test]
    fn test_quantitative_medium_severity() {
        let detector = ContradictionDetector::new().unwrap();
        // 50 vs 70: diff 20, avg 60 -> ~33%, over 30 but under 50
        let findings = vec![
            finding("f1", "x", metric_data("WidgetAI", "50%")),
            finding("f2", "x", metric_data("WidgetAI", "70%")),
        ];
        let contradictions = detector.detect(&findings);
        assert_eq!(contradictions.len(), 1);
        assert_eq!(contradictions[0].severity, Severity::Medium);
    }

    #[test]
    fn test_close_values_no_conflict() {
        let detector = ContradictionDetector::new().unwrap();
        let findings = vec![
            finding("f1", "x", metric_data("WidgetAI", "50%")),
            finding("f2", "x", metric_data("WidgetAI", "55%")),
        ];
        assert!(detector.detect(&findings).is_empty());
    }

    #[test]
    fn test_different_entities_no_conflict() {
        let detector = ContradictionDetector::new().unwrap();
        let findings = vec![
            finding("f1", "strong growth ahead", metric_data("WidgetAI", "40%")),
            finding("f2", "sharp decline underway", metric_data("GadgetML", "77%")),
        ];
        assert!(detector.detect(&findings).is_empty());
    }

    #[test]
    fn test_entity_match_is_case_insensitive() {
        let detector = ContradictionDetector::new().unwrap();
        let findings = vec![
            finding("f1", "x", metric_data("widgetai", "40%")),
            finding("f2", "x", metric_data("WidgetAI", "77%")),
        ];
        assert_eq!(detector.detect(&findings).len(), 1);
    }

    #[test]
    fn test_temporal_conflict() {
        let detector = ContradictionDetector::new().unwrap();
        let data = |date: &str| ExtractedData {
            company: Some("Widget Corp".to_string()),
            event_date: Some(date.to_string()),
            ..Default::default()
        };
        let findings = vec![
            finding("f1", "the launch", data("2023")),
            finding("f2", "the launch", data("2024")),
        ];
        let contradictions = detector.detect(&findings);
        assert_eq!(contradictions.len(), 1);
        let c = &contradictions[0];
        assert_eq!(c.contradiction_type, ContradictionType::Temporal);
        assert_eq!(c.severity, Severity::Medium);
        assert_eq!(
            c.description,
            "Conflicting dates for Widget Corp: 2023 vs 2024"
        );
    }

    #[test]
    fn test_temporal_requires_same_finding_type() {
        let detector = ContradictionDetector::new().unwrap();
        let data = |date: &str| ExtractedData {
            company: Some("Widget Corp".to_string()),
            event_date: Some(date.to_string()),
            ..Default::default()
        };
        let mut a = finding("f1", "the launch", data("2023"));
        let mut b = finding("f2", "the launch", data("2024"));
        a.finding_type = "event".to_string();
        b.finding_type = "market".to_string();
        assert!(detector.detect(&[a, b]).is_empty());
    }

    #[test]
    fn test_interpretive_conflict() {
        let detector = ContradictionDetector::new().unwrap();
        let data = || ExtractedData {
            technology: Some("WidgetAI".to_string()),
            ..Default::default()
        };
        let findings = vec![
            finding("f1", "WidgetAI shows strong growth and a surge in demand", data()),
            finding("f2", "WidgetAI adoption is in decline with weak results", data()),
        ];
        let contradictions = detector.detect(&findings);
        assert_eq!(contradictions.len(), 1);
        let c = &contradictions[0];
        assert_eq!(c.contradiction_type, ContradictionType::Interpretive);
        assert_eq!(
            c.description,
            "Conflicting assessments of WidgetAI: one source is optimistic, another pessimistic"
        );
    }

    #[test]
    fn test_interpretive_ignores_product_only_entity() {
        let detector = ContradictionDetector::new().unwrap();
        let data = || ExtractedData {
            product: Some("Widget Pro".to_string()),
            ..Default::default()
        };
        let findings = vec![
            finding("f1", "strong growth and surge", data()),
            finding("f2", "sharp decline, very weak", data()),
        ];
        assert!(detector.detect(&findings).is_empty());
    }

    #[test]
    fn test_first_rule_wins_per_pair() {
        // Both a quantitative and an interpretive conflict exist; only the
        // quantitative one is reported.
        let detector = ContradictionDetector::new().unwrap();
        let findings = vec![
            finding("f1", "strong growth and surge", metric_data("WidgetAI", "40%")),
            finding("f2", "sharp decline, very weak", metric_data("WidgetAI", "77%")),
        ];
        let contradictions = detector.detect(&findings);
        assert_eq!(contradictions.len(), 1);
        assert_eq!(
            contradictions[0].contradiction_type,
            ContradictionType::Quantitative
        );
    }

    #[test]
    fn test_fewer_than_two_findings() {
        let detector = ContradictionDetector::new().unwrap();
        assert!(detector.detect(&[]).is_empty());
        let one = vec![finding("f1", "x", metric_data("WidgetAI", "40%"))];
        assert!(detector.detect(&one).is_empty());
    }

    #[test]
    fn test_config_disables_rules() {
        let config = EngineConfig {
            detect_quantitative: Some(false),
            ..Default::default()
        };
        let detector = ContradictionDetector::with_config(&config).unwrap();
        let findings = vec![
            finding("f1", "plain report", metric_data("WidgetAI", "40%")),
            finding("f2", "plain report", metric_data("WidgetAI", "77%")),
        ];
        assert!(detector.detect(&findings).is_empty());
    }

    #[test]
    fn test_unparsable_metric_skipped() {
        let detector = ContradictionDetector::new().unwrap();
        let findings = vec![
            finding("f1", "x", metric_data("WidgetAI", "unknown")),
            finding("f2", "x", metric_data("WidgetAI", "77%")),
        ];
        assert!(detector.detect(&findings).is_empty());
    }

    #[test]
    fn test_suffix_normalization_across_pair() {
        // $1.8M vs $1,800,000 are the same number after normalization.
        let detector = ContradictionDetector::new().unwrap();
        let data = |v: &str| ExtractedData {
            company: Some("Widget Corp".to_string()),
            revenue: Some(v.to_string()),
            ..Default::default()
        };
        let findings = vec![
            finding("f1", "x", data("$1.8M")),
            finding("f2", "x", data("$1,800,000")),
        ];
        assert!(detector.detect(&findings).is_empty());
    }
}
