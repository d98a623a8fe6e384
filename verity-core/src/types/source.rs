//! Source records from the retrieval stage.

use serde::{Deserialize, Serialize};

/// Where a source came from. Affects content-signal heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Web,
    News,
    Academic,
    Blog,
    Social,
}

impl SourceType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::News => "news",
            Self::Academic => "academic",
            Self::Blog => "blog",
            Self::Social => "social",
        }
    }
}

/// Coarse credibility bucket derived from a credibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredibilityLabel {
    High,
    Medium,
    Low,
}

impl CredibilityLabel {
    /// Bucket a credibility score: ≥0.8 high, ≥0.6 medium, else low.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::High
        } else if score >= 0.6 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A retrieved source backing one or more findings.
///
/// Immutable for the engine's purposes; `url` is the stable key.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Source {
    pub url: String,
    pub domain: String,
    pub title: String,
    pub snippet: String,
    pub source_type: SourceType,
    /// Filled by source enrichment; absent on raw retrieval output.
    pub credibility_score: Option<f64>,
    pub credibility_label: Option<CredibilityLabel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_buckets() {
        assert_eq!(CredibilityLabel::from_score(0.9), CredibilityLabel::High);
        assert_eq!(CredibilityLabel::from_score(0.8), CredibilityLabel::High);
        assert_eq!(CredibilityLabel::from_score(0.7), CredibilityLabel::Medium);
        assert_eq!(CredibilityLabel::from_score(0.6), CredibilityLabel::Medium);
        assert_eq!(CredibilityLabel::from_score(0.59), CredibilityLabel::Low);
    }

    #[test]
    fn test_source_type_deserializes_lowercase() {
        let source: Source = serde_json::from_str(
            r#"{"url": "https://arxiv.org/abs/1", "domain": "arxiv.org", "source_type": "academic"}"#,
        )
        .unwrap();
        assert_eq!(source.source_type, SourceType::Academic);
        assert!(source.credibility_score.is_none());
    }
}
