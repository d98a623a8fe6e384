//! Findings: claims extracted from research, with confidence metadata.

use serde::{Deserialize, Serialize};

use super::evidence::ConfidenceExplanation;
use super::extracted::ExtractedData;

/// When the claim in a finding holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemporalContext {
    Past,
    #[default]
    Present,
    Ongoing,
    Prediction,
}

/// Reference from a finding to a source in the retrieval pool.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SourceRef {
    pub url: String,
    pub title: Option<String>,
}

/// An extracted finding.
///
/// Everything up to `date_range` comes from the extraction stage and is never
/// mutated by the engine. The engine only fills the three `adjusted_*` /
/// `confidence_*` fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Finding {
    pub finding_id: String,
    /// Open-ended tag (fact, event, actor, relationship, financial, ...).
    /// Templates define their own vocabularies, so this stays a string.
    pub finding_type: String,
    pub content: String,
    pub summary: Option<String>,
    /// Self-reported prior confidence from extraction, in [0, 1].
    pub confidence_score: f64,
    pub temporal_context: TemporalContext,
    pub extracted_data: Option<ExtractedData>,
    pub supporting_sources: Vec<SourceRef>,
    /// Specific date the claim refers to (e.g. "2024-12-15", "December 2024").
    pub date_referenced: Option<String>,
    /// Date range (e.g. "Q4 2024", "2024-2025").
    pub date_range: Option<String>,

    // Engine output. Always None on extraction output.
    pub adjusted_confidence: Option<f64>,
    pub confidence_explanation: Option<ConfidenceExplanation>,
    pub confidence_narrative: Option<String>,
}

impl Finding {
    /// The summary if present, else the first 100 content characters
    /// (used when naming this finding in contradiction records).
    pub fn display_summary(&self) -> String {
        match &self.summary {
            Some(s) if !s.is_empty() => s.clone(),
            _ => self.content.chars().take(100).collect(),
        }
    }

    /// The date this finding refers to: `date_referenced`, falling back to
    /// the extracted `event_date`. Empty strings fall through.
    pub fn referenced_date(&self) -> Option<&str> {
        self.date_referenced
            .as_deref()
            .filter(|d| !d.is_empty())
            .or_else(|| {
                self.extracted_data
                    .as_ref()
                    .and_then(|d| d.event_date.as_deref())
                    .filter(|d| !d.is_empty())
            })
    }
}
