//! Structured extraction side-data attached to findings.
//!
//! The extraction stage emits a loosely structured map of domain-specific
//! fields. The keys the engine inspects — entity names, metric values, event
//! dates — are explicit optional fields here; everything else flows through
//! the flattened `extra` side-channel untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The fixed vocabulary of numeric metric keys checked for quantitative
/// contradictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    AdoptionRate,
    GrowthPercentage,
    MarketShare,
    Revenue,
    Subscribers,
    Users,
    Amount,
    Value,
    Growth,
    Rate,
    Percentage,
}

impl MetricKey {
    pub const ALL: [MetricKey; 11] = [
        Self::AdoptionRate,
        Self::GrowthPercentage,
        Self::MarketShare,
        Self::Revenue,
        Self::Subscribers,
        Self::Users,
        Self::Amount,
        Self::Value,
        Self::Growth,
        Self::Rate,
        Self::Percentage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AdoptionRate => "adoption_rate",
            Self::GrowthPercentage => "growth_percentage",
            Self::MarketShare => "market_share",
            Self::Revenue => "revenue",
            Self::Subscribers => "subscribers",
            Self::Users => "users",
            Self::Amount => "amount",
            Self::Value => "value",
            Self::Growth => "growth",
            Self::Rate => "rate",
            Self::Percentage => "percentage",
        }
    }
}

/// Extraction side-data for a finding.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractedData {
    // Entity fields. Which one wins depends on the contradiction rule.
    pub technology: Option<String>,
    pub company: Option<String>,
    pub product: Option<String>,

    /// Event date as extracted (free-form string, e.g. "2024" or "Q3 2024").
    pub event_date: Option<String>,

    // Metric values as extracted (free-form strings, e.g. "77%" or "$1.8M").
    pub adoption_rate: Option<String>,
    pub growth_percentage: Option<String>,
    pub market_share: Option<String>,
    pub revenue: Option<String>,
    pub subscribers: Option<String>,
    pub users: Option<String>,
    pub amount: Option<String>,
    pub value: Option<String>,
    pub growth: Option<String>,
    pub rate: Option<String>,
    pub percentage: Option<String>,

    /// Template-specific metadata the engine does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ExtractedData {
    /// The metric value for a key, if present and non-empty.
    pub fn metric(&self, key: MetricKey) -> Option<&str> {
        let value = match key {
            MetricKey::AdoptionRate => &self.adoption_rate,
            MetricKey::GrowthPercentage => &self.growth_percentage,
            MetricKey::MarketShare => &self.market_share,
            MetricKey::Revenue => &self.revenue,
            MetricKey::Subscribers => &self.subscribers,
            MetricKey::Users => &self.users,
            MetricKey::Amount => &self.amount,
            MetricKey::Value => &self.value,
            MetricKey::Growth => &self.growth,
            MetricKey::Rate => &self.rate,
            MetricKey::Percentage => &self.percentage,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Entity with technology → company → product precedence
    /// (quantitative rule). Empty fields fall through to the next.
    pub fn entity(&self) -> Option<&str> {
        nonempty(&self.technology)
            .or_else(|| nonempty(&self.company))
            .or_else(|| nonempty(&self.product))
    }

    /// Entity with technology → company precedence and no product fallback
    /// (interpretive rule).
    pub fn topic_entity(&self) -> Option<&str> {
        nonempty(&self.technology).or_else(|| nonempty(&self.company))
    }

    /// Entity with company → technology → product precedence (temporal rule).
    pub fn entity_company_first(&self) -> Option<&str> {
        nonempty(&self.company)
            .or_else(|| nonempty(&self.technology))
            .or_else(|| nonempty(&self.product))
    }
}

fn nonempty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_key_names_cover_all() {
        assert_eq!(MetricKey::ALL.len(), 11);
        for key in MetricKey::ALL {
            assert!(!key.name().is_empty());
        }
    }

    #[test]
    fn test_entity_precedence() {
        let data = ExtractedData {
            technology: Some("WidgetAI".to_string()),
            company: Some("Widget Corp".to_string()),
            ..Default::default()
        };
        assert_eq!(data.entity(), Some("WidgetAI"));
        assert_eq!(data.entity_company_first(), Some("Widget Corp"));
    }

    #[test]
    fn test_empty_entity_skipped() {
        let data = ExtractedData {
            technology: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(data.entity(), None);
    }

    #[test]
    fn test_empty_field_falls_through_to_next() {
        let data = ExtractedData {
            technology: Some(String::new()),
            company: Some("Widget Corp".to_string()),
            product: Some("Widget Pro".to_string()),
            ..Default::default()
        };
        assert_eq!(data.entity(), Some("Widget Corp"));
        assert_eq!(data.topic_entity(), Some("Widget Corp"));

        let data = ExtractedData {
            technology: Some("WidgetAI".to_string()),
            company: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(data.entity_company_first(), Some("WidgetAI"));
    }

    #[test]
    fn test_unknown_keys_flow_to_extra() {
        let data: ExtractedData = serde_json::from_str(
            r#"{"technology": "WidgetAI", "adoption_rate": "40%", "region": "EMEA"}"#,
        )
        .unwrap();
        assert_eq!(data.metric(MetricKey::AdoptionRate), Some("40%"));
        assert_eq!(data.extra.get("region").and_then(|v| v.as_str()), Some("EMEA"));
    }
}
