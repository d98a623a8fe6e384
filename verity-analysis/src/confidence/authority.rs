//! Domain authority priors.
//!
//! Static lookup of known domains and TLDs to a baseline trust probability,
//! applied before any content signals are considered.

use verity_core::constants::DEFAULT_DOMAIN_PRIOR;

/// Known-domain priors. TLD entries ("gov", "edu", "mil") double as suffix
/// rules for any domain under them.
pub const DOMAIN_AUTHORITY_PRIORS: [(&str, f64); 24] = [
    // Highest authority: government and academic
    ("gov", 0.95),
    ("edu", 0.92),
    ("mil", 0.93),
    // Major wire services and papers of record
    ("reuters.com", 0.90),
    ("apnews.com", 0.90),
    ("bbc.com", 0.88),
    ("nytimes.com", 0.87),
    ("wsj.com", 0.88),
    ("ft.com", 0.87),
    ("bloomberg.com", 0.86),
    ("sec.gov", 0.95),
    // Quality publications
    ("forbes.com", 0.75),
    ("businessinsider.com", 0.70),
    ("cnbc.com", 0.72),
    ("marketwatch.com", 0.70),
    ("washingtonpost.com", 0.80),
    ("economist.com", 0.85),
    ("nature.com", 0.92),
    ("sciencedirect.com", 0.88),
    // Tech-focused
    ("github.com", 0.75),
    ("stackoverflow.com", 0.70),
    ("arxiv.org", 0.85),
    ("acm.org", 0.88),
    ("ieee.org", 0.88),
];

/// TLDs that carry their own authority regardless of the specific domain.
const AUTHORITATIVE_TLDS: [&str; 3] = ["gov", "edu", "mil"];

/// Resolve the authority prior for a domain.
///
/// Lookup order: exact match → authoritative TLD suffix → substring match
/// against the known-domain table → default 0.50. Returns the prior and the
/// explanation recorded on the evidence node.
pub fn domain_authority(domain: &str) -> (f64, String) {
    let domain_lower = domain.to_lowercase();

    for (known, prior) in DOMAIN_AUTHORITY_PRIORS {
        if domain_lower == known {
            return (prior, format!("Known authoritative domain: {domain}"));
        }
    }

    for tld in AUTHORITATIVE_TLDS {
        if domain_lower.ends_with(&format!(".{tld}")) {
            let prior = lookup(tld).unwrap_or(DEFAULT_DOMAIN_PRIOR);
            return (prior, format!("Authoritative {} domain", tld.to_uppercase()));
        }
    }

    for (known, prior) in DOMAIN_AUTHORITY_PRIORS {
        if domain_lower.contains(known) {
            return (prior, format!("Associated with {known}"));
        }
    }

    (
        DEFAULT_DOMAIN_PRIOR,
        "Unknown domain - using default prior".to_string(),
    )
}

fn lookup(domain: &str) -> Option<f64> {
    DOMAIN_AUTHORITY_PRIORS
        .iter()
        .find(|(known, _)| *known == domain)
        .map(|(_, prior)| *prior)
}
