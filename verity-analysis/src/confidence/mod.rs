//! Confidence scoring — domain authority, source credibility, corroboration,
//! odds-space verification updates, and explanation assembly.
//!
//! Dependency chain: Authority → Credibility → Combine → Calculator, with
//! Bayes as the shared update primitive and Explain consuming the chain.

pub mod authority;
pub mod bayes;
pub mod calculator;
pub mod combine;
pub mod credibility;
pub mod explain;
pub mod verification;

pub use authority::domain_authority;
pub use bayes::odds_update;
pub use calculator::{calculate_confidence, calculate_confidence_capped};
pub use combine::combine_credibilities;
pub use credibility::{enrich_source_credibility, estimate_credibility};
pub use explain::{build_explanation, render_narrative};
pub use verification::integrate_verification;
