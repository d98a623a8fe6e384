//! Corroboration-aware combination of per-source credibilities.
//!
//! Log-odds is the additive space for independent evidence; a weighted mean
//! there gives earlier (more relevant) sources more influence, and the
//! multiplicative bonus rewards corroboration with strictly diminishing
//! returns per additional agreeing source.

use verity_core::constants::{
    CONFIDENCE_CEILING, CORROBORATION_BONUS, ODDS_CEILING, ODDS_FLOOR,
};

/// Combine multiple source credibility probabilities into one.
///
/// Empty input is neutral (0.5); a single value passes through unchanged.
/// Otherwise: clamp each to [0.01, 0.99], convert to log-odds, average with
/// weights 1/(position+1), convert back, apply ×1.05 at 3+ sources and again
/// at 5+, cap at 0.95.
pub fn combine_credibilities(credibilities: &[f64]) -> f64 {
    match credibilities {
        [] => 0.5,
        [single] => *single,
        _ => {
            let mut weighted_sum = 0.0;
            let mut total_weight = 0.0;
            for (i, &p) in credibilities.iter().enumerate() {
                let p = p.clamp(ODDS_FLOOR, ODDS_CEILING);
                let log_odds = (p / (1.0 - p)).ln();
                let weight = 1.0 / (i as f64 + 1.0);
                weighted_sum += log_odds * weight;
                total_weight += weight;
            }
            let mean_log_odds = weighted_sum / total_weight;

            // Logistic back to probability
            let mut combined = 1.0 / (1.0 + (-mean_log_odds).exp());

            if credibilities.len() >= 3 {
                combined *= CORROBORATION_BONUS;
            }
            if credibilities.len() >= 5 {
                combined *= CORROBORATION_BONUS;
            }

            combined.min(CONFIDENCE_CEILING)
        }
    }
}
