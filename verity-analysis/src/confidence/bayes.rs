//! Odds-space Bayesian update primitive.
//!
//! The sole mechanism by which verification evidence moves a confidence
//! value. Never addition or subtraction: evidence multiplies odds.

use verity_core::constants::{CONFIDENCE_CEILING, CONFIDENCE_FLOOR, ODDS_CEILING, ODDS_FLOOR};

/// Apply a likelihood ratio to a prior probability via odds-space arithmetic.
///
/// `posterior_odds = likelihood_ratio * prior_odds`
///
/// A ratio of exactly 1.0 is a no-op (up to the output clamp); ratios above 1
/// strengthen belief, below 1 weaken it. The prior is clamped to
/// [0.01, 0.99] before the odds conversion, and the result to [0.10, 0.95].
pub fn odds_update(prior: f64, likelihood_ratio: f64) -> f64 {
    let prior = prior.clamp(ODDS_FLOOR, ODDS_CEILING);

    let prior_odds = prior / (1.0 - prior);
    let posterior_odds = likelihood_ratio * prior_odds;
    let posterior = posterior_odds / (1.0 + posterior_odds);

    posterior.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}
