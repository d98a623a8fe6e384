//! Shared constants for the Verity evidence engine.
//!
//! The numeric values here are heuristic, empirically chosen, and preserved
//! as-is for behavioral parity with the calibration the system shipped with.
//! They are deliberately not exposed through `EngineConfig`.

/// Verity version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Probability bounds ----

/// Lower bound on every probability leaving the engine.
/// The engine never asserts impossibility.
pub const CONFIDENCE_FLOOR: f64 = 0.10;

/// Upper bound on every probability leaving the engine.
/// The engine never asserts certainty.
pub const CONFIDENCE_CEILING: f64 = 0.95;

/// Lower clamp for odds-space arithmetic (avoids log(0) and division by zero).
pub const ODDS_FLOOR: f64 = 0.01;

/// Upper clamp for odds-space arithmetic.
pub const ODDS_CEILING: f64 = 0.99;

// ---- Source credibility ----

/// Prior for domains absent from the authority table.
pub const DEFAULT_DOMAIN_PRIOR: f64 = 0.50;

/// Neutral starting point for the content-signal score.
pub const NEUTRAL_CONTENT_SIGNAL: f64 = 0.5;

/// Content-signal clamp range.
pub const CONTENT_SIGNAL_FLOOR: f64 = 0.1;
pub const CONTENT_SIGNAL_CEILING: f64 = 0.9;

/// At most this many sources contribute to a finding's credibility.
pub const MAX_SOURCES_PER_FINDING: usize = 5;

/// Multiplicative corroboration bonus at 3+ and again at 5+ agreeing sources.
pub const CORROBORATION_BONUS: f64 = 1.05;

/// How much combined source credibility pulls the running confidence
/// (current = (1 - weight) * current + weight * combined).
pub const SOURCE_BLEND_WEIGHT: f64 = 0.4;

// ---- Verification evidence ----

/// Bias scores at or below this threshold are ignored.
pub const BIAS_SCORE_THRESHOLD: f64 = 0.3;

/// Direct multiplicative discount for extraordinary claims, applied outside
/// the odds-update framework.
pub const EXTRAORDINARY_CLAIM_DISCOUNT: f64 = 0.85;

/// Per-contradiction decay on the cross-reference likelihood ratio (0.9^n).
pub const CONTRADICTION_DECAY: f64 = 0.9;

// ---- Explanation ----

/// Maximum entries in each suggestion list of a `ConfidenceExplanation`.
pub const MAX_SUGGESTIONS: usize = 5;

/// Authority prior above which a source counts as high-authority for
/// explanation heuristics.
pub const HIGH_AUTHORITY_THRESHOLD: f64 = 0.8;

// ---- Contradiction detection ----

/// Relative difference (percent) above which two metric values conflict.
pub const QUANT_DIFF_THRESHOLD_PCT: f64 = 30.0;

/// Relative difference (percent) above which a quantitative conflict is
/// high severity rather than medium.
pub const QUANT_HIGH_SEVERITY_PCT: f64 = 50.0;
