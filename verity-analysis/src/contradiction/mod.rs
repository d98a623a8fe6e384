//! Contradiction detection: pairwise conflict checks over a finding set.

pub mod detector;
pub mod numeric;
pub mod sentiment;

pub use detector::ContradictionDetector;
pub use numeric::NumberParser;
pub use sentiment::SentimentLexicon;
