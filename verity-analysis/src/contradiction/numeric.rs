//! Numeric extraction from metric strings.
//!
//! Metric values arrive as free-form strings ("77%", "$1.8M", "1,000").
//! Unparsable values are "no match", never errors.

use regex::Regex;

/// Parser for metric strings. Holds the compiled digit-run regex.
#[derive(Debug, Clone)]
pub struct NumberParser {
    digit_run: Regex,
}

impl NumberParser {
    /// Compile the parser. The pattern is static, so failure means a broken
    /// build of the regex crate.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            // First run of digits and dots anywhere in the string
            digit_run: Regex::new(r"[\d.]+")?,
        })
    }

    /// Extract a number from text like "77%", "$1.8M", or "1,000".
    ///
    /// Strips commas, currency symbols, and percent signs; expands K/M/B
    /// suffixes; falls back to the first digit run. Returns `None` when no
    /// number can be extracted.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let cleaned: String = text
            .chars()
            .filter(|c| !matches!(c, ',' | '$' | '%'))
            .collect();
        let cleaned = cleaned.trim();

        for (suffix, multiplier) in [('m', 1_000_000.0), ('b', 1_000_000_000.0), ('k', 1_000.0)] {
            let stem = cleaned
                .strip_suffix(suffix)
                .or_else(|| cleaned.strip_suffix(suffix.to_ascii_uppercase()));
            if let Some(stem) = stem {
                if let Ok(value) = stem.trim().parse::<f64>() {
                    return Some(value * multiplier);
                }
            }
        }

        self.digit_run
            .find(cleaned)
            .and_then(|m| m.as_str().parse::<f64>().ok())
    }
}

/// Relative difference between two values as a percent of their average.
///
/// A non-positive sum falls back to an average of 1 (division guard from the
/// original calibration).
pub fn percent_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    let avg = if a + b > 0.0 { (a + b) / 2.0 } else { 1.0 };
    (diff / avg) * 100.0
}
