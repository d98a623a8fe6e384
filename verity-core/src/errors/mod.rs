//! Error types for the Verity engine.
//!
//! The engine itself is total for well-formed input: confidence calculation
//! and contradiction detection never fail. Errors exist only at the
//! boundaries (configuration loading, matcher compilation).

mod config_error;
mod detector_error;

pub use config_error::ConfigError;
pub use detector_error::DetectorError;
