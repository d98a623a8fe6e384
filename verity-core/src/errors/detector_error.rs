//! Errors from building the detector's compiled matcher state.

/// Errors that can occur while compiling detector matchers.
#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("Failed to compile {matcher} matcher: {message}")]
    MatcherBuild { matcher: String, message: String },
}
