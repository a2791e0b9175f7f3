//! Error types for the htmx attribute filter
//!
//! None of these reach callers of `filter`: a failed rewrite degrades to an
//! empty result inside the filter. They surface only from option parsing and
//! from the internal rewrite pass.

/// Failure of the attribute-stripping rewrite pass
#[derive(Debug, thiserror::Error)]
pub enum StripError {
    /// The streaming rewriter gave up on the input
    #[error("HTML rewrite failed: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),
}

/// Malformed option payload handed over by the host
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// Payload is not valid JSON
    #[error("Invalid filter options JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload is valid JSON but not an object of option names
    #[error("Filter options must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}
