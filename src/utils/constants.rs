//! Shared constants for the htmx attribute filter
//!
//! Default values used across the filter and its builder so the prefix and
//! option names live in one place.

/// Attribute prefix stripped by default: `hx-`
///
/// htmx encodes its behavior (`hx-get`, `hx-post`, `hx-target`, `hx-swap`, ...)
/// in attributes carrying this prefix. The match is anchored at the start of
/// the attribute name, so `data-hx-get` is left alone.
pub const DEFAULT_ATTRIBUTE_PREFIX: &str = "hx-";

/// Option key that skips filtering for content that must not be cleaned.
pub const NOCLEAN_OPTION: &str = "noclean";

/// Option key that skips filtering for content already marked as trusted.
pub const TRUSTED_OPTION: &str = "trusted";
