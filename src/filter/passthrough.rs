//! Fast-path checks for text that never needs parsing
//!
//! The host runs every filter over all formatted strings, including empty
//! fields and bare numbers. Parsing those as HTML would only risk mangling
//! them, so they are returned untouched.

use regex::Regex;
use std::sync::LazyLock;

/// Numeric string: optional surrounding whitespace, optional sign, decimal
/// mantissa (`1`, `1.`, `.5`, `1.5`) and optional exponent.
static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$")
        .expect("NUMERIC_RE: hardcoded regex is valid")
});

/// True when `text` is a number written out as a string
#[must_use]
pub fn is_numeric(text: &str) -> bool {
    NUMERIC_RE.is_match(text)
}

/// True when `text` can be returned without parsing
#[must_use]
pub fn is_passthrough_text(text: &str) -> bool {
    text.is_empty() || is_numeric(text)
}
