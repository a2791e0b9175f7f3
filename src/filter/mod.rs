//! The htmx attribute filter
//!
//! `HtmxFilter` strips htmx `hx-*` attributes from an HTML fragment before the
//! host renders it. The flow for a single call is:
//!
//! 1. bypass flags in [`FilterOptions`] return the text untouched
//! 2. empty and numeric text is returned untouched
//! 3. everything else goes through a lenient rewrite that removes every
//!    attribute starting with the configured prefix
//!
//! The filter never fails. A rewrite failure is logged and yields an empty
//! string, which keeps unfiltered attributes out of the page.

pub mod attribute_stripper;
pub mod passthrough;

use std::borrow::Cow;

use crate::config::{FilterOptions, HtmxFilterBuilder};
use crate::utils::DEFAULT_ATTRIBUTE_PREFIX;

pub use attribute_stripper::strip_prefixed_attributes;
pub use passthrough::{is_numeric, is_passthrough_text};

/// A text filter the host can run over formatted content
pub trait TextFilter: Send + Sync {
    /// Filter `text`, borrowing it back when nothing needed to change
    fn filter<'a>(&self, text: &'a str, options: &FilterOptions) -> Cow<'a, str>;
}

/// Strips attributes with a fixed name prefix from HTML fragments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmxFilter {
    attribute_prefix: String,
}

impl Default for HtmxFilter {
    fn default() -> Self {
        Self::from_prefix(DEFAULT_ATTRIBUTE_PREFIX.to_string())
    }
}

impl HtmxFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> HtmxFilterBuilder {
        HtmxFilterBuilder::new()
    }

    /// Prefix must already be validated by the builder
    pub(crate) fn from_prefix(attribute_prefix: String) -> Self {
        Self { attribute_prefix }
    }

    #[must_use]
    pub fn attribute_prefix(&self) -> &str {
        &self.attribute_prefix
    }

    /// Filter `text` according to `options`
    ///
    /// Returns the input borrowed when it was bypassed or needed no parsing,
    /// and an owned rewrite otherwise.
    #[must_use]
    pub fn filter<'a>(&self, text: &'a str, options: &FilterOptions) -> Cow<'a, str> {
        if options.bypasses_filtering() {
            log::trace!(
                "Bypassing htmx filter (noclean={}, trusted={})",
                options.noclean,
                options.trusted
            );
            return Cow::Borrowed(text);
        }

        if is_passthrough_text(text) {
            return Cow::Borrowed(text);
        }

        match strip_prefixed_attributes(text, &self.attribute_prefix) {
            Ok(filtered) => {
                log::debug!(
                    "Filtered {} bytes of HTML into {} bytes",
                    text.len(),
                    filtered.len()
                );
                Cow::Owned(filtered)
            }
            Err(e) => {
                log::warn!("Dropping content that could not be filtered: {e}");
                Cow::Owned(String::new())
            }
        }
    }
}

impl TextFilter for HtmxFilter {
    fn filter<'a>(&self, text: &'a str, options: &FilterOptions) -> Cow<'a, str> {
        HtmxFilter::filter(self, text, options)
    }
}
