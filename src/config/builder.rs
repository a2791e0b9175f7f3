//! Builder for `HtmxFilter`
//!
//! The only knob is the attribute prefix. It is validated once here so the
//! filtering hot path never has to.

use anyhow::{Result, bail};

use crate::filter::HtmxFilter;
use crate::utils::DEFAULT_ATTRIBUTE_PREFIX;

/// Characters that terminate or are illegal inside an HTML attribute name
const FORBIDDEN_PREFIX_CHARS: &[char] = &['"', '\'', '>', '/', '=', '\0'];

/// Fluent builder for `HtmxFilter`, defaulting to the `hx-` prefix
pub struct HtmxFilterBuilder {
    pub(crate) attribute_prefix: String,
}

impl Default for HtmxFilterBuilder {
    fn default() -> Self {
        Self {
            attribute_prefix: DEFAULT_ATTRIBUTE_PREFIX.to_string(),
        }
    }
}

impl HtmxFilterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute name prefix to strip (default `hx-`)
    #[must_use]
    pub fn attribute_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.attribute_prefix = prefix.into();
        self
    }

    /// Validate the configuration and build the filter
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is empty, contains whitespace or a
    /// character that cannot appear in an attribute name, or contains an ASCII
    /// uppercase letter. Parsers lowercase attribute names, so an uppercase
    /// prefix would never match anything.
    pub fn build(self) -> Result<HtmxFilter> {
        let prefix = self.attribute_prefix;

        if prefix.is_empty() {
            bail!("Attribute prefix must not be empty");
        }
        if let Some(c) = prefix
            .chars()
            .find(|c| c.is_ascii_whitespace() || FORBIDDEN_PREFIX_CHARS.contains(c))
        {
            bail!("Attribute prefix '{prefix}' contains invalid character {c:?}");
        }
        if prefix.chars().any(|c| c.is_ascii_uppercase()) {
            bail!("Attribute prefix '{prefix}' must be lowercase to match parsed attribute names");
        }

        Ok(HtmxFilter::from_prefix(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix_is_hx() {
        let filter = HtmxFilterBuilder::new().build().expect("default config is valid");
        assert_eq!(filter.attribute_prefix(), "hx-");
    }

    #[test]
    fn test_custom_prefix() {
        let filter = HtmxFilterBuilder::new()
            .attribute_prefix("x-on")
            .build()
            .expect("lowercase prefix is valid");
        assert_eq!(filter.attribute_prefix(), "x-on");
    }

    #[test]
    fn test_rejects_invalid_prefixes() {
        for bad in ["", "hx -", "hx=", "hx/", "HX-", "\"hx", "hx>"] {
            let result = HtmxFilterBuilder::new().attribute_prefix(bad).build();
            assert!(result.is_err(), "prefix {bad:?} should be rejected");
        }
    }

    #[test]
    fn test_error_message_names_prefix() {
        let err = HtmxFilterBuilder::new()
            .attribute_prefix("Hx-")
            .build()
            .expect_err("uppercase prefix is rejected");
        assert!(err.to_string().contains("Hx-"));
    }
}
