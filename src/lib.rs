//! Content filter that strips htmx `hx-*` attributes from HTML fragments.
//!
//! ```
//! use htmx_filter::{FilterOptions, filter};
//!
//! let html = r#"<div hx-get="/load" class="box">Hi</div>"#;
//! assert_eq!(filter(html, &FilterOptions::default()), r#"<div class="box">Hi</div>"#);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod utils;

use std::borrow::Cow;
use std::sync::LazyLock;

pub use config::{FilterOptions, HtmxFilterBuilder};
pub use error::{OptionsError, StripError};
pub use filter::{HtmxFilter, TextFilter};
pub use utils::DEFAULT_ATTRIBUTE_PREFIX;

static DEFAULT_FILTER: LazyLock<HtmxFilter> = LazyLock::new(HtmxFilter::default);

/// Strip `hx-*` attributes from `text` with the default filter
#[must_use]
pub fn filter<'a>(text: &'a str, options: &FilterOptions) -> Cow<'a, str> {
    DEFAULT_FILTER.filter(text, options)
}
