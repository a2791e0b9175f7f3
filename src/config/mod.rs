//! Configuration for the htmx attribute filter
//!
//! `FilterOptions` carries the per-call bypass flags handed over by the host;
//! `HtmxFilterBuilder` configures a reusable `HtmxFilter`.

pub mod builder;
pub mod types;

pub use builder::HtmxFilterBuilder;
pub use types::{FilterOptions, is_truthy};
