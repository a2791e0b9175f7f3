//! Streaming removal of prefixed attributes
//!
//! The fragment goes through `lol_html` in non-strict mode: the tokenizer
//! recovers from broken markup instead of bailing out, and nothing outside the
//! removed attributes is re-serialized, so text, comments and other attributes
//! come out byte-for-byte.
//!
//! `lol_html` tokenizes `<noscript>` content as raw text. That text is
//! collected and run through the same pass, so elements inside `<noscript>`
//! lose their prefixed attributes too.

use lol_html::html_content::ContentType;
use lol_html::{RewriteStrSettings, element, rewrite_str, text};

use crate::error::StripError;

/// Remove every attribute whose name starts with `prefix` from every element
///
/// Elements are visited in document order at every nesting depth. For each
/// element the matching names are gathered first and removed afterwards, since
/// the attribute slice is borrowed while it is being scanned.
///
/// # Errors
///
/// Returns `StripError::Rewrite` if the rewriter aborts. Non-strict parsing
/// means malformed markup alone does not trigger this.
pub fn strip_prefixed_attributes(html: &str, prefix: &str) -> Result<String, StripError> {
    let mut elements_touched = 0usize;
    let mut attributes_removed = 0usize;
    let mut noscript_markup = String::new();

    let output = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("*", |el| {
                    let matching: Vec<String> = el
                        .attributes()
                        .iter()
                        .map(|attr| attr.name())
                        .filter(|name| name.starts_with(prefix))
                        .collect();

                    if matching.is_empty() {
                        return Ok(());
                    }

                    for name in &matching {
                        el.remove_attribute(name);
                    }
                    elements_touched += 1;
                    attributes_removed += matching.len();
                    Ok(())
                }),
                text!("noscript", |chunk| {
                    noscript_markup.push_str(chunk.as_str());
                    if !chunk.last_in_text_node() {
                        chunk.remove();
                        return Ok(());
                    }

                    let markup = std::mem::take(&mut noscript_markup);
                    if !markup.is_empty() {
                        let stripped = strip_prefixed_attributes(&markup, prefix)?;
                        chunk.replace(&stripped, ContentType::Html);
                    }
                    Ok(())
                }),
            ],
            strict: false,
            ..RewriteStrSettings::new()
        },
    )?;

    log::trace!(
        "Removed {attributes_removed} '{prefix}' attributes from {elements_touched} elements"
    );

    Ok(output)
}
