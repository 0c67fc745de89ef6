//! Customer review text gathering.
//!
//! Only collects the raw concatenated review text; summarization and the
//! truncation degrade live in the engine, next to the summarizer handle.

use scraper::Html;

use crate::extract::dom::{all, spaced_text};

/// Concatenated visible text of every review body on the page, one space
/// between fragments and between reviews. `None` when the page carries no
/// review bodies at all.
pub(crate) fn review_text(doc: &Html) -> Option<String> {
    let reviews: Vec<String> = all(doc, r#"span[data-hook="review-body"]"#)
        .into_iter()
        .map(spaced_text)
        .filter(|text| !text.is_empty())
        .collect();
    if reviews.is_empty() {
        None
    } else {
        Some(reviews.join(" "))
    }
}
