//! Product name, star rating, and rating count.

use dealpage_core::FieldValue;
use scraper::Html;

use super::non_empty;
use crate::extract::dom::{compact_text, first, first_within};

/// Single strategy: the well-known product-title node.
pub(crate) fn product_name(doc: &Html) -> FieldValue {
    let name = first(doc, "#productTitle").map(compact_text).and_then(non_empty);
    FieldValue::from_text(name)
}

/// Strategy 1: the rating indicator carrying the average-star-rating data
/// marker. Strategy 2: the first rating indicator nested in the first
/// declarative wrapper.
pub(crate) fn rating(doc: &Html) -> FieldValue {
    let value = first(doc, r#"i[data-hook="average-star-rating"]"#)
        .map(compact_text)
        .and_then(non_empty)
        .or_else(|| {
            let wrapper = first(doc, "span.a-declarative")?;
            let indicator = first_within(wrapper, "i")?;
            non_empty(compact_text(indicator))
        });
    FieldValue::from_text(value)
}

/// Single strategy: the customer-review-count node.
pub(crate) fn number_of_ratings(doc: &Html) -> FieldValue {
    let count = first(doc, "#acrCustomerReviewText")
        .map(compact_text)
        .and_then(non_empty);
    FieldValue::from_text(count)
}
