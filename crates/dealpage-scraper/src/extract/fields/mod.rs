//! Per-field strategy chains.
//!
//! Each field is one function over the parsed document. A chain is an
//! ordered sequence of `Option`-returning strategies combined with
//! `or_else`: the first strategy producing a non-empty value wins, and a
//! chain where every strategy misses yields `FieldValue::Absent`. A
//! strategy can never fail the extraction call; at worst it returns `None`.

mod images;
mod offers;
mod pricing;
mod reviews;
mod title;

pub(crate) use images::{amazon_product_images, manufacturer_images};
pub(crate) use offers::{about_this_item, bank_offers, product_information};
pub(crate) use pricing::{selling_price, total_discount};
pub(crate) use reviews::review_text;
pub(crate) use title::{number_of_ratings, product_name, rating};

#[cfg(test)]
use dealpage_core::FieldValue;

/// Empty-after-trim strategy results count as misses so the chain can fall
/// through to the next strategy.
fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
