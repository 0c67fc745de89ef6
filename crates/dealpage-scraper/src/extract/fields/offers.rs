//! Bank offers, feature bullets, and the technical-spec table.

use dealpage_core::FieldValue;
use scraper::Html;

use crate::extract::dom::{first, spaced_text, text_fragments};

/// Offer/header fragments at or under this length (in characters, not
/// bytes) are separators and labels, not offers.
const MIN_OFFER_LINE_LEN: usize = 10;

/// Offers chain: the current offers holder (long lines only), then the
/// legacy bank-offer accordion (all lines).
pub(crate) fn bank_offers(doc: &Html) -> FieldValue {
    let lines = first(doc, "div.vsx__offers-holder")
        .map(|el| {
            text_fragments(el)
                .into_iter()
                .filter(|line| line.chars().count() > MIN_OFFER_LINE_LEN)
                .collect::<Vec<_>>()
        })
        .filter(|lines| !lines.is_empty())
        .or_else(|| {
            // The accordion predates the header/separator clutter, so no
            // length filter on this path.
            first(doc, "#bankOfferAccordion").map(text_fragments)
        })
        .unwrap_or_default();
    FieldValue::from_list(lines)
}

/// The feature-bullets container renders highlights as one pipe-separated
/// run of text.
pub(crate) fn about_this_item(doc: &Html) -> FieldValue {
    let segments = first(doc, "#feature-bullets")
        .map(|el| {
            spaced_text(el)
                .split('|')
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    FieldValue::from_list(segments)
}

/// Spec-table ids, in fall-through order.
const SPEC_TABLE_CHAIN: [&str; 2] = [
    "table#productDetails_techSpec_section_1",
    "table#productDetails_detailBullets_sections1",
];

/// Technical details: first spec table present wins; its cells are delimited
/// by the left-to-right mark (U+200E) the markup embeds around values.
pub(crate) fn product_information(doc: &Html) -> FieldValue {
    let segments = SPEC_TABLE_CHAIN
        .iter()
        .find_map(|css| first(doc, css))
        .map(|el| {
            spaced_text(el)
                .split('\u{200E}')
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    FieldValue::from_list(segments)
}
