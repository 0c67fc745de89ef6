//! The field extraction engine.
//!
//! Parses the document once, then runs the eleven field strategy chains
//! independently against the shared read-only tree. A chain that finds
//! nothing records [`FieldValue::Absent`]; no per-field failure can abort
//! the call or leak into another field.

mod dom;
mod fields;

use dealpage_core::{ExtractionRecord, FieldValue};
use scraper::Html;

use crate::summarize::{truncate_with_ellipsis, Summarizer};

/// The extraction engine: strategy chains plus the optional review
/// summarizer and its degrade policy.
///
/// Stateless across calls; `extract` builds a fresh tree per document and
/// holds nothing back between invocations.
pub struct Engine<'a> {
    summarizer: Option<&'a dyn Summarizer>,
    summary_sentences: usize,
    summary_fallback_chars: usize,
}

impl Default for Engine<'_> {
    fn default() -> Self {
        Engine {
            summarizer: None,
            summary_sentences: 3,
            summary_fallback_chars: 300,
        }
    }
}

impl<'a> Engine<'a> {
    #[must_use]
    pub fn new() -> Self {
        Engine::default()
    }

    /// Attaches a review summarizer and its tuning knobs.
    #[must_use]
    pub fn with_summarizer(
        summarizer: &'a dyn Summarizer,
        summary_sentences: usize,
        summary_fallback_chars: usize,
    ) -> Self {
        Engine {
            summarizer: Some(summarizer),
            summary_sentences,
            summary_fallback_chars,
        }
    }

    /// Extracts the full eleven-field record from raw page HTML.
    ///
    /// Always returns a complete record: any text parses to at least a
    /// degenerate tree, and every field degrades to `Absent` on its own.
    #[must_use]
    pub fn extract(&self, html: &str) -> ExtractionRecord {
        let doc = Html::parse_document(html);

        ExtractionRecord {
            product_name: fields::product_name(&doc),
            rating: fields::rating(&doc),
            number_of_ratings: fields::number_of_ratings(&doc),
            selling_price: fields::selling_price(&doc),
            total_discount: fields::total_discount(&doc),
            bank_offers: fields::bank_offers(&doc),
            about_this_item: fields::about_this_item(&doc),
            product_information: fields::product_information(&doc),
            amazon_product_images: fields::amazon_product_images(&doc),
            manufacturer_images: fields::manufacturer_images(&doc),
            review_summary: self.review_summary(&doc),
        }
    }

    /// No review bodies means `Absent` and no summarizer call at all;
    /// otherwise summarize, degrading to truncation when the collaborator
    /// is missing or fails.
    fn review_summary(&self, doc: &Html) -> FieldValue {
        let Some(text) = fields::review_text(doc) else {
            return FieldValue::Absent;
        };

        let summary = self.summarizer.and_then(|summarizer| {
            match summarizer.summarize(&text, self.summary_sentences) {
                Ok(summary) if !summary.trim().is_empty() => Some(summary),
                Ok(_) => None,
                Err(err) => {
                    tracing::debug!(error = %err, "summarization failed, truncating instead");
                    None
                }
            }
        });

        let value =
            summary.unwrap_or_else(|| truncate_with_ellipsis(&text, self.summary_fallback_chars));
        FieldValue::from_text(Some(value))
    }
}

/// Extracts a record with the default engine (no summarizer; review text
/// degrades to truncation).
#[must_use]
pub fn extract(html: &str) -> ExtractionRecord {
    Engine::new().extract(html)
}
