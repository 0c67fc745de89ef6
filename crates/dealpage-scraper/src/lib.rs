//! Product-page scraping: fetch one retail product page and extract a flat
//! eleven-field record from its markup.
//!
//! The pipeline is deliberately forgiving on the extraction side — every
//! field has an ordered chain of fallback strategies and degrades to absent
//! on its own — and strict on the fetch side, where any failure (non-2xx,
//! bot challenge) kills the whole scrape with no partial record.

pub mod client;
pub mod error;
pub mod extract;
pub mod summarize;

pub use client::PageClient;
pub use error::FetchError;
pub use extract::{extract, Engine};
pub use summarize::{FrequencySummarizer, SummarizeError, Summarizer};

use dealpage_core::ExtractionRecord;

/// Fetches `url` and extracts its product record.
///
/// Returns `None` on any fetch failure — the engine is never invoked and no
/// partial record is produced. A successful fetch always yields a complete
/// record, with individual fields possibly absent.
pub async fn scrape(
    client: &PageClient,
    engine: &Engine<'_>,
    url: &str,
) -> Option<ExtractionRecord> {
    match client.fetch_page(url).await {
        Ok(html) => Some(engine.extract(&html)),
        Err(err) => {
            tracing::warn!(url, error = %err, "fetch failed, skipping extraction");
            None
        }
    }
}
