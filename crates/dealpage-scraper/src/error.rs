use thiserror::Error;

/// Errors from fetching a product page.
///
/// Any of these is fatal to the whole scrape of that URL: the extraction
/// engine never runs against a failed fetch, and no partial record is
/// produced.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("bot challenge detected at {url}")]
    BotChallenge { url: String },
}
