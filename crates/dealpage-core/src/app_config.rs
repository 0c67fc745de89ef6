/// Runtime configuration for the scraping pipeline.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Total request timeout for one page fetch.
    pub request_timeout_secs: u64,
    /// User-Agent header sent with every fetch. Defaults to a browser-like
    /// string; retail sites serve reduced markup to obvious bots.
    pub user_agent: String,
    /// Number of sentences requested from the review summarizer.
    pub summary_sentences: usize,
    /// Character budget for the truncation fallback when summarization is
    /// unavailable or fails.
    pub summary_fallback_chars: usize,
}

pub(crate) const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36";
