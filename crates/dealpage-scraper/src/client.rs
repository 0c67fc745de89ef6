//! HTTP client for retrieving product-page HTML.

use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;

/// HTTP client for fetching a single product page as raw HTML.
///
/// Sends browser-like headers (retail sites serve reduced markup to obvious
/// bots), enforces a request timeout, and surfaces non-2xx statuses and
/// bot-challenge interstitials as typed errors. No retries: a failed fetch
/// fails the whole scrape of that URL.
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Creates a `PageClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the HTML body of `url`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::UnexpectedStatus`] — any non-2xx status.
    /// - [`FetchError::BotChallenge`] — the body matches a known
    ///   anti-automation challenge marker.
    /// - [`FetchError::Http`] — network, TLS, or timeout failure.
    pub async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        if looks_like_bot_challenge(&body) {
            tracing::warn!(url, "bot challenge page served instead of product page");
            return Err(FetchError::BotChallenge {
                url: url.to_owned(),
            });
        }

        tracing::debug!(url, bytes = body.len(), "fetched product page");
        Ok(body)
    }
}

/// A response body mentioning "captcha" anywhere is an anti-automation
/// interstitial, not a product page.
fn looks_like_bot_challenge(body: &str) -> bool {
    body.to_ascii_lowercase().contains("captcha")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_challenge_detected_case_insensitively() {
        assert!(looks_like_bot_challenge(
            "<html><body>Please solve this CAPTCHA to continue</body></html>"
        ));
    }

    #[test]
    fn bot_challenge_detected_lowercase() {
        assert!(looks_like_bot_challenge("captcha check"));
    }

    #[test]
    fn ordinary_page_is_not_a_bot_challenge() {
        assert!(!looks_like_bot_challenge(
            "<html><body><span id=\"productTitle\">Acme TV</span></body></html>"
        ));
    }

    #[test]
    fn empty_body_is_not_a_bot_challenge() {
        assert!(!looks_like_bot_challenge(""));
    }
}
