//! Fetcher for linkstash.
//!
//! One outbound GET per call: redirects followed, bounded timeout, fixed user
//! agent, no retries. Callers decide what a failure means.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::redirect::Policy;
use reqwest::Url;
use tracing::{debug, warn};

use crate::types::errors::FetchError;
use crate::types::settings::FetchSettings;

/// Trait defining page retrieval.
pub trait Fetcher: Send + Sync {
    /// Returns the body of the final response, never empty on success.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Fetcher backed by a blocking `reqwest` client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds the client once from the fetch settings.
    ///
    /// Must not be called from inside an async runtime.
    pub fn new(settings: &FetchSettings) -> Result<Self, FetchError> {
        if settings.accept_invalid_certs {
            warn!("TLS certificate validation is disabled for outbound fetches");
        }
        let client = Client::builder()
            .redirect(Policy::limited(settings.max_redirects))
            .timeout(Duration::from_secs(settings.timeout_secs.max(1)))
            .user_agent(settings.user_agent.clone())
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

/// Parses `url` and rejects anything that is not http(s).
pub fn parse_fetch_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl(format!(
            "{}: unsupported scheme {}",
            url, other
        ))),
    }
}

fn transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(e.to_string())
    } else {
        FetchError::Transport(e.to_string())
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let target = parse_fetch_url(url)?;

        let response = self
            .client
            .get(target)
            .header(ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .send()
            .map_err(transport_error)?;

        let status = response.status();
        let final_url = response.url().to_string();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().map_err(transport_error)?;
        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }
        debug!(url, final_url = %final_url, bytes = body.len(), "fetched page");
        Ok(body.to_vec())
    }
}
