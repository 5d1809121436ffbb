//! Listing page retrieval.

use reqwest::blocking::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::config::FetchConfig;
use crate::{Error, Result};

/// Capability to fetch the raw bytes of a page.
pub trait PageFetcher {
    /// Fetch `url`. Transport failures, timeouts and non-2xx statuses are errors.
    fn fetch_page(&self, url: &Url) -> Result<Vec<u8>>;
}

/// Blocking HTTP fetcher with a bounded wait and a fixed `User-Agent`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Fetch(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(skip_all, fields(url = %url), level = "debug")]
    fn fetch_page(&self, url: &Url) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("{url} returned {status}")));
        }

        let body = response.bytes().map_err(|e| Error::Fetch(e.to_string()))?;
        debug!(bytes = body.len(), "fetched listing page");
        Ok(body.to_vec())
    }
}
