use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::engine::Fetcher as FetcherT;
use crate::error::{LarderError, Result};

/// User agent sent with every request.
static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Plain sequential HTTP fetcher. One GET per call, no retries; the
/// crawl's politeness comes from never having more than one request in
/// flight.
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FetcherT for ReqwestFetcher {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LarderError::Fetch {
                url: url.to_string(),
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LarderError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().await.map_err(|e| LarderError::Fetch {
            url: url.to_string(),
            source: e,
        })
    }
}
