//! HTTP client for the hosted board endpoint.

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;

use super::{BoardData, BoardSource, DEFAULT_BOARD_URL};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the board endpoint.
#[derive(Debug, Clone)]
pub struct QuicksellClient {
    http: Client,
    url: String,
}

impl Default for QuicksellClient {
    fn default() -> Self {
        Self {
            http: Client::new(),
            url: DEFAULT_BOARD_URL.to_string(),
        }
    }
}

impl QuicksellClient {
    pub fn new(url: &str) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl BoardSource for QuicksellClient {
    async fn fetch_board(&self) -> Result<BoardData> {
        let response = self.http.get(&self.url).send().await?;
        let data = response.error_for_status()?.json::<BoardData>().await?;
        Ok(data)
    }
}
