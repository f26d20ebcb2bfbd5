use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::DocumentLoader;
use crate::error::FetchError;

#[derive(Deserialize)]
struct RelayResponse {
    contents: Option<String>,
}

/// Fetches pages through a passthrough relay that answers
/// `GET <endpoint>?url=<page>` with `{"contents": "<html>"}`.
pub struct RelayFetcher {
    endpoint: String,
    client: Client,
}

impl RelayFetcher {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait]
impl DocumentLoader for RelayFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("RelayFetcher: {} via {}", url, self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("url", url)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let relayed: RelayResponse = response.json().await?;
        relayed.contents.ok_or(FetchError::MissingContents)
    }
}
