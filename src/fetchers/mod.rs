use async_trait::async_trait;

use crate::error::FetchError;

mod relay;
mod request;

pub use relay::RelayFetcher;
pub use request::RequestFetcher;

/// Loads the raw HTML of a page.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
