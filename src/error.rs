use std::time::Duration;
use thiserror::Error;

/// Errors surfaced to callers of the scraper.
///
/// Every transport or extraction failure collapses into [`ScrapeError::ScrapeFailed`];
/// the underlying cause is only logged.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The URL was empty or blank
    #[error("URL is required")]
    EmptyUrl,

    /// The page could not be fetched or processed
    #[error("Failed to scrape recipe. Please try manual entry.")]
    ScrapeFailed,
}

/// Failure while loading a document
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Relay response carried no page contents")]
    MissingContents,

    #[error("Fetch timed out after {0:?}")]
    Timeout(Duration),
}

/// Failure inside the extraction cascade
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid selector {0}")]
    Selector(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("URL has no host: {0}")]
    MissingHost(String),

    #[error("No extractor produced a recipe")]
    NoRecipe,
}
