use log::{debug, error, info};
use std::time::Duration;

use crate::config::ScraperConfig;
use crate::error::{ExtractError, FetchError, ScrapeError};
use crate::extractors::{default_extractors, Extractor, ParsingContext};
use crate::fetchers::{DocumentLoader, RelayFetcher, RequestFetcher};
use crate::model::{CanonicalRecipe, RecipeFields};

/// Fetches a page and runs the extraction cascade over it.
///
/// Holds no per-call state, so one scraper can serve concurrent calls.
pub struct RecipeScraper {
    loader: Box<dyn DocumentLoader>,
    extractors: Vec<Box<dyn Extractor + Send + Sync>>,
    timeout: Duration,
}

impl RecipeScraper {
    /// Builds a scraper from configuration. A configured `relay_url` routes
    /// every fetch through the relay.
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let loader: Box<dyn DocumentLoader> = match &config.relay_url {
            Some(relay) => {
                Box::new(RelayFetcher::new(relay.clone(), config.timeout()).map_err(failed)?)
            }
            None => Box::new(
                RequestFetcher::new(config.timeout(), &config.user_agent).map_err(failed)?,
            ),
        };
        Ok(Self::with_loader(loader, config.timeout()))
    }

    pub fn with_loader(loader: Box<dyn DocumentLoader>, timeout: Duration) -> Self {
        Self {
            loader,
            extractors: default_extractors(),
            timeout,
        }
    }

    /// Extracts a recipe from `url`.
    ///
    /// Only a blank URL is reported distinctly; every other failure is
    /// logged and returned as [`ScrapeError::ScrapeFailed`].
    pub async fn scrape(&self, url: &str) -> Result<CanonicalRecipe, ScrapeError> {
        let target = url.trim();
        if target.is_empty() {
            return Err(ScrapeError::EmptyUrl);
        }

        let html = self.fetch(target).await.map_err(failed)?;
        let fields = self.extract(target, &html).map_err(failed)?;

        Ok(CanonicalRecipe::from_fields(fields, url))
    }

    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        match tokio::time::timeout(self.timeout, self.loader.fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout)),
        }
    }

    /// Runs the cascade synchronously; the first strategy yielding
    /// ingredients or instructions wins.
    pub fn extract(&self, url: &str, html: &str) -> Result<RecipeFields, ExtractError> {
        let context = ParsingContext::new(url, html);

        for extractor in &self.extractors {
            match extractor.parse(&context)? {
                Some(mut fields) if fields.has_content() => {
                    info!("Recipe extracted from {} using {}", url, extractor.name());
                    if fields.title.is_empty() {
                        fields.title = fallback_title(&context)?;
                    }
                    return Ok(fields);
                }
                _ => debug!("{} found no recipe on {}", extractor.name(), url),
            }
        }

        Err(ExtractError::NoRecipe)
    }
}

fn fallback_title(context: &ParsingContext) -> Result<String, ExtractError> {
    let title = context.document_title()?;
    if !title.is_empty() {
        return Ok(title);
    }

    let parsed = url::Url::parse(&context.url)?;
    let host = parsed
        .host_str()
        .ok_or_else(|| ExtractError::MissingHost(context.url.clone()))?;
    Ok(format!("Recipe from {host}"))
}

fn failed(cause: impl std::fmt::Display) -> ScrapeError {
    error!("Error scraping recipe: {}", cause);
    ScrapeError::ScrapeFailed
}

/// Scrapes `url` with configuration loaded from `recipe_scrape.toml` and
/// `RECIPE_SCRAPE__*` environment variables.
///
/// An unreadable configuration is logged and reported as
/// [`ScrapeError::ScrapeFailed`] like any other failure.
pub async fn scrape_recipe_from_url(url: &str) -> Result<CanonicalRecipe, ScrapeError> {
    if url.trim().is_empty() {
        return Err(ScrapeError::EmptyUrl);
    }
    let config = ScraperConfig::load().map_err(failed)?;
    RecipeScraper::new(&config)?.scrape(url).await
}
