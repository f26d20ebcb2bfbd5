//! Recovers a structured recipe from an arbitrary recipe web page.
//!
//! Pages are tried against a fixed cascade: embedded JSON-LD, WordPress
//! Recipe Maker markup, then list heuristics.
//!
//! ```no_run
//! # async fn run() -> Result<(), recipe_scrape::ScrapeError> {
//! let recipe = recipe_scrape::scrape_recipe_from_url("https://example.com/pancakes").await?;
//! println!("{} ({} ingredients)", recipe.title, recipe.ingredients.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod pipeline;

pub use config::ScraperConfig;
pub use error::{ExtractError, FetchError, ScrapeError};
pub use model::{CanonicalRecipe, RecipeFields};
pub use pipeline::{scrape_recipe_from_url, RecipeScraper};
