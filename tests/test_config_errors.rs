use recipe_scrape::{scrape_recipe_from_url, ScrapeError};
use std::env;

// Own test binary: the environment variable must not leak into other tests.
#[tokio::test]
async fn test_bad_config_is_generic_failure() {
    env::set_var("RECIPE_SCRAPE__TIMEOUT", "abc");

    let result = scrape_recipe_from_url("http://127.0.0.1:1/recipe").await;
    let err = result.unwrap_err();
    assert!(matches!(err, ScrapeError::ScrapeFailed));
    assert_eq!(
        err.to_string(),
        "Failed to scrape recipe. Please try manual entry."
    );
}
