use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;
use crate::model::RecipeFields;

mod heuristic;
mod json_ld;
pub mod normalize;
mod wprm;

pub use heuristic::HeuristicExtractor;
pub use json_ld::{find_recipe_node, flatten, sanitize_json, JsonLdExtractor};
pub use wprm::WprmExtractor;

pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(url: impl Into<String>, html: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(html),
        }
    }

    /// Trimmed text of the document's `<title>`, empty if missing.
    pub fn document_title(&self) -> Result<String, ExtractError> {
        let selector = selector("title")?;
        Ok(self
            .document
            .select(&selector)
            .next()
            .map(element_text)
            .unwrap_or_default())
    }
}

/// A single strategy of the extraction cascade.
///
/// `Ok(None)` means the strategy found nothing and the next one should run.
pub trait Extractor {
    fn name(&self) -> &'static str;
    fn parse(&self, context: &ParsingContext) -> Result<Option<RecipeFields>, ExtractError>;
}

/// The cascade in the order it is tried.
pub fn default_extractors() -> Vec<Box<dyn Extractor + Send + Sync>> {
    vec![
        Box::new(JsonLdExtractor),
        Box::new(WprmExtractor),
        Box::new(HeuristicExtractor),
    ]
}

pub(crate) fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector(format!("{css}: {e:?}")))
}

/// Text content with runs of whitespace collapsed to single spaces.
pub(crate) fn element_text(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Non-empty texts of every element matching `css`, in document order.
pub(crate) fn select_texts(document: &Html, css: &str) -> Result<Vec<String>, ExtractError> {
    let selector = selector(css)?;
    Ok(document
        .select(&selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_text_collapses_whitespace() {
        let context = ParsingContext::new(
            "https://example.com",
            "<html><body><p>  2 <span>cups</span>\n\n   flour </p></body></html>",
        );
        let texts = select_texts(&context.document, "p").unwrap();
        assert_eq!(texts, vec!["2 cups flour"]);
    }

    #[test]
    fn test_document_title() {
        let context = ParsingContext::new(
            "https://example.com",
            "<html><head><title>  Best Soup  </title></head><body></body></html>",
        );
        assert_eq!(context.document_title().unwrap(), "Best Soup");

        let untitled = ParsingContext::new("https://example.com", "<p>no head</p>");
        assert_eq!(untitled.document_title().unwrap(), "");
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        assert!(matches!(selector("li[["), Err(ExtractError::Selector(_))));
    }

    #[test]
    fn test_default_cascade_order() {
        let names: Vec<_> = default_extractors().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["json_ld", "wprm", "heuristic"]);
    }
}
