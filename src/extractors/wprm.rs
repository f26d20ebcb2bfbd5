use log::debug;
use scraper::{ElementRef, Html};

use super::{select_texts, selector, Extractor, ParsingContext};
use crate::error::ExtractError;
use crate::model::RecipeFields;

const CONTAINER: &str = ".wprm-recipe-container";
const TITLE: &str = ".wprm-recipe-name";
const INGREDIENT: &str = ".wprm-recipe-ingredient";
const INSTRUCTION: &str = ".wprm-recipe-instruction-text";
const SERVINGS: &str = ".wprm-recipe-servings";

/// Reads WordPress Recipe Maker cards straight from the DOM.
pub struct WprmExtractor;

impl Extractor for WprmExtractor {
    fn name(&self) -> &'static str {
        "wprm"
    }

    fn parse(&self, context: &ParsingContext) -> Result<Option<RecipeFields>, ExtractError> {
        let document = &context.document;
        let container_selector = selector(CONTAINER)?;
        let Some(container) = document.select(&container_selector).next() else {
            debug!("WprmExtractor: No recipe card container");
            return Ok(None);
        };

        let ingredients = select_texts(document, INGREDIENT)?;
        let instructions = select_texts(document, INSTRUCTION)?;
        debug!(
            "WprmExtractor: {} ingredients, {} instructions",
            ingredients.len(),
            instructions.len()
        );

        if ingredients.is_empty() && instructions.is_empty() {
            return Ok(None);
        }

        Ok(Some(RecipeFields {
            title: first_text(document, TITLE)?,
            ingredients,
            instructions,
            image: card_image(container)?,
            servings: first_text(document, SERVINGS)?,
        }))
    }
}

fn first_text(document: &Html, css: &str) -> Result<String, ExtractError> {
    Ok(select_texts(document, css)?
        .into_iter()
        .next()
        .unwrap_or_default())
}

/// Lazy-loading plugins move the real URL out of `src`.
fn card_image(container: ElementRef) -> Result<String, ExtractError> {
    let img = selector("img")?;
    Ok(container
        .select(&img)
        .next()
        .and_then(|el| {
            ["src", "data-lazy-src", "data-src"]
                .iter()
                .filter_map(|attr| el.value().attr(attr))
                .map(str::trim)
                .find(|url| !url.is_empty() && !url.starts_with("data:"))
        })
        .unwrap_or_default()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Option<RecipeFields> {
        let context = ParsingContext::new("https://example.com/recipe", html);
        WprmExtractor.parse(&context).unwrap()
    }

    #[test]
    fn test_wprm_recipe_card() {
        let html = r#"
        <html>
            <head><title>Cookies | My Blog</title></head>
            <body>
                <div class="wprm-recipe-container">
                    <img src="https://example.com/cookies.jpg">
                    <h2 class="wprm-recipe-name">Chocolate Chip Cookies</h2>
                    <span class="wprm-recipe-servings">24</span>
                    <ul>
                        <li class="wprm-recipe-ingredient">
                            <span class="wprm-recipe-ingredient-amount">2</span>
                            <span class="wprm-recipe-ingredient-unit">cups</span>
                            <span class="wprm-recipe-ingredient-name">flour</span>
                        </li>
                        <li class="wprm-recipe-ingredient">1 cup sugar</li>
                    </ul>
                    <ul>
                        <li><div class="wprm-recipe-instruction-text">Preheat oven to 350°F.</div></li>
                        <li><div class="wprm-recipe-instruction-text">Bake for 10 minutes.</div></li>
                    </ul>
                </div>
            </body>
        </html>
        "#;

        let fields = parse(html).unwrap();
        assert_eq!(fields.title, "Chocolate Chip Cookies");
        assert_eq!(fields.ingredients, vec!["2 cups flour", "1 cup sugar"]);
        assert_eq!(
            fields.instructions,
            vec!["Preheat oven to 350°F.", "Bake for 10 minutes."]
        );
        assert_eq!(fields.image, "https://example.com/cookies.jpg");
        assert_eq!(fields.servings, "24");
    }

    #[test]
    fn test_partial_card_is_accepted() {
        let html = r#"
            <div class="wprm-recipe-container">
                <div class="wprm-recipe-ingredient">3 eggs</div>
            </div>
        "#;
        let fields = parse(html).unwrap();
        assert_eq!(fields.ingredients, vec!["3 eggs"]);
        assert!(fields.instructions.is_empty());
        assert_eq!(fields.title, "");
        assert_eq!(fields.image, "");
        assert_eq!(fields.servings, "");
    }

    #[test]
    fn test_empty_card_falls_through() {
        let html = r#"<div class="wprm-recipe-container"><h2 class="wprm-recipe-name">Empty</h2></div>"#;
        assert!(parse(html).is_none());
    }

    #[test]
    fn test_no_container() {
        let html = r#"<ul><li class="wprm-recipe-ingredient">1 cup milk</li></ul>"#;
        assert!(parse(html).is_none());
    }

    #[test]
    fn test_lazy_loaded_image() {
        let html = r#"
            <div class="wprm-recipe-container">
                <img src="data:image/svg+xml,%3Csvg%3E" data-lazy-src="https://example.com/real.jpg">
                <span class="wprm-recipe-instruction-text">Stir well.</span>
            </div>
        "#;
        assert_eq!(parse(html).unwrap().image, "https://example.com/real.jpg");
    }
}
