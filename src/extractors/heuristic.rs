use log::debug;

use super::{select_texts, Extractor, ParsingContext};
use crate::error::ExtractError;
use crate::model::RecipeFields;

const UNIT_KEYWORDS: [&str; 6] = ["cup", "tsp", "tbsp", "pound", "oz", "gram"];
const MAX_INGREDIENTS: usize = 10;
const MAX_INSTRUCTIONS: usize = 8;
const MIN_INSTRUCTION_CHARS: usize = 20;

pub const INGREDIENTS_PLACEHOLDER: &str = "Add ingredients manually";
pub const INSTRUCTIONS_PLACEHOLDER: &str = "Add instructions manually";

/// Last resort: guesses from generic list markup. Never comes back empty;
/// missing sections are filled with placeholders for manual entry.
pub struct HeuristicExtractor;

impl Extractor for HeuristicExtractor {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn parse(&self, context: &ParsingContext) -> Result<Option<RecipeFields>, ExtractError> {
        let document = &context.document;

        let mut ingredients: Vec<String> = select_texts(document, "li")?
            .into_iter()
            .filter(|text| mentions_unit(text))
            .take(MAX_INGREDIENTS)
            .collect();

        let mut instructions: Vec<String> =
            select_texts(document, "ol li, .instructions li, .directions li")?
                .into_iter()
                .filter(|text| text.chars().count() > MIN_INSTRUCTION_CHARS)
                .take(MAX_INSTRUCTIONS)
                .collect();

        debug!(
            "HeuristicExtractor: {} ingredients, {} instructions",
            ingredients.len(),
            instructions.len()
        );

        if ingredients.is_empty() {
            ingredients.push(INGREDIENTS_PLACEHOLDER.to_string());
        }
        if instructions.is_empty() {
            instructions.push(INSTRUCTIONS_PLACEHOLDER.to_string());
        }

        Ok(Some(RecipeFields {
            ingredients,
            instructions,
            ..Default::default()
        }))
    }
}

/// Case-sensitive: "Cupcakes" or "Pound Cake" in site navigation must not match.
fn mentions_unit(text: &str) -> bool {
    UNIT_KEYWORDS.iter().any(|unit| text.contains(unit))
}
