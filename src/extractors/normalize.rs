//! Maps a schema.org `Recipe` node onto [`RecipeFields`].
//!
//! Shared by every strategy that starts from JSON rather than DOM nodes.

use serde_json::Value;

use crate::model::RecipeFields;

pub fn normalize_recipe(node: &Value) -> RecipeFields {
    RecipeFields {
        title: node
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        ingredients: extract_ingredients(node),
        instructions: node
            .get("recipeInstructions")
            .map(extract_instructions)
            .unwrap_or_default(),
        image: extract_image(node.get("image")),
        servings: extract_servings(node.get("recipeYield")),
    }
}

/// `recipeIngredient`, falling back to `ingredients`. Non-string entries and
/// blank strings are dropped; kept entries are returned verbatim.
pub fn extract_ingredients(node: &Value) -> Vec<String> {
    let list = node
        .get("recipeIngredient")
        .filter(|v| is_truthy(v))
        .or_else(|| node.get("ingredients"));

    match list {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Handles the three shapes sites use for `recipeInstructions`: one
/// newline-delimited string, an array of strings or `HowToStep` objects, and
/// `HowToSection` objects whose `itemListElement` holds further steps.
pub fn extract_instructions(raw: &Value) -> Vec<String> {
    match raw {
        Value::String(text) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Array(steps) => steps
            .iter()
            .flat_map(step_texts)
            .map(|step| step.trim().to_string())
            .filter(|step| !step.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

fn step_texts(step: &Value) -> Vec<String> {
    match step {
        Value::String(text) => vec![text.clone()],
        Value::Object(obj) => match obj.get("text") {
            Some(Value::String(text)) if !text.is_empty() => vec![text.clone()],
            _ => obj
                .get("itemListElement")
                .map(extract_instructions)
                .unwrap_or_default(),
        },
        _ => Vec::new(),
    }
}

/// A plain URL or the first entry of an array of URLs.
pub fn extract_image(image: Option<&Value>) -> String {
    match image {
        Some(Value::String(url)) => url.clone(),
        Some(Value::Array(urls)) => urls
            .first()
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}

pub fn extract_servings(recipe_yield: Option<&Value>) -> String {
    match recipe_yield {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Array(values)) => values
            .iter()
            .find_map(|v| match v {
                Value::String(text) => Some(text.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
