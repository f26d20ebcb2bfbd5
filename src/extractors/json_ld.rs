use log::{debug, warn};
use serde_json::Value;

use super::normalize::normalize_recipe;
use super::{selector, Extractor, ParsingContext};
use crate::error::ExtractError;
use crate::model::RecipeFields;

/// Reads the first schema.org `Recipe` node from the page's JSON-LD scripts.
pub struct JsonLdExtractor;

impl Extractor for JsonLdExtractor {
    fn name(&self) -> &'static str {
        "json_ld"
    }

    fn parse(&self, context: &ParsingContext) -> Result<Option<RecipeFields>, ExtractError> {
        let selector = selector("script[type='application/ld+json']")?;
        let blocks: Vec<String> = context
            .document
            .select(&selector)
            .map(|script| script.text().collect::<String>())
            .collect();
        debug!("JsonLdExtractor: Found {} JSON-LD script tags", blocks.len());

        Ok(find_recipe(&blocks).map(|node| normalize_recipe(&node)))
    }
}

/// Scans the blocks in order and returns the first `Recipe` node found.
/// Blocks that cannot be parsed, even after sanitizing, are skipped.
pub fn find_recipe(blocks: &[String]) -> Option<Value> {
    for (index, raw) in blocks.iter().enumerate() {
        let Some(json) = parse_block(raw) else {
            warn!("JsonLdExtractor: Skipping unparsable JSON-LD block {}", index);
            continue;
        };

        if let Some(recipe) = find_recipe_node(&json) {
            debug!("JsonLdExtractor: Found Recipe node in block {}", index);
            return Some(recipe.clone());
        }
        debug!("JsonLdExtractor: No Recipe node in block {}", index);
    }
    None
}

fn parse_block(raw: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(json) => Some(json),
        Err(e) => {
            debug!("JsonLdExtractor: Strict parse failed ({}), sanitizing", e);
            serde_json::from_str::<Value>(&sanitize_json(raw))
                .map_err(|e| debug!("JsonLdExtractor: Sanitized parse failed: {}", e))
                .ok()
        }
    }
}

/// First node in walk order whose `@type` is `"Recipe"` or an array containing it.
pub fn find_recipe_node(json: &Value) -> Option<&Value> {
    flatten(json).into_iter().find(|node| is_recipe_type(node))
}

fn is_recipe_type(node: &Value) -> bool {
    match node.get("@type") {
        Some(Value::String(t)) => t == "Recipe",
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some("Recipe")),
        _ => false,
    }
}

/// Every object in the graph, depth-first with parents before children.
pub fn flatten(json: &Value) -> Vec<&Value> {
    let mut nodes = Vec::new();
    collect_objects(json, &mut nodes);
    nodes
}

fn collect_objects<'a>(value: &'a Value, nodes: &mut Vec<&'a Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_objects(item, nodes);
            }
        }
        Value::Object(map) => {
            nodes.push(value);
            for child in map.values() {
                collect_objects(child, nodes);
            }
        }
        _ => {}
    }
}

/// Repairs the two defects most often seen in embedded JSON-LD: raw control
/// characters and trailing commas before `}` or `]`.
///
/// Line breaks and tabs become spaces, other control characters are dropped.
/// String literals are left untouched apart from the control characters.
pub fn sanitize_json(json_str: &str) -> String {
    let chars: Vec<char> = json_str
        .chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect();

    let mut cleaned = String::with_capacity(chars.len());
    let mut in_string = false;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            cleaned.push(c);
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                cleaned.push(c);
            }
            ',' => {
                let next = chars[i + 1..].iter().find(|c| !c.is_whitespace());
                if matches!(next, Some('}' | ']')) {
                    debug!("Dropping trailing comma at offset {}", i);
                } else {
                    cleaned.push(c);
                }
            }
            _ => cleaned.push(c),
        }
    }

    cleaned
}
