use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Normalized recipe handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecipe {
    pub id: u64,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Image URL, empty when the page has none
    pub image: String,
    /// Free text yield such as "4-6 servings"
    pub servings: String,
    pub url: String,
    pub pinned: bool,
}

impl CanonicalRecipe {
    /// Builds the final record from the fields an extractor produced.
    pub fn from_fields(fields: RecipeFields, url: &str) -> Self {
        CanonicalRecipe {
            id: next_recipe_id(),
            title: fields.title,
            ingredients: fields.ingredients,
            instructions: fields.instructions,
            image: fields.image,
            servings: fields.servings,
            url: url.to_string(),
            pinned: false,
        }
    }
}

/// Raw output of a single extraction strategy.
///
/// `title` may be empty; the pipeline fills it in from the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFields {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image: String,
    pub servings: String,
}

impl RecipeFields {
    pub fn has_content(&self) -> bool {
        !self.ingredients.is_empty() || !self.instructions.is_empty()
    }
}

static LAST_ID: AtomicU64 = AtomicU64::new(0);

/// Wall-clock milliseconds, bumped past the last issued id so two recipes
/// created in the same tick never share one.
pub(crate) fn next_recipe_id() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let mut last = LAST_ID.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_ID.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase() {
        let ids: Vec<u64> = (0..1000).map(|_| next_recipe_id()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_from_fields_is_unpinned() {
        let fields = RecipeFields {
            title: "Soup".to_string(),
            ingredients: vec!["1 cup water".to_string()],
            ..Default::default()
        };
        let recipe = CanonicalRecipe::from_fields(fields, "https://example.com/soup");

        assert!(!recipe.pinned);
        assert_eq!(recipe.url, "https://example.com/soup");
        assert_eq!(recipe.title, "Soup");
        assert!(recipe.instructions.is_empty());
        assert_eq!(recipe.image, "");
    }

    #[test]
    fn test_has_content() {
        assert!(!RecipeFields::default().has_content());
        let fields = RecipeFields {
            instructions: vec!["Stir".to_string()],
            ..Default::default()
        };
        assert!(fields.has_content());
    }
}
