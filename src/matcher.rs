use crate::model::{Recipe, Suggestion};
use crate::normalize::normalize;
use crate::recipes::RecipeStore;
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;

/// Suggests recipes sharing at least one ingredient with a query.
pub struct Matcher {
    store: Arc<RecipeStore>,
    placeholder_url: String,
}

impl Matcher {
    pub fn new(store: Arc<RecipeStore>, placeholder_url: impl Into<String>) -> Self {
        Self {
            store,
            placeholder_url: placeholder_url.into(),
        }
    }

    /// Suggest recipes for a comma-separated ingredient list.
    ///
    /// Every token is normalized before comparison, so "egg" matches a
    /// recipe listing "Eggs". Recipes with no matching ingredient are left
    /// out. Results keep catalog order; there is no scoring.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        let wanted: HashSet<String> = query.split(',').map(normalize).collect();

        let suggestions: Vec<Suggestion> = self
            .store
            .iter()
            .filter_map(|recipe| self.annotate(recipe, &wanted))
            .collect();

        debug!(
            "Query '{}' matched {} of {} recipes",
            query,
            suggestions.len(),
            self.store.len()
        );
        suggestions
    }

    /// Same as [`Matcher::suggest`], keeping only recipes of the given type
    /// ("veg", "non-veg", ...), compared ignoring case.
    pub fn suggest_of_type(&self, query: &str, recipe_type: &str) -> Vec<Suggestion> {
        let recipe_type = recipe_type.trim();
        self.suggest(query)
            .into_iter()
            .filter(|s| s.recipe_type.eq_ignore_ascii_case(recipe_type))
            .collect()
    }

    fn annotate(&self, recipe: &Recipe, wanted: &HashSet<String>) -> Option<Suggestion> {
        let (matched, missing): (Vec<String>, Vec<String>) = recipe
            .ingredients
            .iter()
            .cloned()
            .partition(|ingredient| wanted.contains(&normalize(ingredient)));

        if matched.is_empty() {
            return None;
        }

        Some(Suggestion {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            matched_ingredients: matched,
            missing_ingredients: missing,
            steps: recipe.steps.clone(),
            nutrition: recipe.nutrition.clone(),
            healthy_alternative: recipe.healthy_alternative.clone(),
            recipe_type: recipe.recipe_type.clone(),
            image: self.placeholder_url.clone(),
        })
    }
}
