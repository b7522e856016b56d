use crate::error::{MealMindError, Result};
use crate::model::Recipe;
use crate::normalize::canonical_key;
use log::{debug, info};
use std::collections::HashSet;
use std::path::Path;

/// Read-only recipe catalog, kept in file order.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Build a store from already-parsed recipes.
    ///
    /// # Errors
    /// Returns `RecipeCatalog` if two recipes share a name ignoring case and
    /// surrounding whitespace, since name lookups would be ambiguous.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            if !seen.insert(canonical_key(&recipe.name)) {
                return Err(MealMindError::RecipeCatalog(format!(
                    "duplicate recipe name '{}'",
                    recipe.name
                )));
            }
        }
        Ok(Self { recipes })
    }

    /// Parse a catalog from a JSON array of recipe records.
    pub fn from_json(json: &str) -> Result<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    /// Load the catalog from disk. Called once at startup.
    pub async fn load(path: &Path) -> Result<Self> {
        debug!("Reading recipe catalog from {}", path.display());
        let json = tokio::fs::read_to_string(path).await?;
        let store = Self::from_json(&json)?;
        info!("Loaded {} recipes from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Case-insensitive lookup by recipe name.
    pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        let key = canonical_key(name);
        self.recipes
            .iter()
            .find(|recipe| canonical_key(&recipe.name) == key)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
