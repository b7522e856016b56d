use crate::model::ImageResult;
use crate::normalize::canonical_key;
use crate::providers::{build_image_prompt, ImageProvider};
use crate::recipes::RecipeStore;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

pub const RECIPE_NOT_FOUND: &str = "Recipe not found";

/// Resolves a recipe name to an image URL.
///
/// Successful generations are cached for the life of the resolver, keyed by
/// the lowercased, trimmed recipe name. Failures are never cached and never
/// surface as errors: the caller always gets a usable URL, falling back to
/// the placeholder.
pub struct ImageResolver {
    store: Arc<RecipeStore>,
    provider: Arc<dyn ImageProvider>,
    placeholder_url: String,
    cache: RwLock<HashMap<String, String>>,
}

impl ImageResolver {
    pub fn new(
        store: Arc<RecipeStore>,
        provider: Arc<dyn ImageProvider>,
        placeholder_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            provider,
            placeholder_url: placeholder_url.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn placeholder_url(&self) -> &str {
        &self.placeholder_url
    }

    pub async fn resolve(&self, recipe_name: &str) -> ImageResult {
        let key = canonical_key(recipe_name);

        if let Some(url) = self.cached(&key) {
            debug!("Image cache hit for '{}'", key);
            return ImageResult::generated(url);
        }

        let Some(recipe) = self.store.find_by_name(&key) else {
            debug!("No recipe named '{}'", recipe_name);
            return ImageResult::fallback(&self.placeholder_url, RECIPE_NOT_FOUND);
        };

        let prompt = build_image_prompt(recipe);
        match self.provider.generate(&prompt).await {
            Ok(url) => {
                info!(
                    "Generated image for '{}' using {}",
                    recipe.name,
                    self.provider.provider_name()
                );
                // Concurrent misses may both generate; last write wins.
                if let Ok(mut cache) = self.cache.write() {
                    cache.insert(key, url.clone());
                }
                ImageResult::generated(url)
            }
            Err(e) => {
                warn!(
                    "Image generation for '{}' failed via {}: {}",
                    recipe.name,
                    self.provider.provider_name(),
                    e
                );
                ImageResult::fallback(&self.placeholder_url, e.to_string())
            }
        }
    }

    fn cached(&self, key: &str) -> Option<String> {
        self.cache.read().ok()?.get(key).cloned()
    }

    /// Number of cached images.
    pub fn cached_count(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }
}
