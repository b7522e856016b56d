pub mod config;
pub mod error;
pub mod images;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod pantry;
pub mod providers;
pub mod recipes;
pub mod server;

pub use config::AppConfig;
pub use error::{MealMindError, Result};
pub use images::ImageResolver;
pub use matcher::Matcher;
pub use model::{ImageResult, PantryState, Recipe, Suggestion};
pub use normalize::normalize;
pub use pantry::PantryStore;
pub use providers::{FalProvider, ImageProvider, ProviderError};
pub use recipes::RecipeStore;
pub use server::{router, AppState};

use log::info;
use std::sync::Arc;

/// Wire the stores, matcher and image resolver together from configuration.
///
/// Loads the recipe catalog and opens (or creates) the pantry file. The
/// image provider is passed in so callers can substitute their own.
pub async fn build_state(
    config: &AppConfig,
    provider: Arc<dyn ImageProvider>,
) -> Result<Arc<AppState>> {
    let store = Arc::new(RecipeStore::load(&config.data.recipes_file).await?);
    let pantry = PantryStore::open(&config.data.pantry_file).await?;
    info!("Pantry stored at {}", pantry.path().display());

    let placeholder = config.image.placeholder_url.clone();
    Ok(Arc::new(AppState {
        matcher: Matcher::new(Arc::clone(&store), placeholder.clone()),
        pantry,
        images: ImageResolver::new(store, provider, placeholder),
    }))
}
