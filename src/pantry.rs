use crate::error::Result;
use crate::model::PantryState;
use crate::normalize::canonical_key;
use log::{debug, info};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

/// The user's pantry, persisted as `{"ingredients": [...]}`.
///
/// The file is the only source of truth: every read goes to disk and every
/// change rewrites the whole file. Writes within this process are serialized
/// and land via a temp file plus rename, so a reader never sees a partial
/// file. Separate processes sharing the file are not coordinated.
pub struct PantryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl PantryStore {
    /// Open the pantry at `path`, creating an empty one (and its parent
    /// directory) if it does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        };

        if fs::try_exists(&store.path).await? {
            debug!("Using existing pantry file {}", store.path.display());
        } else {
            if let Some(parent) = store.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await?;
            }
            store.write_state(&PantryState::default()).await?;
            info!("Created empty pantry file {}", store.path.display());
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add an ingredient, lowercased and trimmed. Blank input and entries
    /// already present leave the file untouched. Returns the full list
    /// either way.
    pub async fn add(&self, ingredient: &str) -> Result<Vec<String>> {
        let ingredient = canonical_key(ingredient);

        let _guard = self.write_lock.lock().await;
        let mut state = self.read_state().await?;

        if !ingredient.is_empty() && !state.ingredients.contains(&ingredient) {
            debug!("Adding '{}' to pantry", ingredient);
            state.ingredients.push(ingredient);
            self.write_state(&state).await?;
        }

        Ok(state.ingredients)
    }

    /// All stored ingredients, in insertion order.
    pub async fn list(&self) -> Result<Vec<String>> {
        Ok(self.read_state().await?.ingredients)
    }

    /// Plain-text export: one ingredient per line, no trailing newline.
    pub async fn export(&self) -> Result<String> {
        Ok(self.list().await?.join("\n"))
    }

    async fn read_state(&self) -> Result<PantryState> {
        let json = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&json)?)
    }

    async fn write_state(&self, state: &PantryState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, json).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}
