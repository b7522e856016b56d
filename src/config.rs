use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Main service configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Locations of the recipe catalog and pantry file
    #[serde(default)]
    pub data: DataConfig,
    /// Image generation provider settings
    #[serde(default)]
    pub image: ImageConfig,
    /// Browser origins allowed to call the API
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Read-only recipe catalog, a JSON array of recipes
    #[serde(default = "default_recipes_file")]
    pub recipes_file: PathBuf,
    /// Read-write pantry file, `{"ingredients": [...]}`
    #[serde(default = "default_pantry_file")]
    pub pantry_file: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            recipes_file: default_recipes_file(),
            pantry_file: default_pantry_file(),
        }
    }
}

/// Configuration for the image generation provider
#[derive(Debug, Deserialize, Clone)]
pub struct ImageConfig {
    /// API key for authentication (can also be set via FAL_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the provider
    #[serde(default = "default_image_base_url")]
    pub base_url: String,
    /// Model endpoint path appended to the base URL
    #[serde(default = "default_model_path")]
    pub model_path: String,
    /// Size hint passed to the provider
    #[serde(default = "default_image_size")]
    pub image_size: String,
    /// Request timeout in seconds
    #[serde(default = "default_image_timeout")]
    pub timeout: u64,
    /// Image returned whenever generation is unavailable
    #[serde(default = "default_placeholder_url")]
    pub placeholder_url: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_image_base_url(),
            model_path: default_model_path(),
            image_size: default_image_size(),
            timeout: default_image_timeout(),
            placeholder_url: default_placeholder_url(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    10000
}

fn default_recipes_file() -> PathBuf {
    PathBuf::from("data/recipes.json")
}

fn default_pantry_file() -> PathBuf {
    PathBuf::from("data/pantry.json")
}

fn default_image_base_url() -> String {
    "https://fal.run".to_string()
}

fn default_model_path() -> String {
    "fal-ai/flux/schnell".to_string()
}

fn default_image_size() -> String {
    "square".to_string()
}

fn default_image_timeout() -> u64 {
    120
}

fn default_placeholder_url() -> String {
    "https://sujalpatil21.github.io/Meal-Mind/docs/images/Placeholder.png".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "https://sujalpatil21.github.io".to_string(),
        "https://meal-mind-5n51.onrender.com".to_string(),
    ]
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALMIND__ prefix
    /// 2. mealmind.toml file in current directory
    /// 3. Default values
    ///
    /// `FAL_API_KEY` and `PORT` are honoured when the corresponding keys are
    /// not set any other way.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Environment variable format: MEALMIND__IMAGE__TIMEOUT, MEALMIND__SERVER__PORT
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("mealmind").required(false))
        .add_source(
            Environment::with_prefix("MEALMIND")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

    if let Ok(key) = std::env::var("FAL_API_KEY") {
        builder = builder.set_default("image.api_key", key)?;
    }
    if let Ok(port) = std::env::var("PORT") {
        builder = builder.set_default("server.port", port)?;
    }

    let mut config: AppConfig = builder.build()?.try_deserialize()?;

    // A blank key in the environment is the same as no key
    if config.image.api_key.as_deref().is_some_and(|k| k.trim().is_empty()) {
        config.image.api_key = None;
    }

    Ok(config)
}
