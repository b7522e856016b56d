mod fal;
mod prompt;

pub use fal::FalProvider;
pub use prompt::build_image_prompt;

use async_trait::async_trait;
use thiserror::Error;

/// Why an image provider call produced no image
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider answered with a non-success HTTP status
    #[error("FAL error {0}")]
    Status(u16),

    /// The provider answered 200 but the body had no usable image URL
    #[error("Invalid FAL response")]
    InvalidResponse,

    /// The request never completed (connect failure, timeout, dropped body)
    #[error("{0}")]
    Transport(String),
}

/// An external text-to-image service
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Get the provider name (e.g., "fal")
    fn provider_name(&self) -> &str;

    /// Generate an image for `prompt` and return the URL of the first result.
    /// Exactly one attempt is made.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
