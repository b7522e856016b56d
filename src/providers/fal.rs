use crate::config::ImageConfig;
use crate::error::Result;
use crate::providers::{ImageProvider, ProviderError};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

/// fal.ai text-to-image endpoint (FLUX schnell by default)
pub struct FalProvider {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
    image_size: String,
}

impl FalProvider {
    /// Create a new fal provider from configuration
    pub fn new(config: &ImageConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(FalProvider {
            client,
            api_key: config.api_key.clone(),
            endpoint: format!(
                "{}/{}",
                config.base_url.trim_end_matches('/'),
                config.model_path.trim_start_matches('/')
            ),
            image_size: config.image_size.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        Self::new(&ImageConfig {
            api_key: Some(api_key),
            base_url,
            ..ImageConfig::default()
        })
    }
}

#[async_trait]
impl ImageProvider for FalProvider {
    fn provider_name(&self) -> &str {
        "fal"
    }

    async fn generate(&self, prompt: &str) -> std::result::Result<String, ProviderError> {
        let mut request = self.client.post(&self.endpoint).json(&json!({
            "prompt": prompt,
            "image_size": self.image_size,
        }));
        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", format!("Key {}", api_key));
        }

        debug!("Requesting image from {}", self.endpoint);
        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        let response_body: Value =
            serde_json::from_str(&body).map_err(|_| ProviderError::InvalidResponse)?;
        debug!("{:?}", response_body);

        response_body["images"][0]["url"]
            .as_str()
            .map(str::to_string)
            .ok_or(ProviderError::InvalidResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const MODEL_PATH: &str = "/fal-ai/flux/schnell";

    #[tokio::test]
    async fn test_generate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", MODEL_PATH)
            .match_header("authorization", "Key fake_api_key")
            .match_body(Matcher::PartialJson(json!({
                "prompt": "a bowl of soup",
                "image_size": "square"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"images": [{"url": "https://cdn.fal/soup.png"}, {"url": "https://cdn.fal/other.png"}]}"#,
            )
            .create_async()
            .await;

        let provider = FalProvider::with_base_url("fake_api_key".to_string(), server.url()).unwrap();
        let url = provider.generate("a bowl of soup").await.unwrap();

        assert_eq!(url, "https://cdn.fal/soup.png");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_error_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", MODEL_PATH)
            .with_status(401)
            .with_body(r#"{"detail": "Unauthorized"}"#)
            .create_async()
            .await;

        let provider = FalProvider::with_base_url("bad_key".to_string(), server.url()).unwrap();
        let result = provider.generate("prompt").await;

        assert_eq!(result, Err(ProviderError::Status(401)));
        assert_eq!(result.unwrap_err().to_string(), "FAL error 401");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_missing_images() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", MODEL_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"images": []}"#)
            .create_async()
            .await;

        let provider = FalProvider::with_base_url("key".to_string(), server.url()).unwrap();
        assert_eq!(
            provider.generate("prompt").await,
            Err(ProviderError::InvalidResponse)
        );
    }

    #[tokio::test]
    async fn test_generate_malformed_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", MODEL_PATH)
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let provider = FalProvider::with_base_url("key".to_string(), server.url()).unwrap();
        assert_eq!(
            provider.generate("prompt").await,
            Err(ProviderError::InvalidResponse)
        );
    }

    #[tokio::test]
    async fn test_generate_unreachable() {
        // Nothing listens on port 9 (discard) in the test environment
        let provider =
            FalProvider::with_base_url("key".to_string(), "http://127.0.0.1:9".to_string())
                .unwrap();
        let result = provider.generate("prompt").await;
        assert!(matches!(result, Err(ProviderError::Transport(_))));
    }

    #[test]
    fn test_endpoint_joins_base_and_model_path() {
        let provider = FalProvider::new(&ImageConfig {
            base_url: "https://fal.run/".to_string(),
            ..ImageConfig::default()
        })
        .unwrap();

        assert_eq!(provider.endpoint, "https://fal.run/fal-ai/flux/schnell");
        assert_eq!(provider.provider_name(), "fal");
        assert!(provider.api_key.is_none());
    }
}
