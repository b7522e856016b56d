//! HTTP surface of the service.
//!
//! | Method | Path               | Response                                   |
//! |--------|--------------------|--------------------------------------------|
//! | GET    | `/`                | `{"message": ...}`                         |
//! | GET    | `/suggest_meal`    | `{"suggestions": [...]}`                   |
//! | GET    | `/generate_image`  | `{"image": ..., "error": ...}`             |
//! | POST   | `/add_to_pantry`   | `{"ingredients": [...]}`                   |
//! | GET    | `/get_pantry`      | `{"ingredients": [...]}`                   |
//! | GET    | `/download_pantry` | `pantry_list.txt` attachment               |

use crate::config::CorsConfig;
use crate::error::MealMindError;
use crate::images::ImageResolver;
use crate::matcher::Matcher;
use crate::model::{ImageResult, PantryState, Suggestion};
use crate::pantry::PantryStore;
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{error, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Everything a request handler needs, shared across requests.
pub struct AppState {
    pub matcher: Matcher,
    pub pantry: PantryStore,
    pub images: ImageResolver,
}

/// A request that failed outright. Rendered as HTTP 500 with a JSON
/// `detail` message.
#[derive(Debug)]
pub struct ApiError(MealMindError);

impl From<MealMindError> for ApiError {
    fn from(err: MealMindError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": self.0.to_string() })),
        )
            .into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    pub ingredients: String,
    #[serde(rename = "type")]
    pub recipe_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    pub recipe_name: String,
}

#[derive(Debug, Deserialize)]
pub struct PantryItem {
    pub ingredient: String,
}

/// Build the application router with CORS applied.
pub fn router(state: Arc<AppState>, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/suggest_meal", get(suggest_meal))
        .route("/generate_image", get(generate_image))
        .route("/add_to_pantry", post(add_to_pantry))
        .route("/get_pantry", get(get_pantry))
        .route("/download_pantry", get(download_pantry))
        .layer(cors_layer(cors))
        .with_state(state)
}

/// Allow credentialed requests from the configured origins with any method
/// and header. Wildcards are not allowed together with credentials, so
/// methods and headers mirror the preflight request instead.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            let trimmed = origin.trim();
            match HeaderValue::from_str(trimmed) {
                Ok(value) if !trimmed.is_empty() => Some(value),
                Ok(_) => None,
                Err(_) => {
                    warn!("Ignoring invalid CORS origin '{}'", origin);
                    None
                }
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "MealMind API is running" }))
}

async fn suggest_meal(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SuggestQuery>,
) -> Json<SuggestResponse> {
    let suggestions = match query.recipe_type.as_deref() {
        Some(recipe_type) => state
            .matcher
            .suggest_of_type(&query.ingredients, recipe_type),
        None => state.matcher.suggest(&query.ingredients),
    };
    Json(SuggestResponse { suggestions })
}

async fn generate_image(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ImageQuery>,
) -> Json<ImageResult> {
    Json(state.images.resolve(&query.recipe_name).await)
}

async fn add_to_pantry(
    State(state): State<Arc<AppState>>,
    Json(item): Json<PantryItem>,
) -> Result<Json<PantryState>, ApiError> {
    let ingredients = state.pantry.add(&item.ingredient).await?;
    Ok(Json(PantryState { ingredients }))
}

async fn get_pantry(State(state): State<Arc<AppState>>) -> Result<Json<PantryState>, ApiError> {
    let ingredients = state.pantry.list().await?;
    Ok(Json(PantryState { ingredients }))
}

async fn download_pantry(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let text = state.pantry.export().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=pantry_list.txt",
            ),
        ],
        text,
    )
        .into_response())
}
