use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog entry. Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub nutrition: Map<String, Value>,
    #[serde(default)]
    pub healthy_alternative: String,
    #[serde(rename = "type", default = "default_recipe_type")]
    pub recipe_type: String,
}

fn default_recipe_type() -> String {
    "unknown".to_string()
}

/// A recipe annotated with which of its ingredients the caller has.
///
/// Ingredient strings are echoed exactly as written in the catalog so the
/// frontend can display them unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub ingredients: Vec<String>,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub nutrition: Map<String, Value>,
    pub healthy_alternative: String,
    #[serde(rename = "type")]
    pub recipe_type: String,
    pub image: String,
}

/// On-disk shape of the pantry file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PantryState {
    pub ingredients: Vec<String>,
}

/// Outcome of an image lookup. `image` is always usable; `error` explains
/// why it is the placeholder, if it is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageResult {
    pub image: String,
    pub error: Option<String>,
}

impl ImageResult {
    pub fn generated(url: impl Into<String>) -> Self {
        Self {
            image: url.into(),
            error: None,
        }
    }

    pub fn fallback(placeholder: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            image: placeholder.into(),
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_optional_fields_default() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"name": "Toast", "ingredients": ["Bread"]}"#).unwrap();

        assert!(recipe.steps.is_empty());
        assert!(recipe.nutrition.is_empty());
        assert_eq!(recipe.healthy_alternative, "");
        assert_eq!(recipe.recipe_type, "unknown");
    }

    #[test]
    fn test_recipe_type_field_name() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"name": "Dal", "ingredients": ["Lentils"], "type": "veg", "nutrition": {"calories": 320}}"#,
        )
        .unwrap();

        assert_eq!(recipe.recipe_type, "veg");
        assert_eq!(recipe.nutrition["calories"], 320);
    }

    #[test]
    fn test_image_result_serializes_null_error() {
        let json = serde_json::to_value(ImageResult::generated("https://img/1.png")).unwrap();
        assert_eq!(json["image"], "https://img/1.png");
        assert!(json["error"].is_null());
    }
}
