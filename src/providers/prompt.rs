use crate::model::Recipe;

/// Build the food-photography prompt sent to the image provider.
///
/// The prompt depends only on the recipe's name and ingredients, so the same
/// recipe always produces the same request.
pub fn build_image_prompt(recipe: &Recipe) -> String {
    format!(
        "Professional food photography of {}.\nIngredients: {}.\nRealistic, appetizing, gourmet, 4k studio lighting.",
        recipe.name,
        recipe.ingredients.join(", ")
    )
}
