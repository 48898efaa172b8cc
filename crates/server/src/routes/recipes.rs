use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use models::{Recipe, RecipeInput};
use uuid::Uuid;

use crate::errors::JsonApiError;
use crate::state::ServerState;

/// List all recipes in insertion order
pub async fn list_recipes(State(state): State<ServerState>) -> Json<Vec<Recipe>> {
    Json(state.recipes.list().await)
}

pub async fn get_recipe(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Recipe>, JsonApiError> {
    let Path(id) = id?;
    state
        .recipes
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("recipe {id} not found"))))
}

/// Create a recipe; responds 201 with the stored record
pub async fn create_recipe(
    State(state): State<ServerState>,
    payload: Result<Json<RecipeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), JsonApiError> {
    let Json(input) = payload?;
    let rec = state.recipes.create(input).await;
    Ok((StatusCode::CREATED, Json(rec)))
}

/// Replace name and ingredients of a recipe
pub async fn update_recipe(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<RecipeInput>, JsonRejection>,
) -> Result<Json<Recipe>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let rec = state.recipes.update(id, input).await?;
    Ok(Json(rec))
}

/// Delete a recipe. Unknown ids are a no-op and still answer 204.
pub async fn delete_recipe(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.recipes.delete(id).await;
    Ok(StatusCode::NO_CONTENT)
}
