use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use models::{ShoppingItem, ShoppingItemInput};
use uuid::Uuid;

use crate::errors::JsonApiError;
use crate::state::ServerState;

pub async fn list_items(State(state): State<ServerState>) -> Json<Vec<ShoppingItem>> {
    Json(state.shopping_list.list().await)
}

pub async fn get_item(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ShoppingItem>, JsonApiError> {
    let Path(id) = id?;
    match state.shopping_list.get(id).await {
        Some(item) => Ok(Json(item)),
        None => Err(JsonApiError::new(
            StatusCode::NOT_FOUND,
            "Not Found",
            Some(format!("shopping item {id} not found")),
        )),
    }
}

pub async fn create_item(
    State(state): State<ServerState>,
    payload: Result<Json<ShoppingItemInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ShoppingItem>), JsonApiError> {
    let Json(input) = payload?;
    let item = state.shopping_list.create(input).await;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<ShoppingItemInput>, JsonRejection>,
) -> Result<Json<ShoppingItem>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    state
        .shopping_list
        .update(id, input)
        .await
        .map(Json)
        .map_err(JsonApiError::from)
}

pub async fn delete_item(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.shopping_list.delete(id).await;
    Ok(StatusCode::NO_CONTENT)
}
