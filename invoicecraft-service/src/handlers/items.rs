use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use invoicecraft_core::error::AppError;
use uuid::Uuid;
use validator::Validate;

use crate::dtos::RepositoryItemPayload;
use crate::startup::AppState;

pub async fn list_items(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = state.store.list_items().await?;
    Ok(Json(items))
}

pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<RepositoryItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let item = payload.into_item(Uuid::new_v4(), Utc::now());
    state.store.put_item(item.clone()).await?;

    tracing::info!(item_id = %item.id, "repository item created");
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let item = state
        .store
        .get_item(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Item {} not found", id)))?;
    Ok(Json(item))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RepositoryItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let existing = state
        .store
        .get_item(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Item {} not found", id)))?;

    let item = payload.into_item(id, existing.created_utc);
    state.store.put_item(item.clone()).await?;
    Ok(Json(item))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.delete_item(id).await? {
        return Err(AppError::NotFound(anyhow::anyhow!("Item {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
