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

use crate::dtos::CustomerPayload;
use crate::startup::AppState;

pub async fn list_customers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let customers = state.store.list_customers().await?;
    Ok(Json(customers))
}

pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<CustomerPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let customer = payload.into_customer(Uuid::new_v4(), Utc::now());
    state.store.put_customer(customer.clone()).await?;

    tracing::info!(customer_id = %customer.id, name = %customer.name, "customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let customer = state
        .store
        .get_customer(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Customer {} not found", id)))?;
    Ok(Json(customer))
}

pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CustomerPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let existing = state
        .store
        .get_customer(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Customer {} not found", id)))?;

    let customer = payload.into_customer(id, existing.created_utc);
    state.store.put_customer(customer.clone()).await?;

    tracing::info!(customer_id = %id, "customer updated");
    Ok(Json(customer))
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.delete_customer(id).await? {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "Customer {} not found",
            id
        )));
    }
    tracing::info!(customer_id = %id, "customer deleted");
    Ok(StatusCode::NO_CONTENT)
}
