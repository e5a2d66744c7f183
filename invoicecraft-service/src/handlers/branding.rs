use axum::{Json, extract::State, response::IntoResponse};
use invoicecraft_core::error::AppError;

use crate::models::BrandingSettings;
use crate::startup::AppState;

pub async fn get_branding(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.get_branding().await?))
}

pub async fn put_branding(
    State(state): State<AppState>,
    Json(payload): Json<BrandingSettings>,
) -> Result<impl IntoResponse, AppError> {
    state.store.put_branding(payload.clone()).await?;

    tracing::info!("branding settings updated");
    state
        .notifier
        .info("Branding Saved", "Your branding settings have been saved.");
    Ok(Json(payload))
}
