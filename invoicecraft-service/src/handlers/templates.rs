//! CRUD endpoints for the three template families.

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

use crate::dtos::{CoverPageTemplatePayload, MsaTemplatePayload, TermsTemplatePayload};
use crate::startup::AppState;

// MSA templates.

pub async fn list_msa_templates(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.list_msa_templates().await?))
}

pub async fn create_msa_template(
    State(state): State<AppState>,
    Json(payload): Json<MsaTemplatePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // A dangling cover page reference would silently drop the cover at render
    // time; reject it up front instead.
    if let Some(cover_id) = payload.cover_page_template_id {
        if state.store.get_cover_template(cover_id).await?.is_none() {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "Cover page template {} does not exist",
                cover_id
            )));
        }
    }

    let template = payload.into_template(Uuid::new_v4(), Utc::now());
    state.store.put_msa_template(template.clone()).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

pub async fn get_msa_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let template = state
        .store
        .get_msa_template(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("MSA template {} not found", id)))?;
    Ok(Json(template))
}

pub async fn update_msa_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MsaTemplatePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let existing = state
        .store
        .get_msa_template(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("MSA template {} not found", id)))?;

    let template = payload.into_template(id, existing.created_utc);
    state.store.put_msa_template(template.clone()).await?;
    Ok(Json(template))
}

pub async fn delete_msa_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.delete_msa_template(id).await? {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "MSA template {} not found",
            id
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

// Terms & conditions templates.

pub async fn list_terms_templates(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.list_terms_templates().await?))
}

pub async fn create_terms_template(
    State(state): State<AppState>,
    Json(payload): Json<TermsTemplatePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let template = payload.into_template(Uuid::new_v4(), Utc::now());
    state.store.put_terms_template(template.clone()).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

pub async fn get_terms_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let template = state
        .store
        .get_terms_template(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Terms template {} not found", id)))?;
    Ok(Json(template))
}

pub async fn update_terms_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TermsTemplatePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let existing = state
        .store
        .get_terms_template(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Terms template {} not found", id)))?;

    let template = payload.into_template(id, existing.created_utc);
    state.store.put_terms_template(template.clone()).await?;
    Ok(Json(template))
}

pub async fn delete_terms_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.delete_terms_template(id).await? {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "Terms template {} not found",
            id
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

// Cover page templates.

pub async fn list_cover_templates(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.list_cover_templates().await?))
}

pub async fn create_cover_template(
    State(state): State<AppState>,
    Json(payload): Json<CoverPageTemplatePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let template = payload.into_template(Uuid::new_v4(), Utc::now());
    state.store.put_cover_template(template.clone()).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

pub async fn get_cover_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let template = state
        .store
        .get_cover_template(id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(anyhow::anyhow!("Cover page template {} not found", id))
        })?;
    Ok(Json(template))
}

pub async fn update_cover_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CoverPageTemplatePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let existing = state
        .store
        .get_cover_template(id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(anyhow::anyhow!("Cover page template {} not found", id))
        })?;

    let template = payload.into_template(id, existing.created_utc);
    state.store.put_cover_template(template.clone()).await?;
    Ok(Json(template))
}

pub async fn delete_cover_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.delete_cover_template(id).await? {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "Cover page template {} not found",
            id
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}
