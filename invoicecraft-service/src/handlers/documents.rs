//! Quote and invoice endpoints. Both kinds share one implementation; the
//! route wrappers pin the document kind.

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

use crate::dtos::{DocumentPayload, NextNumberResponse, TermsUpdatePayload};
use crate::models::{Document, DocumentKind};
use crate::services::metrics::{DOCUMENTS_SAVED_TOTAL, ERRORS_TOTAL};
use crate::startup::AppState;

fn not_found(kind: DocumentKind, id: Uuid) -> AppError {
    AppError::NotFound(anyhow::anyhow!("{} {} not found", kind.as_str(), id))
}

/// Denormalize the customer name onto the document so previews and templates
/// can fall back to it when the customer record is gone.
async fn attach_customer_name(state: &AppState, document: &mut Document) -> Result<(), AppError> {
    let blank = document
        .customer_name
        .as_deref()
        .map(|n| n.trim().is_empty())
        .unwrap_or(true);
    if !blank {
        return Ok(());
    }
    if let Some(customer_id) = document.customer_id {
        if let Some(customer) = state.store.get_customer(customer_id).await? {
            document.customer_name = Some(customer.name);
        }
    }
    Ok(())
}

async fn create_document(
    state: AppState,
    kind: DocumentKind,
    payload: DocumentPayload,
) -> Result<(StatusCode, Json<Document>), AppError> {
    payload.validate()?;

    let number = match payload.number.clone().filter(|n| !n.trim().is_empty()) {
        Some(number) => number,
        None => state.store.next_document_number(kind).await?,
    };

    let mut document = payload.into_document(kind, Uuid::new_v4(), number, Utc::now());
    attach_customer_name(&state, &mut document).await?;
    state.store.put_document(document.clone()).await?;

    DOCUMENTS_SAVED_TOTAL
        .with_label_values(&[kind.as_str()])
        .inc();
    tracing::info!(
        document_id = %document.id,
        kind = kind.as_str(),
        number = %document.number,
        total = document.total,
        "document created"
    );
    state.notifier.info(
        &format!("{} Created", heading(kind)),
        &format!("{} has been created.", document.number),
    );

    Ok((StatusCode::CREATED, Json(document)))
}

async fn update_document(
    state: AppState,
    kind: DocumentKind,
    id: Uuid,
    payload: DocumentPayload,
) -> Result<Json<Document>, AppError> {
    payload.validate()?;

    let existing = state
        .store
        .get_document(kind, id)
        .await?
        .ok_or_else(|| not_found(kind, id))?;

    let number = payload
        .number
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| existing.number.clone());

    let mut document = payload.into_document(kind, id, number, existing.created_utc);
    attach_customer_name(&state, &mut document).await?;
    state.store.put_document(document.clone()).await?;

    DOCUMENTS_SAVED_TOTAL
        .with_label_values(&[kind.as_str()])
        .inc();
    tracing::info!(document_id = %id, kind = kind.as_str(), "document updated");
    state.notifier.info(
        &format!("{} Saved", heading(kind)),
        &format!("{} has been saved.", document.number),
    );

    Ok(Json(document))
}

/// Terms-only autosave; leaves every other field untouched.
async fn update_terms(
    state: AppState,
    kind: DocumentKind,
    id: Uuid,
    payload: TermsUpdatePayload,
) -> Result<Json<Document>, AppError> {
    let Some(mut document) = state.store.get_document(kind, id).await? else {
        ERRORS_TOTAL.with_label_values(&["terms_autosave"]).inc();
        state.notifier.error(
            "Auto-Save Failed",
            "Could not auto-save terms and conditions.",
        );
        return Err(not_found(kind, id));
    };

    document.terms_and_conditions = Some(payload.terms_and_conditions);
    document.updated_utc = Utc::now();
    state.store.put_document(document.clone()).await?;

    state.notifier.info(
        "Terms Auto-Saved",
        "Your terms and conditions have been saved.",
    );
    Ok(Json(document))
}

async fn delete_document(
    state: AppState,
    kind: DocumentKind,
    id: Uuid,
) -> Result<StatusCode, AppError> {
    if !state.store.delete_document(kind, id).await? {
        return Err(not_found(kind, id));
    }
    tracing::info!(document_id = %id, kind = kind.as_str(), "document deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn heading(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Quote => "Quote",
        DocumentKind::Invoice => "Invoice",
    }
}

// Quote routes.

pub async fn list_quotes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.list_documents(DocumentKind::Quote).await?))
}

pub async fn create_quote(
    State(state): State<AppState>,
    Json(payload): Json<DocumentPayload>,
) -> Result<impl IntoResponse, AppError> {
    create_document(state, DocumentKind::Quote, payload).await
}

pub async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let document = state
        .store
        .get_document(DocumentKind::Quote, id)
        .await?
        .ok_or_else(|| not_found(DocumentKind::Quote, id))?;
    Ok(Json(document))
}

pub async fn update_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DocumentPayload>,
) -> Result<impl IntoResponse, AppError> {
    update_document(state, DocumentKind::Quote, id, payload).await
}

pub async fn update_quote_terms(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TermsUpdatePayload>,
) -> Result<impl IntoResponse, AppError> {
    update_terms(state, DocumentKind::Quote, id, payload).await
}

pub async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    delete_document(state, DocumentKind::Quote, id).await
}

pub async fn next_quote_number(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let number = state
        .store
        .next_document_number(DocumentKind::Quote)
        .await?;
    Ok(Json(NextNumberResponse { number }))
}

// Invoice routes.

pub async fn list_invoices(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(
        state.store.list_documents(DocumentKind::Invoice).await?,
    ))
}

pub async fn create_invoice(
    State(state): State<AppState>,
    Json(payload): Json<DocumentPayload>,
) -> Result<impl IntoResponse, AppError> {
    create_document(state, DocumentKind::Invoice, payload).await
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let document = state
        .store
        .get_document(DocumentKind::Invoice, id)
        .await?
        .ok_or_else(|| not_found(DocumentKind::Invoice, id))?;
    Ok(Json(document))
}

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DocumentPayload>,
) -> Result<impl IntoResponse, AppError> {
    update_document(state, DocumentKind::Invoice, id, payload).await
}

pub async fn update_invoice_terms(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TermsUpdatePayload>,
) -> Result<impl IntoResponse, AppError> {
    update_terms(state, DocumentKind::Invoice, id, payload).await
}

pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    delete_document(state, DocumentKind::Invoice, id).await
}

pub async fn next_invoice_number(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let number = state
        .store
        .next_document_number(DocumentKind::Invoice)
        .await?;
    Ok(Json(NextNumberResponse { number }))
}
