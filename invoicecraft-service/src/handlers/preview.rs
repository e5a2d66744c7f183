//! Rendered document previews.

use axum::extract::{Path, State};
use invoicecraft_core::error::AppError;
use uuid::Uuid;

use crate::models::DocumentKind;
use crate::rendering::preview::{DocumentPreviewView, build_preview};
use crate::services::metrics::PREVIEWS_RENDERED_TOTAL;
use crate::startup::AppState;

async fn render_preview(
    state: AppState,
    kind: DocumentKind,
    id: Uuid,
) -> Result<DocumentPreviewView, AppError> {
    let document = state
        .store
        .get_document(kind, id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("{} {} not found", kind.as_str(), id)))?;

    // Referenced records are resolved at render time, never embedded.
    let customer = match document.customer_id {
        Some(customer_id) => state.store.get_customer(customer_id).await?,
        None => None,
    };
    let cover_template = match document.msa_cover_page_template_id {
        Some(template_id) => state.store.get_cover_template(template_id).await?,
        None => None,
    };
    let branding = state.store.get_branding().await?;

    let view = build_preview(
        &document,
        customer.as_ref(),
        cover_template.as_ref(),
        &branding,
    )?;

    PREVIEWS_RENDERED_TOTAL
        .with_label_values(&[kind.as_str()])
        .inc();
    tracing::debug!(document_id = %id, kind = kind.as_str(), "preview rendered");

    Ok(view)
}

pub async fn quote_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<DocumentPreviewView, AppError> {
    render_preview(state, DocumentKind::Quote, id).await
}

pub async fn invoice_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<DocumentPreviewView, AppError> {
    render_preview(state, DocumentKind::Invoice, id).await
}
