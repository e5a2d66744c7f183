use crate::config::ServiceConfig;
use crate::handlers;
use crate::services::{InMemoryStore, Store};
use axum::{
    Router, middleware,
    routing::{get, put},
};
use invoicecraft_core::error::AppError;
use invoicecraft_core::middleware::request_id_middleware;
use invoicecraft_core::notify::Notifier;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: ServiceConfig,
    pub store: Arc<dyn Store>,
    pub notifier: Notifier,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: ServiceConfig) -> Result<Self, AppError> {
        let store: Arc<dyn Store> = Arc::new(InMemoryStore::new());
        let notifier = Notifier::new(config.notifications.capacity);

        let state = AppState {
            config: config.clone(),
            store,
            notifier,
        };

        let app = router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/metrics", get(handlers::health::metrics_endpoint))
        .route("/api/status", get(handlers::health::api_status))
        .route(
            "/customers",
            get(handlers::customers::list_customers).post(handlers::customers::create_customer),
        )
        .route(
            "/customers/:id",
            get(handlers::customers::get_customer)
                .put(handlers::customers::update_customer)
                .delete(handlers::customers::delete_customer),
        )
        .route(
            "/item-route",
            get(handlers::items::list_items).post(handlers::items::create_item),
        )
        .route(
            "/item-route/:id",
            get(handlers::items::get_item)
                .put(handlers::items::update_item)
                .delete(handlers::items::delete_item),
        )
        .route(
            "/quotes",
            get(handlers::documents::list_quotes).post(handlers::documents::create_quote),
        )
        .route(
            "/quotes/next-number",
            get(handlers::documents::next_quote_number),
        )
        .route(
            "/quotes/:id",
            get(handlers::documents::get_quote)
                .put(handlers::documents::update_quote)
                .delete(handlers::documents::delete_quote),
        )
        .route(
            "/quotes/:id/terms",
            put(handlers::documents::update_quote_terms),
        )
        .route("/quotes/:id/preview", get(handlers::preview::quote_preview))
        .route(
            "/invoices",
            get(handlers::documents::list_invoices).post(handlers::documents::create_invoice),
        )
        .route(
            "/invoices/next-number",
            get(handlers::documents::next_invoice_number),
        )
        .route(
            "/invoices/:id",
            get(handlers::documents::get_invoice)
                .put(handlers::documents::update_invoice)
                .delete(handlers::documents::delete_invoice),
        )
        .route(
            "/invoices/:id/terms",
            put(handlers::documents::update_invoice_terms),
        )
        .route(
            "/invoices/:id/preview",
            get(handlers::preview::invoice_preview),
        )
        .route(
            "/msa-templates",
            get(handlers::templates::list_msa_templates)
                .post(handlers::templates::create_msa_template),
        )
        .route(
            "/msa-templates/:id",
            get(handlers::templates::get_msa_template)
                .put(handlers::templates::update_msa_template)
                .delete(handlers::templates::delete_msa_template),
        )
        .route(
            "/terms-templates",
            get(handlers::templates::list_terms_templates)
                .post(handlers::templates::create_terms_template),
        )
        .route(
            "/terms-templates/:id",
            get(handlers::templates::get_terms_template)
                .put(handlers::templates::update_terms_template)
                .delete(handlers::templates::delete_terms_template),
        )
        .route(
            "/cover-page-templates",
            get(handlers::templates::list_cover_templates)
                .post(handlers::templates::create_cover_template),
        )
        .route(
            "/cover-page-templates/:id",
            get(handlers::templates::get_cover_template)
                .put(handlers::templates::update_cover_template)
                .delete(handlers::templates::delete_cover_template),
        )
        .route(
            "/branding-settings",
            get(handlers::branding::get_branding).put(handlers::branding::put_branding),
        )
        .route(
            "/notifications/stream",
            get(handlers::notifications::notification_stream),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
