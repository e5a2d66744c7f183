//! Prometheus metrics for invoicecraft-service.

use once_cell::sync::Lazy;
use prometheus::{CounterVec, TextEncoder, register_counter_vec};

/// Documents saved, by kind (quote/invoice).
pub static DOCUMENTS_SAVED_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "invoicecraft_documents_saved_total",
        "Total number of documents saved",
        &["kind"]
    )
    .expect("Failed to register documents_saved_total")
});

/// Previews rendered, by kind.
pub static PREVIEWS_RENDERED_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "invoicecraft_previews_rendered_total",
        "Total number of document previews rendered",
        &["kind"]
    )
    .expect("Failed to register previews_rendered_total")
});

/// Error counter for alerting.
pub static ERRORS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "invoicecraft_errors_total",
        "Total number of errors by type",
        &["error_type"]
    )
    .expect("Failed to register errors_total")
});

/// Initialize all metrics (forces lazy initialization).
pub fn init_metrics() {
    Lazy::force(&DOCUMENTS_SAVED_TOTAL);
    Lazy::force(&PREVIEWS_RENDERED_TOTAL);
    Lazy::force(&ERRORS_TOTAL);
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode_to_string(&metric_families)
        .unwrap_or_default()
}
