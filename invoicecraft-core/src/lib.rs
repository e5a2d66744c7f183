//! invoicecraft-core: Shared infrastructure for invoicecraft services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod notify;
pub mod observability;

pub use axum;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;
pub use validator;
