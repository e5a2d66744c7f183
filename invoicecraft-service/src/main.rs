use invoicecraft_core::observability::init_tracing;
use invoicecraft_service::config::ServiceConfig;
use invoicecraft_service::services::init_metrics;
use invoicecraft_service::startup::Application;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::load()?;

    init_tracing(
        "invoicecraft-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );
    init_metrics();

    let app = Application::build(config).await?;
    tracing::info!(port = app.port(), "invoicecraft-service started");

    tokio::select! {
        result = app.run_until_stopped() => {
            result?;
        }
        _ = shutdown_signal() => {
            tracing::info!("shutdown signal received, stopping");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!("failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
