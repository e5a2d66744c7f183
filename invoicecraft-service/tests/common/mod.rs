use invoicecraft_service::config::ServiceConfig;
use invoicecraft_service::services::init_metrics;
use invoicecraft_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn() -> Self {
        // Metrics are process-wide lazy statics; forcing them here keeps the
        // /metrics endpoint deterministic regardless of test ordering.
        init_metrics();

        let mut config = ServiceConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept requests.
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
