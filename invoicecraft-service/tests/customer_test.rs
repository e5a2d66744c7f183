//! Customer CRUD integration tests.

mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::json;

fn customer_payload(name: &str, email: &str) -> serde_json::Value {
    json!({
        "name": name,
        "email": email,
        "phone": "555-0100",
        "currency": "USD",
        "billingAddress": {
            "street": "12 Main St",
            "city": "Springfield",
            "state": "IL",
            "zip": "62704",
            "country": "USA"
        }
    })
}

#[tokio::test]
async fn create_and_fetch_customer() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/customers", app.address))
        .json(&customer_payload("Acme Corp", "billing@acme.test"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 201);

    let created: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let id = created["id"].as_str().expect("missing id").to_string();
    assert_eq!(created["name"], "Acme Corp");
    assert_eq!(created["billingAddress"]["city"], "Springfield");

    let fetched: serde_json::Value = client
        .get(format!("{}/customers/{}", app.address, id))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(fetched["email"], "billing@acme.test");
}

#[tokio::test]
async fn list_customers_is_sorted_by_name() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    for name in ["Zeta Ltd", "alpha GmbH", "Mid Co"] {
        let response = client
            .post(format!("{}/customers", app.address))
            .json(&customer_payload(name, "x@example.test"))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), 201);
    }

    let listed: serde_json::Value = client
        .get(format!("{}/customers", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    let names: Vec<&str> = listed
        .as_array()
        .expect("expected array")
        .iter()
        .map(|c| c["name"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["alpha GmbH", "Mid Co", "Zeta Ltd"]);
}

#[tokio::test]
async fn invalid_email_is_rejected_with_validation_error() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/customers", app.address))
        .json(&json!({ "name": "Bad Email Inc", "email": "not-an-email" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Validation error");
}

#[tokio::test]
async fn update_replaces_customer_fields() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let created: serde_json::Value = client
        .post(format!("{}/customers", app.address))
        .json(&customer_payload("Old Name", "old@example.test"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let id = created["id"].as_str().expect("missing id").to_string();

    let response = client
        .put(format!("{}/customers/{}", app.address, id))
        .json(&customer_payload("New Name", "new@example.test"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 200);

    let updated: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(updated["name"], "New Name");
    assert_eq!(updated["id"].as_str(), Some(id.as_str()));
}

#[tokio::test]
async fn delete_then_fetch_returns_not_found() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let created: serde_json::Value = client
        .post(format!("{}/customers", app.address))
        .json(&customer_payload("Ephemeral", "gone@example.test"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let id = created["id"].as_str().expect("missing id").to_string();

    let deleted = client
        .delete(format!("{}/customers/{}", app.address, id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(deleted.status(), 204);

    let missing = client
        .get(format!("{}/customers/{}", app.address, id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing.status(), 404);
}
