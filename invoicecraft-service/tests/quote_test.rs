//! Quote lifecycle and derived-totals integration tests.

mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::json;

const EPSILON: f64 = 1e-6;

fn num(value: &serde_json::Value) -> f64 {
    value.as_f64().unwrap_or(f64::NAN)
}

#[tokio::test]
async fn create_quote_computes_derived_totals() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let payload = json!({
        "issueDate": "2026-08-01",
        "expiryDate": "2026-08-31",
        "items": [ { "description": "Consulting", "quantity": 2, "rate": 50 } ],
        "additionalCharges": [
            { "description": "Expedited Shipping", "valueType": "fixed", "value": 10 }
        ],
        "taxRate": 10
    });

    let response = client
        .post(format!("{}/quotes", app.address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 201);

    let quote: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(quote["kind"], "quote");
    assert_eq!(quote["status"], "Draft");
    assert_eq!(quote["number"], "QUO-001");
    assert!((num(&quote["subtotal"]) - 100.0).abs() < EPSILON);
    assert!((num(&quote["totalAdditionalCharges"]) - 10.0).abs() < EPSILON);
    assert!((num(&quote["taxableAmount"]) - 110.0).abs() < EPSILON);
    assert!((num(&quote["taxAmount"]) - 11.0).abs() < EPSILON);
    assert!((num(&quote["total"]) - 121.0).abs() < EPSILON);
    assert!((num(&quote["items"][0]["amount"]) - 100.0).abs() < EPSILON);
    assert!((num(&quote["additionalCharges"][0]["calculatedAmount"]) - 10.0).abs() < EPSILON);
}

#[tokio::test]
async fn percentage_charge_is_based_on_items_subtotal_only() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let payload = json!({
        "items": [ { "description": "Build", "quantity": 4, "rate": 50 } ],
        "additionalCharges": [
            { "description": "Rush Fee", "valueType": "fixed", "value": 500 },
            { "description": "Handling", "valueType": "percentage", "value": 10 }
        ],
        "taxRate": 0
    });

    let quote: serde_json::Value = client
        .post(format!("{}/quotes", app.address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    // 10% of the 200 items subtotal, unaffected by the 500 fixed charge.
    assert!((num(&quote["additionalCharges"][1]["calculatedAmount"]) - 20.0).abs() < EPSILON);
    assert!((num(&quote["totalAdditionalCharges"]) - 520.0).abs() < EPSILON);
}

#[tokio::test]
async fn quote_numbers_are_assigned_sequentially() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let next: serde_json::Value = client
        .get(format!("{}/quotes/next-number", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(next["number"], "QUO-001");

    for _ in 0..2 {
        let response = client
            .post(format!("{}/quotes", app.address))
            .json(&json!({ "items": [] }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), 201);
    }

    let next: serde_json::Value = client
        .get(format!("{}/quotes/next-number", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(next["number"], "QUO-003");
}

#[tokio::test]
async fn terms_autosave_updates_only_terms() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let created: serde_json::Value = client
        .post(format!("{}/quotes", app.address))
        .json(&json!({
            "items": [ { "description": "Design", "quantity": 1, "rate": 300 } ],
            "taxRate": 5
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let id = created["id"].as_str().expect("missing id").to_string();

    let response = client
        .put(format!("{}/quotes/{}/terms", app.address, id))
        .json(&json!({ "termsAndConditions": "<p>Net 30.</p>" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 200);

    let fetched: serde_json::Value = client
        .get(format!("{}/quotes/{}", app.address, id))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(fetched["termsAndConditions"], "<p>Net 30.</p>");
    // Totals are untouched by the autosave.
    assert!((num(&fetched["total"]) - 315.0).abs() < EPSILON);
}

#[tokio::test]
async fn terms_autosave_on_missing_quote_is_not_found() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .put(format!(
            "{}/quotes/00000000-0000-0000-0000-000000000000/terms",
            app.address
        ))
        .json(&json!({ "termsAndConditions": "<p>orphan</p>" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn validation_rejects_negative_quantities() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/quotes", app.address))
        .json(&json!({
            "items": [ { "description": "Bad", "quantity": -1, "rate": 10 } ]
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 422);
}
