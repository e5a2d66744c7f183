//! Rendered preview integration tests: placeholder substitution, currency
//! display, cover pages, and totals in the printable HTML.

mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::json;

async fn create_customer(app: &TestApp, client: &Client, currency: &str) -> String {
    let created: serde_json::Value = client
        .post(format!("{}/customers", app.address))
        .json(&json!({
            "name": "Globex Corporation",
            "email": "ap@globex.test",
            "currency": currency,
            "billingAddress": {
                "street": "100 Industrial Way",
                "city": "Cypress Creek",
                "state": "OR",
                "zip": "97000",
                "country": "USA"
            },
            "shippingAddress": {
                "street": "200 Dock Road",
                "city": "Cypress Creek",
                "state": "OR",
                "zip": "97001",
                "country": "USA"
            }
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    created["id"].as_str().expect("missing id").to_string()
}

#[tokio::test]
async fn invoice_preview_resolves_placeholders_in_terms() {
    let app = TestApp::spawn().await;
    let client = Client::new();
    let customer_id = create_customer(&app, &client, "USD").await;

    let invoice: serde_json::Value = client
        .post(format!("{}/invoices", app.address))
        .json(&json!({
            "customerId": customer_id,
            "issueDate": "2023-04-29",
            "items": [ { "description": "License", "quantity": 1, "rate": 150.5 } ],
            "taxRate": 0,
            "termsAndConditions":
                "<p>Bill to {{customerName}} for {{totalAmount}} issued {{issueDate}}. {{notAToken}}</p>"
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let id = invoice["id"].as_str().expect("missing id").to_string();

    let response = client
        .get(format!("{}/invoices/{}/preview", app.address, id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 200);

    let html = response.text().await.expect("Failed to read body");
    assert!(html.contains("Bill to Globex Corporation for $150.50 issued April 29th, 2023."));
    // Unrecognized tokens stay as literal text.
    assert!(html.contains("{{notAToken}}"));
    assert!(html.contains("INVOICE"));
    assert!(html.contains("SHIP TO:"));
}

#[tokio::test]
async fn preview_uses_customer_currency_over_document_currency() {
    let app = TestApp::spawn().await;
    let client = Client::new();
    let customer_id = create_customer(&app, &client, "EUR").await;

    let invoice: serde_json::Value = client
        .post(format!("{}/invoices", app.address))
        .json(&json!({
            "customerId": customer_id,
            "currencyCode": "USD",
            "items": [ { "description": "Hosting", "quantity": 1, "rate": 80 } ],
            "taxRate": 0
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let id = invoice["id"].as_str().expect("missing id").to_string();

    let html = client
        .get(format!("{}/invoices/{}/preview", app.address, id))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read body");

    assert!(html.contains("\u{20ac}80.00"));
    assert!(html.contains("Currency:</span> EUR"));
}

#[tokio::test]
async fn preview_renders_cover_page_in_front_of_msa_content() {
    let app = TestApp::spawn().await;
    let client = Client::new();
    let customer_id = create_customer(&app, &client, "USD").await;

    let cover: serde_json::Value = client
        .post(format!("{}/cover-page-templates", app.address))
        .json(&json!({ "name": "Plain Cover" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let cover_id = cover["id"].as_str().expect("missing id").to_string();

    let invoice: serde_json::Value = client
        .post(format!("{}/invoices", app.address))
        .json(&json!({
            "customerId": customer_id,
            "items": [ { "description": "Retainer", "quantity": 1, "rate": 1000 } ],
            "taxRate": 0,
            "msaContent": "<h2>Master Service Agreement</h2>{{signaturePanel}}",
            "msaCoverPageTemplateId": cover_id
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let id = invoice["id"].as_str().expect("missing id").to_string();

    let html = client
        .get(format!("{}/invoices/{}/preview", app.address, id))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read body");

    // Untitled covers fall back to the default page title.
    assert!(html.contains("Service Agreement"));
    assert!(html.contains("Prepared for:"));
    assert!(html.contains("Globex Corporation"));
    assert!(html.contains("Master Service Agreement"));
    // The signature panel token expands to the fixed block.
    assert!(html.contains("Client Signature"));
    assert!(html.contains("Printed Name"));
}

#[tokio::test]
async fn cover_page_is_skipped_without_msa_content() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let cover: serde_json::Value = client
        .post(format!("{}/cover-page-templates", app.address))
        .json(&json!({ "name": "Orphan Cover" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let cover_id = cover["id"].as_str().expect("missing id").to_string();

    let invoice: serde_json::Value = client
        .post(format!("{}/invoices", app.address))
        .json(&json!({
            "items": [ { "description": "Retainer", "quantity": 1, "rate": 10 } ],
            "msaCoverPageTemplateId": cover_id
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let id = invoice["id"].as_str().expect("missing id").to_string();

    let html = client
        .get(format!("{}/invoices/{}/preview", app.address, id))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read body");

    assert!(!html.contains("Prepared for:"));
}

#[tokio::test]
async fn preview_shows_branding_and_totals_block() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    client
        .put(format!("{}/branding-settings", app.address))
        .json(&json!({
            "name": "Revynox LLC",
            "email": "billing@revynox.test"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let invoice: serde_json::Value = client
        .post(format!("{}/invoices", app.address))
        .json(&json!({
            "items": [ { "description": "Audit", "quantity": 2, "rate": 50 } ],
            "additionalCharges": [
                { "description": "Travel", "valueType": "percentage", "value": 10 }
            ],
            "discount": { "enabled": true, "amount": 10, "description": "Loyalty" },
            "taxRate": 10
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let id = invoice["id"].as_str().expect("missing id").to_string();

    let html = client
        .get(format!("{}/invoices/{}/preview", app.address, id))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read body");

    assert!(html.contains("Revynox LLC"));
    assert!(html.contains("Thank you for your business! Questions? Contact billing@revynox.test"));
    // subtotal 100, charges 10, discount 10, taxable 100, tax 10, total 110
    assert!(html.contains("$100.00"));
    assert!(html.contains("Travel (10%)"));
    assert!(html.contains("Discount (Loyalty)"));
    assert!(html.contains("-$10.00"));
    assert!(html.contains("Tax (10%)"));
    assert!(html.contains("$110.00"));
}

#[tokio::test]
async fn quote_preview_uses_quote_labels() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let quote: serde_json::Value = client
        .post(format!("{}/quotes", app.address))
        .json(&json!({
            "expiryDate": "2026-09-30",
            "items": [ { "description": "Sprint", "quantity": 1, "rate": 400 } ]
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let id = quote["id"].as_str().expect("missing id").to_string();

    let html = client
        .get(format!("{}/quotes/{}/preview", app.address, id))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read body");

    assert!(html.contains("QUOTE"));
    assert!(html.contains("Quote #"));
    assert!(html.contains("Expiry Date:"));
    assert!(html.contains("September 30th, 2026"));
    // No customer attached: the bill-to block degrades to N/A.
    assert!(html.contains("N/A"));
}

#[tokio::test]
async fn preview_of_missing_document_is_not_found() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/invoices/00000000-0000-0000-0000-000000000000/preview",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 404);
}
