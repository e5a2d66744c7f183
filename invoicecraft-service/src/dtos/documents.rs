//! Write payloads for quotes and invoices.
//!
//! The payload carries only editable fields; every derived figure is
//! recomputed server-side before the document is stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    AdditionalCharge, ChargeValueType, Discount, Document, DocumentKind, DocumentStatus, LineItem,
};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LineItemPayload {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub quantity: f64,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub rate: f64,
}

impl LineItemPayload {
    fn into_item(self) -> LineItem {
        LineItem {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            description: self.description,
            quantity: self.quantity,
            rate: self.rate,
            amount: 0.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalChargePayload {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub description: String,
    pub value_type: ChargeValueType,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub value: f64,
}

impl AdditionalChargePayload {
    fn into_charge(self) -> AdditionalCharge {
        AdditionalCharge {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            description: self.description,
            value_type: self.value_type,
            value: self.value,
            calculated_amount: 0.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DiscountPayload {
    #[serde(default)]
    pub enabled: bool,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<DiscountPayload> for Discount {
    fn from(payload: DiscountPayload) -> Self {
        Discount {
            enabled: payload.enabled,
            amount: payload.amount,
            description: payload.description,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    /// Assigned from the kind's sequence when omitted.
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub customer_id: Option<Uuid>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[validate(nested)]
    #[serde(default)]
    pub items: Vec<LineItemPayload>,
    #[validate(nested)]
    #[serde(default)]
    pub additional_charges: Vec<AdditionalChargePayload>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub tax_rate: f64,
    #[validate(nested)]
    #[serde(default)]
    pub discount: Option<DiscountPayload>,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub status: Option<DocumentStatus>,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub custom_payment_terms: Option<String>,
    #[serde(default)]
    pub commitment_period: Option<String>,
    #[serde(default)]
    pub custom_commitment_period: Option<String>,
    #[serde(default)]
    pub payment_frequency: Option<String>,
    #[serde(default)]
    pub custom_payment_frequency: Option<String>,
    #[serde(default)]
    pub service_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub service_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub terms_and_conditions: Option<String>,
    #[serde(default)]
    pub msa_content: Option<String>,
    #[serde(default)]
    pub msa_cover_page_template_id: Option<Uuid>,
}

impl DocumentPayload {
    /// Build the storable document. Derived totals are recomputed here so the
    /// totals invariant holds for the stored record.
    pub fn into_document(
        self,
        kind: DocumentKind,
        id: Uuid,
        number: String,
        created_utc: DateTime<Utc>,
    ) -> Document {
        let mut document = Document {
            id,
            kind,
            number,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            issue_date: self.issue_date,
            due_date: self.due_date,
            expiry_date: self.expiry_date,
            items: self.items.into_iter().map(LineItemPayload::into_item).collect(),
            additional_charges: self
                .additional_charges
                .into_iter()
                .map(AdditionalChargePayload::into_charge)
                .collect(),
            tax_rate: self.tax_rate,
            discount: self.discount.map(Discount::from).unwrap_or_default(),
            currency_code: self.currency_code,
            status: self.status.unwrap_or(DocumentStatus::Draft),
            payment_terms: self.payment_terms,
            custom_payment_terms: self.custom_payment_terms,
            commitment_period: self.commitment_period,
            custom_commitment_period: self.custom_commitment_period,
            payment_frequency: self.payment_frequency,
            custom_payment_frequency: self.custom_payment_frequency,
            service_start_date: self.service_start_date,
            service_end_date: self.service_end_date,
            terms_and_conditions: self.terms_and_conditions,
            msa_content: self.msa_content,
            msa_cover_page_template_id: self.msa_cover_page_template_id,
            subtotal: 0.0,
            total_additional_charges: 0.0,
            taxable_amount: 0.0,
            tax_amount: 0.0,
            total: 0.0,
            created_utc,
            updated_utc: Utc::now(),
        };
        document.recalculate();
        document
    }
}

/// Terms-only autosave payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsUpdatePayload {
    pub terms_and_conditions: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextNumberResponse {
    pub number: String,
}
