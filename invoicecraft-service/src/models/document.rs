//! Document model: quotes and invoices share one shape.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rendering::totals::{charge_amount, compute_totals, item_amount};

/// Which ledger a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Quote,
    Invoice,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Quote => "quote",
            DocumentKind::Invoice => "invoice",
        }
    }

    /// Prefix used when assigning the next document number.
    pub fn number_prefix(&self) -> &'static str {
        match self {
            DocumentKind::Quote => "QUO",
            DocumentKind::Invoice => "INV",
        }
    }
}

/// Document lifecycle status. Quotes use Draft/Sent/Accepted/Declined/Expired,
/// invoices use Draft/Sent/Paid/Overdue; unknown strings fall back to Draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    Draft,
    Sent,
    Accepted,
    Declined,
    Expired,
    Paid,
    Overdue,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "Draft",
            DocumentStatus::Sent => "Sent",
            DocumentStatus::Accepted => "Accepted",
            DocumentStatus::Declined => "Declined",
            DocumentStatus::Expired => "Expired",
            DocumentStatus::Paid => "Paid",
            DocumentStatus::Overdue => "Overdue",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "Sent" => DocumentStatus::Sent,
            "Accepted" => DocumentStatus::Accepted,
            "Declined" => DocumentStatus::Declined,
            "Expired" => DocumentStatus::Expired,
            "Paid" => DocumentStatus::Paid,
            "Overdue" => DocumentStatus::Overdue,
            _ => DocumentStatus::Draft,
        }
    }
}

/// A billable line on a document. `amount` is derived and recomputed on save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: Uuid,
    pub description: String,
    pub quantity: f64,
    pub rate: f64,
    #[serde(default)]
    pub amount: f64,
}

/// Fee lines are either a flat amount or a percentage of the items subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeValueType {
    Fixed,
    Percentage,
}

/// A fee applied before tax. `calculated_amount` is derived and recomputed on save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalCharge {
    pub id: Uuid,
    pub description: String,
    pub value_type: ChargeValueType,
    pub value: f64,
    #[serde(default)]
    pub calculated_amount: f64,
}

/// Discount applied to the taxable base, after additional charges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl Discount {
    /// The amount that actually reduces the taxable base.
    pub fn effective_amount(&self) -> f64 {
        if self.enabled && self.amount.is_finite() && self.amount > 0.0 {
            self.amount
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub kind: DocumentKind,
    pub number: String,
    #[serde(default)]
    pub customer_id: Option<Uuid>,
    /// Denormalized at save time; the placeholder resolver falls back to it
    /// when the customer record cannot be resolved.
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub additional_charges: Vec<AdditionalCharge>,
    #[serde(default)]
    pub tax_rate: f64,
    #[serde(default)]
    pub discount: Discount,
    #[serde(default)]
    pub currency_code: Option<String>,
    pub status: DocumentStatus,
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
    // Derived summary figures; recomputed on every save.
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub total_additional_charges: f64,
    #[serde(default)]
    pub taxable_amount: f64,
    #[serde(default)]
    pub tax_amount: f64,
    #[serde(default)]
    pub total: f64,
    pub created_utc: DateTime<Utc>,
    pub updated_utc: DateTime<Utc>,
}

impl Document {
    /// Recompute every derived figure in place: per-item amounts, per-charge
    /// calculated amounts, and the summary totals. Must run before a document
    /// is stored or rendered so the totals invariant holds.
    pub fn recalculate(&mut self) {
        let totals = compute_totals(
            &self.items,
            &self.additional_charges,
            self.tax_rate,
            self.discount.effective_amount(),
        );

        for item in &mut self.items {
            item.amount = item_amount(item);
        }
        for charge in &mut self.additional_charges {
            charge.calculated_amount = charge_amount(charge, totals.subtotal);
        }

        self.subtotal = totals.subtotal;
        self.total_additional_charges = totals.total_additional_charges;
        self.taxable_amount = totals.taxable_amount;
        self.tax_amount = totals.tax_amount;
        self.total = totals.total;
    }

    /// The date a preview's secondary date column shows: due date for
    /// invoices, expiry date for quotes.
    pub fn secondary_date(&self) -> Option<NaiveDate> {
        match self.kind {
            DocumentKind::Invoice => self.due_date,
            DocumentKind::Quote => self.expiry_date,
        }
    }
}
