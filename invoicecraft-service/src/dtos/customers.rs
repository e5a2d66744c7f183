//! Write payloads for customers.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Address, Customer};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub billing_address: Option<Address>,
    #[serde(default)]
    pub shipping_address: Option<Address>,
}

impl CustomerPayload {
    pub fn into_customer(self, id: Uuid, created_utc: DateTime<Utc>) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            currency: self.currency,
            billing_address: self.billing_address,
            shipping_address: self.shipping_address,
            created_utc,
            updated_utc: Utc::now(),
        }
    }
}
