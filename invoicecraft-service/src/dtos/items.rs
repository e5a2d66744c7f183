//! Write payloads for item-repository presets.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::RepositoryItem;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryItemPayload {
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub default_rate: f64,
}

impl RepositoryItemPayload {
    pub fn into_item(self, id: Uuid, created_utc: DateTime<Utc>) -> RepositoryItem {
        RepositoryItem {
            id,
            description: self.description,
            default_rate: self.default_rate,
            created_utc,
            updated_utc: Utc::now(),
        }
    }
}
