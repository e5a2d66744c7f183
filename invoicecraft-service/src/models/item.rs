//! Item repository: reusable line-item presets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryItem {
    pub id: Uuid,
    pub description: String,
    /// Rate prefilled when the preset is added to a document.
    pub default_rate: f64,
    pub created_utc: DateTime<Utc>,
    pub updated_utc: DateTime<Utc>,
}
