//! Document templates: MSA, terms & conditions, and cover pages.
//!
//! Template content is rich-text HTML that may carry `{{...}}` placeholder
//! tokens; tokens are substituted at render time, never at save time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsaTemplate {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    /// Cover page rendered in front of the MSA content when set.
    #[serde(default)]
    pub cover_page_template_id: Option<Uuid>,
    pub created_utc: DateTime<Utc>,
    pub updated_utc: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsTemplate {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub created_utc: DateTime<Utc>,
    pub updated_utc: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverPageTemplate {
    pub id: Uuid,
    pub name: String,
    /// Page title; may contain placeholder tokens.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company_logo_enabled: bool,
    #[serde(default)]
    pub company_logo_url: Option<String>,
    #[serde(default)]
    pub client_logo_enabled: bool,
    #[serde(default)]
    pub client_logo_url: Option<String>,
    #[serde(default)]
    pub additional_image1_enabled: bool,
    #[serde(default)]
    pub additional_image1_url: Option<String>,
    #[serde(default)]
    pub additional_image2_enabled: bool,
    #[serde(default)]
    pub additional_image2_url: Option<String>,
    pub created_utc: DateTime<Utc>,
    pub updated_utc: DateTime<Utc>,
}
