//! Write payloads for the three template families.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::{CoverPageTemplate, MsaTemplate, TermsTemplate};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MsaTemplatePayload {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover_page_template_id: Option<Uuid>,
}

impl MsaTemplatePayload {
    pub fn into_template(self, id: Uuid, created_utc: DateTime<Utc>) -> MsaTemplate {
        MsaTemplate {
            id,
            name: self.name,
            content: self.content,
            cover_page_template_id: self.cover_page_template_id,
            created_utc,
            updated_utc: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TermsTemplatePayload {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

impl TermsTemplatePayload {
    pub fn into_template(self, id: Uuid, created_utc: DateTime<Utc>) -> TermsTemplate {
        TermsTemplate {
            id,
            name: self.name,
            content: self.content,
            created_utc,
            updated_utc: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CoverPageTemplatePayload {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
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
}

impl CoverPageTemplatePayload {
    pub fn into_template(self, id: Uuid, created_utc: DateTime<Utc>) -> CoverPageTemplate {
        CoverPageTemplate {
            id,
            name: self.name,
            title: self.title,
            company_logo_enabled: self.company_logo_enabled,
            company_logo_url: self.company_logo_url,
            client_logo_enabled: self.client_logo_enabled,
            client_logo_url: self.client_logo_url,
            additional_image1_enabled: self.additional_image1_enabled,
            additional_image1_url: self.additional_image1_url,
            additional_image2_enabled: self.additional_image2_enabled,
            additional_image2_url: self.additional_image2_url,
            created_utc,
            updated_utc: Utc::now(),
        }
    }
}
