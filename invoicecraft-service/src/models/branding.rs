//! Company branding settings: a single record backing every rendered document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingSettings {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub signature_url: Option<String>,
}

impl BrandingSettings {
    /// Company name shown when branding has not been configured.
    pub fn display_name(&self) -> String {
        non_blank(&self.name).unwrap_or_else(|| "Your Awesome Company LLC".to_string())
    }

    pub fn display_email(&self) -> String {
        non_blank(&self.email).unwrap_or_else(|| "billing@yourcompany.com".to_string())
    }

    pub fn display_phone(&self) -> String {
        non_blank(&self.phone).unwrap_or_else(|| "(555) 123-4567".to_string())
    }

    pub fn display_street(&self) -> String {
        non_blank(&self.street).unwrap_or_else(|| "Your Address Line 1".to_string())
    }

    /// Second address line assembled from city/state/zip/country; empty when
    /// no component is configured.
    pub fn display_locality(&self) -> String {
        let city = non_blank(&self.city).unwrap_or_default();
        let state = non_blank(&self.state).unwrap_or_default();
        let zip = non_blank(&self.zip).unwrap_or_default();
        let country = non_blank(&self.country).unwrap_or_default();

        let mut line = String::new();
        if !city.is_empty() {
            line.push_str(&city);
        }
        if !state.is_empty() || !zip.is_empty() {
            if !line.is_empty() {
                line.push_str(", ");
            }
            line.push_str(state.trim());
            if !zip.is_empty() {
                if !state.is_empty() {
                    line.push(' ');
                }
                line.push_str(&zip);
            }
        }
        if !country.is_empty() {
            if !line.is_empty() {
                line.push_str(", ");
            }
            line.push_str(&country);
        }
        line
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_branding_uses_display_fallbacks() {
        let branding = BrandingSettings::default();
        assert_eq!(branding.display_name(), "Your Awesome Company LLC");
        assert_eq!(branding.display_email(), "billing@yourcompany.com");
        assert_eq!(branding.display_locality(), "");
    }

    #[test]
    fn locality_line_joins_configured_components() {
        let branding = BrandingSettings {
            city: Some("Springfield".to_string()),
            state: Some("IL".to_string()),
            zip: Some("62704".to_string()),
            country: Some("USA".to_string()),
            ..Default::default()
        };
        assert_eq!(branding.display_locality(), "Springfield, IL 62704, USA");
    }

    #[test]
    fn locality_line_with_only_country() {
        let branding = BrandingSettings {
            country: Some("Germany".to_string()),
            ..Default::default()
        };
        assert_eq!(branding.display_locality(), "Germany");
    }
}
