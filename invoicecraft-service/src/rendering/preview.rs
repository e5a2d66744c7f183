//! Printable document previews, assembled server-side.
//!
//! Mirrors the saved document exactly: the preview reads the stored derived
//! totals rather than recomputing them, so what is rendered is what was saved.

use askama::Template;
use invoicecraft_core::error::AppError;

use crate::models::{BrandingSettings, CoverPageTemplate, Customer, Document, DocumentKind};
use crate::rendering::currency::{currency_symbol, format_money};
use crate::rendering::dates::format_long_date;
use crate::rendering::placeholders::resolve_placeholders;

pub struct CompanyView {
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub email: String,
    pub phone: String,
    pub logo_url: String,
    pub signature_url: String,
}

pub struct ItemRow {
    pub description: String,
    pub quantity: String,
    pub rate: String,
    pub amount: String,
}

pub struct ChargeRow {
    pub description: String,
    pub amount: String,
}

pub struct OverviewRow {
    pub label: String,
    pub value: String,
}

#[derive(Template)]
#[template(path = "cover_page.html")]
pub struct CoverPageView {
    pub title: String,
    pub prepared_for: String,
    pub date_line: String,
    pub company_name: String,
    pub has_company_logo: bool,
    pub company_logo_url: String,
    pub has_client_logo: bool,
    pub client_logo_url: String,
    pub has_additional_image1: bool,
    pub additional_image1_url: String,
    pub has_additional_image2: bool,
    pub additional_image2_url: String,
}

#[derive(Template)]
#[template(path = "document_preview.html")]
pub struct DocumentPreviewView {
    pub heading: String,
    pub number_label: String,
    pub number: String,
    pub company: CompanyView,
    pub has_company_logo: bool,
    pub has_company_signature: bool,
    pub has_cover: bool,
    pub cover_html: String,
    pub has_msa: bool,
    pub msa_html: String,
    pub customer_name: String,
    pub customer_email: String,
    pub billing_lines: Vec<String>,
    pub has_shipping: bool,
    pub shipping_lines: Vec<String>,
    pub issue_date: String,
    pub secondary_date_label: String,
    pub secondary_date: String,
    pub status: String,
    pub currency_code: String,
    pub has_overview: bool,
    pub overview_rows: Vec<OverviewRow>,
    pub items: Vec<ItemRow>,
    pub charges: Vec<ChargeRow>,
    pub subtotal: String,
    pub has_charges_total: bool,
    pub charges_total: String,
    pub has_discount: bool,
    pub discount_label: String,
    pub discount_amount: String,
    pub taxable_amount: String,
    pub tax_label: String,
    pub tax_amount: String,
    pub total: String,
    pub has_terms: bool,
    pub terms_html: String,
    pub footer_email: String,
}

const DEFAULT_COMPANY_LOGO: &str = "/images/revynox_logo_black.png";
const DEFAULT_CLIENT_LOGO: &str = "https://placehold.co/150x50.png";

/// Display text for the Custom-capable service/payment fields: the free-text
/// value when written, a "(Not specified)" marker otherwise.
fn overview_field_display(value: &Option<String>, custom: &Option<String>) -> String {
    match value.as_deref() {
        Some("Custom") => match custom.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            Some(custom) => custom.to_string(),
            None => "Custom (Not specified)".to_string(),
        },
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

fn overview_row(label: &str, value: String, rows: &mut Vec<OverviewRow>) {
    if !value.is_empty() && value != "N/A" {
        rows.push(OverviewRow {
            label: label.to_string(),
            value,
        });
    }
}

fn build_cover(
    doc: &Document,
    customer: Option<&Customer>,
    template: &CoverPageTemplate,
    branding: &BrandingSettings,
) -> CoverPageView {
    let title = template
        .title
        .as_deref()
        .and_then(|t| resolve_placeholders(Some(t), doc, customer))
        .unwrap_or_else(|| "Service Agreement".to_string());

    let prepared_for = customer
        .map(|c| c.name.clone())
        .or_else(|| doc.customer_name.clone())
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "Valued Client".to_string());

    let company_logo_url = template
        .company_logo_url
        .clone()
        .or_else(|| branding.logo_url.clone())
        .unwrap_or_else(|| DEFAULT_COMPANY_LOGO.to_string());
    let client_logo_url = template
        .client_logo_url
        .clone()
        .unwrap_or_else(|| DEFAULT_CLIENT_LOGO.to_string());

    let additional_image1_url = template.additional_image1_url.clone().unwrap_or_default();
    let additional_image2_url = template.additional_image2_url.clone().unwrap_or_default();

    CoverPageView {
        title,
        prepared_for,
        date_line: format_long_date(doc.issue_date),
        company_name: branding.display_name(),
        has_company_logo: template.company_logo_enabled,
        company_logo_url,
        has_client_logo: template.client_logo_enabled,
        client_logo_url,
        has_additional_image1: template.additional_image1_enabled
            && !additional_image1_url.is_empty(),
        additional_image1_url,
        has_additional_image2: template.additional_image2_enabled
            && !additional_image2_url.is_empty(),
        additional_image2_url,
    }
}

/// Assemble the full preview for a stored document.
pub fn build_preview(
    doc: &Document,
    customer: Option<&Customer>,
    cover_template: Option<&CoverPageTemplate>,
    branding: &BrandingSettings,
) -> Result<DocumentPreviewView, AppError> {
    let currency_code = customer
        .and_then(|c| c.currency.clone())
        .or_else(|| doc.currency_code.clone())
        .unwrap_or_else(|| "USD".to_string());
    let symbol = currency_symbol(Some(&currency_code));

    // Cover page only renders in front of MSA content, never on its own.
    let cover_html = match (cover_template, doc.msa_content.as_deref()) {
        (Some(template), Some(msa)) if !msa.trim().is_empty() => {
            build_cover(doc, customer, template, branding)
                .render()
                .map_err(|e| AppError::RenderError(anyhow::anyhow!(e)))?
        }
        _ => String::new(),
    };

    let msa_html = resolve_placeholders(doc.msa_content.as_deref(), doc, customer)
        .unwrap_or_default();
    let terms_html = resolve_placeholders(doc.terms_and_conditions.as_deref(), doc, customer)
        .unwrap_or_default();

    let customer_name = doc
        .customer_name
        .clone()
        .or_else(|| customer.map(|c| c.name.clone()))
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "N/A".to_string());
    let customer_email = customer
        .map(|c| c.email.clone())
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| "N/A".to_string());

    let billing_lines = customer
        .and_then(|c| c.billing_address.as_ref())
        .map(|a| {
            vec![
                a.street.clone(),
                format!("{}, {} {}", a.city, a.state, a.zip),
                a.country.clone(),
            ]
        })
        .unwrap_or_default();

    let shipping = customer.and_then(|c| c.shipping_address.as_ref());
    let has_shipping = shipping.map(|a| a.has_location()).unwrap_or(false);
    let shipping_lines = if has_shipping {
        shipping
            .map(|a| {
                vec![
                    a.street.clone(),
                    format!("{}, {} {}", a.city, a.state, a.zip),
                    a.country.clone(),
                ]
            })
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    let mut overview_rows = Vec::new();
    overview_row(
        "Payment Terms",
        overview_field_display(&doc.payment_terms, &doc.custom_payment_terms),
        &mut overview_rows,
    );
    overview_row(
        "Commitment Period",
        overview_field_display(&doc.commitment_period, &doc.custom_commitment_period),
        &mut overview_rows,
    );
    overview_row(
        "Payment Frequency",
        overview_field_display(&doc.payment_frequency, &doc.custom_payment_frequency),
        &mut overview_rows,
    );
    overview_row(
        "Service Start",
        format_long_date(doc.service_start_date),
        &mut overview_rows,
    );
    overview_row(
        "Service End",
        format_long_date(doc.service_end_date),
        &mut overview_rows,
    );

    let items = doc
        .items
        .iter()
        .map(|item| ItemRow {
            description: item.description.clone(),
            quantity: format!("{:.2}", item.quantity),
            rate: format_money(&symbol, item.rate),
            amount: format_money(&symbol, item.amount),
        })
        .collect();

    let charges = doc
        .additional_charges
        .iter()
        .map(|charge| ChargeRow {
            description: match charge.value_type {
                crate::models::ChargeValueType::Percentage => {
                    format!("{} ({}%)", charge.description, charge.value)
                }
                crate::models::ChargeValueType::Fixed => charge.description.clone(),
            },
            amount: format_money(&symbol, charge.calculated_amount),
        })
        .collect();

    let discount_amount = doc.discount.effective_amount();
    let has_discount = discount_amount > 0.0;
    let discount_label = match doc.discount.description.as_deref().map(str::trim) {
        Some(desc) if !desc.is_empty() => format!("Discount ({})", desc),
        _ => "Discount".to_string(),
    };

    let issue_date = match format_long_date(doc.issue_date) {
        s if s.is_empty() => "N/A".to_string(),
        s => s,
    };
    let secondary_date = match format_long_date(doc.secondary_date()) {
        s if s.is_empty() => "N/A".to_string(),
        s => s,
    };

    let (heading, number_label, secondary_date_label) = match doc.kind {
        DocumentKind::Invoice => ("INVOICE", "Invoice #", "Due Date"),
        DocumentKind::Quote => ("QUOTE", "Quote #", "Expiry Date"),
    };

    let company = CompanyView {
        name: branding.display_name(),
        address_line1: branding.display_street(),
        address_line2: branding.display_locality(),
        email: branding.display_email(),
        phone: branding.display_phone(),
        logo_url: branding.logo_url.clone().unwrap_or_default(),
        signature_url: branding.signature_url.clone().unwrap_or_default(),
    };
    let has_company_logo = !company.logo_url.is_empty();
    let has_company_signature = !company.signature_url.is_empty();
    let footer_email = company.email.clone();

    Ok(DocumentPreviewView {
        heading: heading.to_string(),
        number_label: number_label.to_string(),
        number: doc.number.clone(),
        company,
        has_company_logo,
        has_company_signature,
        has_cover: !cover_html.is_empty(),
        cover_html,
        has_msa: !msa_html.is_empty(),
        msa_html,
        customer_name,
        customer_email,
        billing_lines,
        has_shipping,
        shipping_lines,
        issue_date,
        secondary_date_label: secondary_date_label.to_string(),
        secondary_date,
        status: doc.status.as_str().to_string(),
        currency_code,
        has_overview: !overview_rows.is_empty(),
        overview_rows,
        items,
        charges,
        subtotal: format_money(&symbol, doc.subtotal),
        has_charges_total: doc.total_additional_charges > 0.0,
        charges_total: format_money(&symbol, doc.total_additional_charges),
        has_discount,
        discount_label,
        discount_amount: format!("-{}", format_money(&symbol, discount_amount)),
        taxable_amount: format_money(&symbol, doc.taxable_amount),
        tax_label: format!("Tax ({}%)", doc.tax_rate),
        tax_amount: format_money(&symbol, doc.tax_amount),
        total: format_money(&symbol, doc.total),
        has_terms: !terms_html.is_empty(),
        terms_html,
        footer_email,
    })
}
