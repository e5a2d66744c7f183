//! Placeholder substitution for template content.
//!
//! Substitutes the known `{{...}}` tokens in rich-text content with values
//! derived from a document and an optional customer record. Unrecognized
//! tokens are left in place as literal text. Substitution never fails:
//! absent context values degrade to empty-string replacements.

use crate::models::{Address, Customer, Document};
use crate::rendering::currency::{currency_symbol, format_money};
use crate::rendering::dates::format_long_date;

/// Fixed two-column company/client signature block; expanded verbatim for
/// `{{signaturePanel}}` instead of a data field.
const SIGNATURE_PANEL_HTML: &str = r#"
    <div style="margin-top: 20px; padding-top: 20px; border-top: 1px solid #eee;">
      <h4 style="margin-bottom: 15px; font-size: 1.1em;">Signatures</h4>
      <table style="width: 100%; border-collapse: collapse; font-size: 0.9em;">
        <tr>
          <td style="width: 50%; padding: 10px 5px; vertical-align: bottom;">
            <div style="border-bottom: 1px solid #333; height: 40px; margin-bottom: 5px;"></div>
            <p style="margin: 0;">Authorized Signature (Your Company)</p>
          </td>
          <td style="width: 50%; padding: 10px 5px; vertical-align: bottom;">
            <div style="border-bottom: 1px solid #333; height: 40px; margin-bottom: 5px;"></div>
            <p style="margin: 0;">Client Signature</p>
          </td>
        </tr>
        <tr>
          <td style="padding: 5px;">
            <p style="margin: 0;">Printed Name: _________________________</p>
          </td>
          <td style="padding: 5px;">
            <p style="margin: 0;">Printed Name: _________________________</p>
          </td>
        </tr>
        <tr>
          <td style="padding: 5px;">
            <p style="margin: 0;">Date: _________________________</p>
          </td>
          <td style="padding: 5px;">
            <p style="margin: 0;">Date: _________________________</p>
          </td>
        </tr>
      </table>
    </div>
"#;

/// "Custom" selections display the free-text field when one was written,
/// otherwise a generic pointer into the document body.
fn custom_field_display(value: &Option<String>, custom: &Option<String>) -> String {
    match value.as_deref() {
        Some("Custom") => match custom.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            Some(custom) => custom.to_string(),
            None => "Custom (Details in document)".to_string(),
        },
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

fn address_part(address: Option<&Address>, pick: fn(&Address) -> &String) -> String {
    address.map(|a| pick(a).clone()).unwrap_or_default()
}

/// Substitute every recognized token in `content`. Blank input resolves to
/// `None` without processing, as does content that is blank after
/// substitution.
pub fn resolve_placeholders(
    content: Option<&str>,
    doc: &Document,
    customer: Option<&Customer>,
) -> Option<String> {
    let content = content?;
    if content.trim().is_empty() {
        return None;
    }

    let symbol = currency_symbol(
        customer
            .and_then(|c| c.currency.as_deref())
            .or(doc.currency_code.as_deref()),
    );
    let billing = customer.and_then(|c| c.billing_address.as_ref());
    let shipping = customer.and_then(|c| c.shipping_address.as_ref());

    let customer_name = customer
        .map(|c| c.name.clone())
        .or_else(|| doc.customer_name.clone())
        .unwrap_or_default();

    let substitutions: [(&str, String); 22] = [
        ("{{customerName}}", customer_name),
        (
            "{{customerEmail}}",
            customer.map(|c| c.email.clone()).unwrap_or_default(),
        ),
        (
            "{{customerPhone}}",
            customer
                .and_then(|c| c.phone.clone())
                .unwrap_or_default(),
        ),
        (
            "{{customerBillingAddress.street}}",
            address_part(billing, |a| &a.street),
        ),
        (
            "{{customerBillingAddress.city}}",
            address_part(billing, |a| &a.city),
        ),
        (
            "{{customerBillingAddress.state}}",
            address_part(billing, |a| &a.state),
        ),
        (
            "{{customerBillingAddress.zip}}",
            address_part(billing, |a| &a.zip),
        ),
        (
            "{{customerBillingAddress.country}}",
            address_part(billing, |a| &a.country),
        ),
        (
            "{{customerShippingAddress.street}}",
            address_part(shipping, |a| &a.street),
        ),
        (
            "{{customerShippingAddress.city}}",
            address_part(shipping, |a| &a.city),
        ),
        (
            "{{customerShippingAddress.state}}",
            address_part(shipping, |a| &a.state),
        ),
        (
            "{{customerShippingAddress.zip}}",
            address_part(shipping, |a| &a.zip),
        ),
        (
            "{{customerShippingAddress.country}}",
            address_part(shipping, |a| &a.country),
        ),
        ("{{documentNumber}}", doc.number.clone()),
        ("{{issueDate}}", format_long_date(doc.issue_date)),
        (
            "{{dueDate}}",
            format_long_date(doc.due_date.or(doc.expiry_date)),
        ),
        ("{{totalAmount}}", format_money(&symbol, doc.total)),
        (
            "{{paymentTerms}}",
            custom_field_display(&doc.payment_terms, &doc.custom_payment_terms),
        ),
        (
            "{{commitmentPeriod}}",
            custom_field_display(&doc.commitment_period, &doc.custom_commitment_period),
        ),
        (
            "{{paymentFrequency}}",
            custom_field_display(&doc.payment_frequency, &doc.custom_payment_frequency),
        ),
        (
            "{{serviceStartDate}}",
            format_long_date(doc.service_start_date),
        ),
        ("{{serviceEndDate}}", format_long_date(doc.service_end_date)),
    ];

    let mut processed = content.to_string();
    for (token, value) in substitutions.iter() {
        if processed.contains(token) {
            processed = processed.replace(token, value);
        }
    }
    if processed.contains("{{signaturePanel}}") {
        processed = processed.replace("{{signaturePanel}}", SIGNATURE_PANEL_HTML);
    }

    if processed.trim().is_empty() {
        None
    } else {
        Some(processed)
    }
}
