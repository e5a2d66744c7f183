//! Financial aggregation: derives every monetary summary figure from the
//! editable item and charge arrays. Pure and synchronous; callers rerun it on
//! every relevant field change.

use crate::models::{AdditionalCharge, ChargeValueType, LineItem};

/// Summary figures for one document. All fields are finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DocumentTotals {
    pub subtotal: f64,
    pub total_additional_charges: f64,
    pub taxable_amount: f64,
    pub tax_amount: f64,
    pub total: f64,
}

/// Clamp NaN, infinities, and negative intermediates to zero for display.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Derived amount of a single line: quantity times rate.
pub fn item_amount(item: &LineItem) -> f64 {
    sanitize(item.quantity) * sanitize(item.rate)
}

/// Derived amount of one additional charge. Percentage charges are computed
/// against the items subtotal only, never against other charges.
pub fn charge_amount(charge: &AdditionalCharge, items_subtotal: f64) -> f64 {
    let value = sanitize(charge.value);
    match charge.value_type {
        ChargeValueType::Fixed => value,
        ChargeValueType::Percentage => items_subtotal * (value / 100.0),
    }
}

/// Compute all summary figures. The order of operations is fixed: items
/// subtotal, then additional charges, then the taxable amount (minus
/// discount), then tax, then total.
pub fn compute_totals(
    items: &[LineItem],
    additional_charges: &[AdditionalCharge],
    tax_rate: f64,
    discount_amount: f64,
) -> DocumentTotals {
    let subtotal: f64 = items.iter().map(item_amount).sum();
    let total_additional_charges: f64 = additional_charges
        .iter()
        .map(|charge| charge_amount(charge, subtotal))
        .sum();

    let taxable_amount = subtotal + total_additional_charges - sanitize(discount_amount);
    let tax_amount = taxable_amount * (sanitize(tax_rate) / 100.0);
    let total = taxable_amount + tax_amount;

    DocumentTotals {
        subtotal: sanitize(subtotal),
        total_additional_charges: sanitize(total_additional_charges),
        taxable_amount: sanitize(taxable_amount),
        tax_amount: sanitize(tax_amount),
        total: sanitize(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    const EPSILON: f64 = 1e-9;

    fn item(quantity: f64, rate: f64) -> LineItem {
        LineItem {
            id: Uuid::new_v4(),
            description: "line".to_string(),
            quantity,
            rate,
            amount: 0.0,
        }
    }

    fn charge(value_type: ChargeValueType, value: f64) -> AdditionalCharge {
        AdditionalCharge {
            id: Uuid::new_v4(),
            description: "fee".to_string(),
            value_type,
            value,
            calculated_amount: 0.0,
        }
    }

    #[test]
    fn fixed_charge_scenario() {
        // items = [{qty: 2, rate: 50}], fixed charge 10, tax 10%, no discount
        let totals = compute_totals(
            &[item(2.0, 50.0)],
            &[charge(ChargeValueType::Fixed, 10.0)],
            10.0,
            0.0,
        );
        assert!((totals.subtotal - 100.0).abs() < EPSILON);
        assert!((totals.total_additional_charges - 10.0).abs() < EPSILON);
        assert!((totals.taxable_amount - 110.0).abs() < EPSILON);
        assert!((totals.tax_amount - 11.0).abs() < EPSILON);
        assert!((totals.total - 121.0).abs() < EPSILON);
    }

    #[test]
    fn percentage_charge_uses_items_subtotal_only() {
        // 10% of an items subtotal of 200 is 20, regardless of other charges.
        let totals = compute_totals(
            &[item(4.0, 50.0)],
            &[
                charge(ChargeValueType::Fixed, 500.0),
                charge(ChargeValueType::Percentage, 10.0),
            ],
            0.0,
            0.0,
        );
        assert!((totals.subtotal - 200.0).abs() < EPSILON);
        // 500 fixed + 20 percentage; the fixed charge does not compound.
        assert!((totals.total_additional_charges - 520.0).abs() < EPSILON);
    }

    #[test]
    fn discount_reduces_taxable_amount_before_tax() {
        let totals = compute_totals(
            &[item(1.0, 100.0)],
            &[charge(ChargeValueType::Fixed, 20.0)],
            10.0,
            30.0,
        );
        assert!((totals.taxable_amount - 90.0).abs() < EPSILON);
        assert!((totals.tax_amount - 9.0).abs() < EPSILON);
        assert!((totals.total - 99.0).abs() < EPSILON);
    }

    #[test]
    fn totals_identity_holds() {
        let totals = compute_totals(
            &[item(3.0, 19.99), item(1.5, 42.0)],
            &[
                charge(ChargeValueType::Percentage, 5.0),
                charge(ChargeValueType::Fixed, 7.25),
            ],
            8.25,
            5.0,
        );
        let identity = totals.subtotal + totals.total_additional_charges - 5.0 + totals.tax_amount;
        assert!((totals.total - identity).abs() < 1e-6);
    }

    #[test]
    fn oversized_discount_clamps_to_zero_not_negative() {
        let totals = compute_totals(&[], &[charge(ChargeValueType::Fixed, 5.0)], 10.0, 50.0);
        assert!((totals.subtotal - 0.0).abs() < EPSILON);
        assert_eq!(totals.taxable_amount, 0.0);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn non_finite_inputs_are_clamped() {
        let totals = compute_totals(
            &[item(f64::NAN, 10.0), item(2.0, f64::INFINITY)],
            &[charge(ChargeValueType::Percentage, f64::NAN)],
            f64::INFINITY,
            f64::NAN,
        );
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.total_additional_charges, 0.0);
        assert_eq!(totals.taxable_amount, 0.0);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn empty_inputs_produce_zeroes() {
        let totals = compute_totals(&[], &[], 0.0, 0.0);
        assert_eq!(totals, DocumentTotals::default());
    }
}
