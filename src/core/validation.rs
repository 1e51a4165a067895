use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::calculator::compute_invoice_totals;
use super::currencies::is_known_currency_code;
use super::error::ValidationError;
use super::types::*;

/// Largest accepted absolute quantity or unit price. Keeps every product
/// and sum the calculator forms well inside the `Decimal` range.
pub const MAX_MAGNITUDE: Decimal = dec!(1_000_000_000);

/// Check invoice input for business-sensible values before calculating.
/// Returns all validation errors found (not just the first).
///
/// The calculator itself never rejects input; this is the separate
/// pre-validation step for input coming from forms or stored documents.
/// A GST breakdown on a non-GST invoice is ignored by the calculator and
/// is not reported here.
pub fn validate_input(input: &InvoiceInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let currency = input.currency.trim();
    if currency.is_empty() {
        errors.push(ValidationError::new(
            "currency",
            "currency code must not be empty",
        ));
    } else if currency.len() != 3 {
        errors.push(ValidationError::new(
            "currency",
            "currency code must be 3 characters (ISO 4217)",
        ));
    } else if !is_known_currency_code(currency) {
        errors.push(ValidationError::new(
            "currency",
            format!("currency code '{currency}' is not a known ISO 4217 code"),
        ));
    }

    if input.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "invoice must have at least one line item",
        ));
    }

    let mut seen = HashSet::new();
    for (i, item) in input.items.iter().enumerate() {
        validate_item(item, i, &mut errors);
        if !item.id.trim().is_empty() && !seen.insert(item.id.as_str()) {
            errors.push(ValidationError::new(
                format!("items[{i}].id"),
                format!("duplicate line item id '{}'", item.id),
            ));
        }
    }

    check_percent(input.tax_rate, "taxRate", &mut errors);
    if input.tax_type == TaxType::None && !input.tax_rate.is_zero() {
        errors.push(ValidationError::new(
            "taxRate",
            "tax rate must be 0 when tax type is 'none'",
        ));
    }

    if let Some(rate) = input.withholding_tax {
        check_percent(rate, "withholdingTax", &mut errors);
    }

    if let Some(gst) = &input.gst_breakdown {
        for (name, rate) in [("cgst", gst.cgst), ("sgst", gst.sgst), ("igst", gst.igst)] {
            if let Some(rate) = rate {
                check_percent(rate, &format!("gstBreakdown.{name}"), &mut errors);
            }
        }
    }

    errors
}

/// Compare persisted totals against a fresh calculation, at cent precision.
///
/// Stored documents carry `subtotal`, `totalDiscount`, `totalTax` and
/// `totalAmount` next to the items they were computed from; this detects
/// documents whose items were edited without recomputing the totals.
pub fn validate_stored_totals(input: &InvoiceInput, stored: &StoredTotals) -> Vec<ValidationError> {
    let expected = StoredTotals::from(&compute_invoice_totals(input));

    let checks = [
        ("subtotal", stored.subtotal, expected.subtotal),
        ("totalDiscount", stored.total_discount, expected.total_discount),
        ("totalTax", stored.total_tax, expected.total_tax),
        ("totalAmount", stored.total_amount, expected.total_amount),
    ];

    checks
        .into_iter()
        .filter(|(_, actual, expected)| round_half_up(*actual, 2) != round_half_up(*expected, 2))
        .map(|(field, actual, expected)| {
            ValidationError::new(
                field,
                format!(
                    "stored value {actual} does not match calculated {}",
                    round_half_up(expected, 2)
                ),
            )
        })
        .collect()
}

fn validate_item(item: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if item.id.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.id"),
            "line item id must not be empty",
        ));
    }

    if item.quantity < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            format!("quantity {} must not be negative", item.quantity),
        ));
    }

    for (name, value) in [("quantity", item.quantity), ("unitPrice", item.unit_price)] {
        if value.abs() > MAX_MAGNITUDE {
            errors.push(ValidationError::new(
                format!("{prefix}.{name}"),
                format!("{value} exceeds the supported maximum of {MAX_MAGNITUDE}"),
            ));
        }
    }

    if let Some(discount) = item.discount {
        check_percent(discount, &format!("{prefix}.discount"), errors);
    }
    if let Some(rate) = item.tax_rate {
        check_percent(rate, &format!("{prefix}.taxRate"), errors);
    }
}

fn check_percent(value: Decimal, field: &str, errors: &mut Vec<ValidationError>) {
    if value < Decimal::ZERO || value > dec!(100) {
        errors.push(ValidationError::new(
            field,
            format!("{value} is not a percentage between 0 and 100"),
        ));
    }
}

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
