//! Invoice totals calculation.
//!
//! Order of operations: line discount, then tax (including the GST
//! component override and reverse charge), then withholding. Nothing is
//! rounded here; rounding happens when amounts are presented.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::amount;
use super::types::*;
use super::words::number_to_words;

/// Calculate the full tax breakdown for an invoice.
///
/// This never fails and does not validate: out-of-range percentages or
/// negative quantities are computed literally. Amounts that leave the
/// `Decimal` range saturate at `Decimal::MAX` or `Decimal::MIN`. Run
/// [`validate_input`](super::validate_input) first if the input comes from
/// an untrusted source.
///
/// ```
/// use rechenwerk::core::*;
/// use rust_decimal_macros::dec;
///
/// let input = InvoiceInputBuilder::new("EUR", TaxType::Vat, dec!(21))
///     .add_item(LineItemBuilder::new("1", "Website", dec!(1), dec!(5000)).discount(dec!(10)).build())
///     .add_item(LineItemBuilder::new("2", "Logo", dec!(1), dec!(1000)).build())
///     .add_item(LineItemBuilder::new("3", "Maintenance", dec!(3), dec!(500)).build())
///     .build_unchecked();
///
/// let totals = compute_invoice_totals(&input);
/// assert_eq!(totals.taxable_amount, dec!(7000));
/// assert_eq!(totals.total_tax, dec!(1470));
/// assert_eq!(totals.grand_total, dec!(8470));
/// assert_eq!(totals.total_in_words, "Eight Thousand Four Hundred Seventy EUR Only");
/// ```
pub fn compute_invoice_totals(input: &InvoiceInput) -> TaxBreakdown {
    let line_items: Vec<LineBreakdown> = input
        .items
        .iter()
        .map(|item| line_breakdown(item, input.tax_rate, input.tax_mode))
        .collect();

    let subtotal = amount::sum(line_items.iter().map(|l| l.line_total));
    let total_discount = amount::sum(line_items.iter().map(|l| l.discount));
    let taxable_amount = amount::sub(subtotal, total_discount);
    let mut total_tax = amount::sum(line_items.iter().map(|l| l.tax_amount));

    let gst_breakdown = match (&input.gst_breakdown, input.tax_type) {
        (Some(rates), TaxType::Gst) if rates.has_positive_rate() => {
            let components = gst_components(rates, taxable_amount);
            total_tax = components.total();
            Some(components)
        }
        (Some(_), TaxType::Gst) => None,
        (Some(_), tax_type) => {
            tracing::debug!(
                tax_type = tax_type.code(),
                "ignoring GST breakdown on non-GST invoice"
            );
            None
        }
        (None, _) => None,
    };

    if input.reverse_charge {
        total_tax = Decimal::ZERO;
    }

    let mut grand_total = match input.tax_mode {
        TaxMode::Exclusive => amount::add(taxable_amount, total_tax),
        TaxMode::Inclusive => taxable_amount,
    };

    let mut withheld = Decimal::ZERO;
    if let Some(rate) = input.withholding_tax.filter(|r| *r > Decimal::ZERO) {
        withheld = amount::percent_of(grand_total, rate);
        grand_total = amount::sub(grand_total, withheld);
    }

    let tax_breakdown = if input.reverse_charge || input.tax_type == TaxType::None {
        Vec::new()
    } else {
        vec![TaxLine {
            label: effective_label(input).to_string(),
            rate: input.tax_rate,
            amount: total_tax,
        }]
    };

    tracing::debug!(
        lines = line_items.len(),
        %subtotal,
        %total_tax,
        %withheld,
        %grand_total,
        "computed invoice totals"
    );

    TaxBreakdown {
        subtotal,
        total_discount,
        taxable_amount,
        total_tax,
        withholding_tax: withheld,
        grand_total,
        total_in_words: number_to_words(grand_total, &input.currency),
        line_items,
        tax_breakdown,
        gst_breakdown,
    }
}

/// Default display label for a tax type.
pub fn tax_label(tax_type: TaxType) -> &'static str {
    match tax_type {
        TaxType::Vat => "VAT",
        TaxType::Gst => "GST",
        TaxType::SalesTax => "Sales Tax",
        TaxType::None | TaxType::Custom => "Tax",
    }
}

fn effective_label(input: &InvoiceInput) -> &str {
    match input.custom_tax_label.as_deref() {
        Some(label) if !label.is_empty() => label,
        _ => tax_label(input.tax_type),
    }
}

fn line_breakdown(item: &LineItem, default_rate: Decimal, mode: TaxMode) -> LineBreakdown {
    let line_total = amount::mul(item.quantity, item.unit_price);
    let discount = amount::percent_of(line_total, item.discount.unwrap_or(Decimal::ZERO));
    let discounted_amount = amount::sub(line_total, discount);
    let tax_rate = item.tax_rate.unwrap_or(default_rate);

    let (tax_amount, line_grand_total) = match mode {
        TaxMode::Exclusive => {
            let tax = amount::percent_of(discounted_amount, tax_rate);
            (tax, amount::add(discounted_amount, tax))
        }
        TaxMode::Inclusive => {
            // A rate of -100 would divide by zero; there is no tax to extract then.
            let tax = amount::div_or_zero(
                amount::mul(discounted_amount, tax_rate),
                amount::add(dec!(100), tax_rate),
            );
            (tax, discounted_amount)
        }
    };

    tracing::trace!(line = %item.id, %line_total, %discount, %tax_amount, "line computed");

    LineBreakdown {
        id: item.id.clone(),
        description: item.description.clone(),
        quantity: item.quantity,
        unit_price: item.unit_price,
        line_total,
        discount,
        discounted_amount,
        tax_rate,
        tax_amount,
        line_grand_total,
    }
}

fn gst_components(rates: &GstRates, taxable_amount: Decimal) -> GstBreakdown {
    let component = |rate: Option<Decimal>| {
        rate.filter(|r| !r.is_zero()).map(|rate| GstComponent {
            rate,
            amount: amount::percent_of(taxable_amount, rate),
        })
    };

    GstBreakdown {
        cgst: component(rates.cgst),
        sgst: component(rates.sgst),
        igst: component(rates.igst),
    }
}
