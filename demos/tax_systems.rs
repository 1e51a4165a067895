use rechenwerk::core::*;
use rust_decimal_macros::dec;

fn print(title: &str, input: &InvoiceInput) {
    let totals = compute_invoice_totals(input);
    let money = |amount| format_currency(amount, &input.currency);

    println!("=== {title} ===");
    println!("Subtotal:    {}", money(totals.subtotal));
    println!("Discount:    {}", money(totals.total_discount));
    println!("Taxable:     {}", money(totals.taxable_amount));
    println!("Tax:         {}", money(totals.total_tax));
    if let Some(gst) = &totals.gst_breakdown {
        for (name, component) in [("CGST", gst.cgst), ("SGST", gst.sgst), ("IGST", gst.igst)] {
            if let Some(c) = component {
                println!("  {name} {}%: {}", c.rate, money(c.amount));
            }
        }
    }
    if !totals.withholding_tax.is_zero() {
        println!("Withheld:    {}", money(totals.withholding_tax));
    }
    println!("Grand total: {}", money(totals.grand_total));
    println!("In words:    {}\n", totals.total_in_words);
}

fn main() -> Result<(), InvoiceError> {
    let us = InvoiceInputBuilder::new("USD", TaxType::SalesTax, dec!(8.5))
        .add_item(LineItemBuilder::new("1", "Consulting Services", dec!(40), dec!(150)).build())
        .add_item(
            LineItemBuilder::new("2", "Software License", dec!(1), dec!(500))
                .discount(dec!(20))
                .build(),
        )
        .build()?;
    print("US sales tax (exclusive)", &us);

    let uk = InvoiceInputBuilder::new("GBP", TaxType::Vat, dec!(20))
        .inclusive()
        .add_item(LineItemBuilder::new("1", "Graphic Design Package", dec!(1), dec!(1200)).build())
        .add_item(LineItemBuilder::new("2", "Brand Guidelines", dec!(1), dec!(600)).build())
        .build()?;
    print("UK VAT (inclusive)", &uk);

    let india = InvoiceInputBuilder::new("INR", TaxType::Gst, dec!(18))
        .gst(GstRates::intra_state(dec!(9), dec!(9)))
        .withholding_tax(dec!(10))
        .add_item(LineItemBuilder::new("1", "Professional Services", dec!(1), dec!(50000)).build())
        .build()?;
    print("Indian GST with TDS", &india);

    let eu_b2b = InvoiceInputBuilder::new("EUR", TaxType::Vat, dec!(21))
        .reverse_charge(true)
        .add_item(LineItemBuilder::new("1", "Mobile App Development", dec!(1), dec!(15000)).build())
        .build()?;
    print("EU B2B reverse charge", &eu_b2b);

    let mut numbers = InvoiceNumberSequence::new(
        "SUGE-",
        chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default(),
    );
    println!("Next invoice numbers: {}, {}", numbers.next_number(), numbers.next_number());

    Ok(())
}
