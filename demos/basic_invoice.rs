use rechenwerk::core::*;
use rust_decimal_macros::dec;

fn main() {
    // EU VAT invoice with a discounted line
    let input = InvoiceInputBuilder::new("EUR", TaxType::Vat, dec!(21))
        .add_item(
            LineItemBuilder::new("1", "Website Design & Development", dec!(1), dec!(5000))
                .discount(dec!(10))
                .build(),
        )
        .add_item(LineItemBuilder::new("2", "Logo Design", dec!(1), dec!(1000)).build())
        .add_item(
            LineItemBuilder::new("3", "Monthly Maintenance (3 months)", dec!(3), dec!(500))
                .build(),
        )
        .build()
        .expect("invoice input should be valid");

    let totals = compute_invoice_totals(&input);
    let money = |amount| format_currency(amount, &input.currency);

    for line in &totals.line_items {
        println!(
            "  {} x {} @ {} = {} (discount {}, tax {})",
            line.quantity,
            line.description,
            money(line.unit_price),
            money(line.line_grand_total),
            money(line.discount),
            money(line.tax_amount)
        );
    }
    println!("---");
    println!("Subtotal: {}", money(totals.subtotal));
    println!("Discount: {}", money(totals.total_discount));
    println!("Taxable:  {}", money(totals.taxable_amount));
    for tax in &totals.tax_breakdown {
        println!("{} {}%: {}", tax.label, tax.rate, money(tax.amount));
    }
    println!("Total:    {}", money(totals.grand_total));
    println!("In words: {}", totals.total_in_words);
}
