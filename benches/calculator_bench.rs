use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use rechenwerk::core::*;

fn build_input(lines: usize, mode: TaxMode) -> InvoiceInput {
    let mut builder = InvoiceInputBuilder::new("EUR", TaxType::Vat, dec!(21)).tax_mode(mode);

    for i in 1..=lines {
        let mut line = LineItemBuilder::new(
            i.to_string(),
            format!("Service item {i}"),
            dec!(5),
            dec!(120),
        );
        if i % 3 == 0 {
            line = line.discount(dec!(10));
        }
        if i % 5 == 0 {
            line = line.tax_rate(dec!(9));
        }
        builder = builder.add_item(line.build());
    }

    builder.build().unwrap()
}

fn build_gst_input(lines: usize) -> InvoiceInput {
    let mut builder = InvoiceInputBuilder::new("INR", TaxType::Gst, dec!(18))
        .gst(GstRates::intra_state(dec!(9), dec!(9)))
        .withholding_tax(dec!(10));

    for i in 1..=lines {
        builder = builder.add_item(
            LineItemBuilder::new(i.to_string(), format!("Item {i}"), dec!(2), dec!(999.99))
                .build(),
        );
    }

    builder.build().unwrap()
}

fn bench_totals_10_lines(c: &mut Criterion) {
    let input = build_input(10, TaxMode::Exclusive);
    c.bench_function("totals_10_lines", |b| {
        b.iter(|| compute_invoice_totals(black_box(&input)))
    });
}

fn bench_totals_1000_lines_inclusive(c: &mut Criterion) {
    let input = build_input(1000, TaxMode::Inclusive);
    c.bench_function("totals_1000_lines_inclusive", |b| {
        b.iter(|| compute_invoice_totals(black_box(&input)))
    });
}

fn bench_totals_gst_withholding(c: &mut Criterion) {
    let input = build_gst_input(100);
    c.bench_function("totals_gst_withholding_100_lines", |b| {
        b.iter(|| compute_invoice_totals(black_box(&input)))
    });
}

fn bench_validate(c: &mut Criterion) {
    let input = build_input(1000, TaxMode::Exclusive);
    c.bench_function("validate_1000_lines", |b| {
        b.iter(|| validate_input(black_box(&input)))
    });
}

fn bench_number_to_words(c: &mut Criterion) {
    let amount = Decimal::new(98_765_432_101, 2);
    c.bench_function("number_to_words", |b| {
        b.iter(|| number_to_words(black_box(amount), "USD"))
    });
}

fn bench_format_currency(c: &mut Criterion) {
    let amount = Decimal::new(98_765_432_101, 2);
    c.bench_function("format_currency", |b| {
        b.iter(|| format_currency(black_box(amount), "EUR"))
    });
}

criterion_group!(
    benches,
    bench_totals_10_lines,
    bench_totals_1000_lines_inclusive,
    bench_totals_gst_withholding,
    bench_validate,
    bench_number_to_words,
    bench_format_currency,
);
criterion_main!(benches);
