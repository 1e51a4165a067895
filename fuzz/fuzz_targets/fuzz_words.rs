#![no_main]

use libfuzzer_sys::fuzz_target;
use rechenwerk::core::*;
use rust_decimal::Decimal;

fuzz_target!(|input: (i64, u8)| {
    let (mantissa, scale) = input;
    let amount = Decimal::new(mantissa, u32::from(scale % 29));
    let _ = number_to_words(amount, "EUR");
    let _ = format_currency(amount, "JPY");
});
