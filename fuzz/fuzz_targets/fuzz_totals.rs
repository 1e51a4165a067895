#![no_main]

use libfuzzer_sys::fuzz_target;
use rechenwerk::core::*;

fuzz_target!(|data: &[u8]| {
    // Validated input must never panic the calculator.
    if let Ok(input) = serde_json::from_slice::<InvoiceInput>(data) {
        if validate_input(&input).is_empty() {
            let totals = compute_invoice_totals(&input);
            assert_eq!(totals.taxable_amount, totals.subtotal - totals.total_discount);
        }
    }
});
