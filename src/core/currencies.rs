//! ISO 4217 currency codes and display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Check whether `code` is a known ISO 4217 currency code.
pub fn is_known_currency_code(code: &str) -> bool {
    CURRENCIES.binary_search_by(|c| c.code.cmp(code)).is_ok()
}

/// Number of minor-unit digits shown for a currency (2 unless listed otherwise).
pub fn minor_digits(code: &str) -> u32 {
    lookup(code).map_or(2, |c| c.minor_digits)
}

/// Format an amount for display, en-US style.
///
/// Uses the currency symbol where one is common (`$`, `€`, `£`, `₹`, ...),
/// otherwise the code followed by a space. Rounds half away from zero to
/// the currency's minor unit and groups thousands with commas.
///
/// ```
/// use rechenwerk::core::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(8470), "EUR"), "€8,470.00");
/// assert_eq!(format_currency(dec!(-1234.5), "USD"), "-$1,234.50");
/// assert_eq!(format_currency(dec!(1234.5), "JPY"), "¥1,235");
/// assert_eq!(format_currency(dec!(99.9), "CHF"), "CHF 99.90");
/// ```
pub fn format_currency(amount: Decimal, code: &str) -> String {
    let digits = minor_digits(code);
    let mut rounded = amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(digits);

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = rounded.abs().to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    match lookup(code).and_then(|c| c.symbol) {
        Some(symbol) => format!("{sign}{symbol}{grouped}"),
        None => format!("{sign}{code} {grouped}"),
    }
}

struct Currency {
    code: &'static str,
    symbol: Option<&'static str>,
    minor_digits: u32,
}

const fn cur(code: &'static str, symbol: Option<&'static str>, minor_digits: u32) -> Currency {
    Currency {
        code,
        symbol,
        minor_digits,
    }
}

fn lookup(code: &str) -> Option<&'static Currency> {
    CURRENCIES
        .binary_search_by(|c| c.code.cmp(code))
        .ok()
        .map(|i| &CURRENCIES[i])
}

/// Common ISO 4217 currencies. Sorted by code for binary search.
static CURRENCIES: &[Currency] = &[
    cur("AED", None, 2),          // UAE Dirham
    cur("AUD", Some("A$"), 2),    // Australian Dollar
    cur("BGN", None, 2),          // Bulgarian Lev
    cur("BRL", Some("R$"), 2),    // Brazilian Real
    cur("CAD", Some("CA$"), 2),   // Canadian Dollar
    cur("CHF", None, 2),          // Swiss Franc
    cur("CNY", Some("CN¥"), 2),   // Chinese Yuan
    cur("CZK", None, 2),          // Czech Koruna
    cur("DKK", None, 2),          // Danish Krone
    cur("EGP", None, 2),          // Egyptian Pound
    cur("EUR", Some("€"), 2),     // Euro
    cur("GBP", Some("£"), 2),     // Pound Sterling
    cur("HKD", Some("HK$"), 2),   // Hong Kong Dollar
    cur("HUF", None, 2),          // Hungarian Forint
    cur("IDR", None, 2),          // Indonesian Rupiah
    cur("ILS", Some("₪"), 2),     // Israeli Shekel
    cur("INR", Some("₹"), 2),     // Indian Rupee
    cur("ISK", None, 0),          // Icelandic Krona
    cur("JPY", Some("¥"), 0),     // Japanese Yen
    cur("KES", None, 2),          // Kenyan Shilling
    cur("KRW", Some("₩"), 0),     // South Korean Won
    cur("MXN", Some("MX$"), 2),   // Mexican Peso
    cur("MYR", None, 2),          // Malaysian Ringgit
    cur("NGN", None, 2),          // Nigerian Naira
    cur("NOK", None, 2),          // Norwegian Krone
    cur("NZD", Some("NZ$"), 2),   // New Zealand Dollar
    cur("PHP", Some("₱"), 2),     // Philippine Peso
    cur("PKR", None, 2),          // Pakistani Rupee
    cur("PLN", None, 2),          // Polish Zloty
    cur("RON", None, 2),          // Romanian Leu
    cur("SAR", None, 2),          // Saudi Riyal
    cur("SEK", None, 2),          // Swedish Krona
    cur("SGD", None, 2),          // Singapore Dollar
    cur("THB", None, 2),          // Thai Baht
    cur("TRY", None, 2),          // Turkish Lira
    cur("TWD", Some("NT$"), 2),   // New Taiwan Dollar
    cur("UAH", None, 2),          // Ukrainian Hryvnia
    cur("USD", Some("$"), 2),     // US Dollar
    cur("VND", Some("₫"), 0),     // Vietnamese Dong
    cur("ZAR", None, 2),          // South African Rand
];
