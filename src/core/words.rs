//! Amount-in-words for the "total in words" line of an invoice.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

// Short scale. Decimal tops out below 10^29, so Octillion is the last one needed.
const SCALES: [&str; 10] = [
    "",
    "Thousand",
    "Million",
    "Billion",
    "Trillion",
    "Quadrillion",
    "Quintillion",
    "Sextillion",
    "Septillion",
    "Octillion",
];

/// Spell out an amount in English, followed by the currency code.
///
/// The amount is rounded to cents first. Whole amounts end in "Only",
/// amounts with cents end in "and NN/100".
///
/// ```
/// use rechenwerk::core::number_to_words;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(number_to_words(dec!(0), "USD"), "Zero USD");
/// assert_eq!(number_to_words(dec!(1250), "EUR"), "One Thousand Two Hundred Fifty EUR Only");
/// assert_eq!(number_to_words(dec!(19.99), "GBP"), "Nineteen GBP and 99/100");
/// ```
pub fn number_to_words(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return format!("Zero {currency}");
    }
    if rounded.is_sign_negative() {
        return format!("Minus {}", number_to_words(-rounded, currency));
    }

    let whole = rounded.trunc();
    let cents = ((rounded - whole) * Decimal::ONE_HUNDRED).to_u32().unwrap_or(0);
    let words = match whole.to_u128().unwrap_or(0) {
        0 => "Zero".to_string(),
        n => integer_to_words(n),
    };

    if cents > 0 {
        format!("{words} {currency} and {cents:02}/100")
    } else {
        format!("{words} {currency} Only")
    }
}

fn integer_to_words(mut n: u128) -> String {
    let mut chunks = Vec::new();
    let mut scale = 0;

    while n > 0 {
        let chunk = (n % 1000) as usize;
        if chunk != 0 {
            let words = below_thousand(chunk);
            chunks.push(match SCALES[scale] {
                "" => words,
                name => format!("{words} {name}"),
            });
        }
        n /= 1000;
        scale += 1;
    }

    chunks.reverse();
    chunks.join(" ")
}

fn below_thousand(n: usize) -> String {
    match n {
        0..20 => ONES[n].to_string(),
        20..100 => match n % 10 {
            0 => TENS[n / 10].to_string(),
            unit => format!("{} {}", TENS[n / 10], ONES[unit]),
        },
        _ => match n % 100 {
            0 => format!("{} Hundred", ONES[n / 100]),
            rest => format!("{} Hundred {}", ONES[n / 100], below_thousand(rest)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero() {
        assert_eq!(number_to_words(Decimal::ZERO, "USD"), "Zero USD");
        assert_eq!(number_to_words(dec!(0.004), "USD"), "Zero USD");
    }

    #[test]
    fn small_numbers() {
        assert_eq!(number_to_words(dec!(1), "USD"), "One USD Only");
        assert_eq!(number_to_words(dec!(13), "USD"), "Thirteen USD Only");
        assert_eq!(number_to_words(dec!(40), "USD"), "Forty USD Only");
        assert_eq!(number_to_words(dec!(99), "USD"), "Ninety Nine USD Only");
    }

    #[test]
    fn hundreds() {
        assert_eq!(number_to_words(dec!(100), "USD"), "One Hundred USD Only");
        assert_eq!(number_to_words(dec!(101), "USD"), "One Hundred One USD Only");
        assert_eq!(
            number_to_words(dec!(999), "USD"),
            "Nine Hundred Ninety Nine USD Only"
        );
    }

    #[test]
    fn scales_skip_empty_chunks() {
        assert_eq!(
            number_to_words(dec!(1000000), "INR"),
            "One Million INR Only"
        );
        assert_eq!(
            number_to_words(dec!(2000005), "INR"),
            "Two Million Five INR Only"
        );
        assert_eq!(
            number_to_words(dec!(147500), "INR"),
            "One Hundred Forty Seven Thousand Five Hundred INR Only"
        );
        assert_eq!(
            number_to_words(dec!(3000000000), "USD"),
            "Three Billion USD Only"
        );
    }

    #[test]
    fn beyond_billion() {
        assert_eq!(
            number_to_words(dec!(1000000000000), "USD"),
            "One Trillion USD Only"
        );
        assert!(number_to_words(Decimal::MAX, "USD").starts_with("Seventy Nine Octillion"));
    }

    #[test]
    fn cents() {
        assert_eq!(
            number_to_words(dec!(1234.56), "EUR"),
            "One Thousand Two Hundred Thirty Four EUR and 56/100"
        );
        assert_eq!(number_to_words(dec!(7.05), "EUR"), "Seven EUR and 05/100");
        assert_eq!(number_to_words(dec!(0.5), "EUR"), "Zero EUR and 50/100");
    }

    #[test]
    fn rounds_to_cents_half_up() {
        assert_eq!(number_to_words(dec!(10.005), "USD"), "Ten USD and 01/100");
        assert_eq!(number_to_words(dec!(10.004), "USD"), "Ten USD Only");
        assert_eq!(number_to_words(dec!(9.999), "USD"), "Ten USD Only");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(number_to_words(dec!(-42), "USD"), "Minus Forty Two USD Only");
        assert_eq!(
            number_to_words(dec!(-0.25), "USD"),
            "Minus Zero USD and 25/100"
        );
    }
}
