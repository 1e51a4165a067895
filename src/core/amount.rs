//! Saturating amount arithmetic.
//!
//! `Decimal` operators panic when a result leaves the representable range.
//! The calculator must return a result for any input, so results that
//! overflow clamp to `Decimal::MAX` or `Decimal::MIN` instead.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn saturated(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

pub(crate) fn mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b)
        .unwrap_or_else(|| saturated(a.is_sign_negative() != b.is_sign_negative()))
}

pub(crate) fn add(a: Decimal, b: Decimal) -> Decimal {
    // Overflow needs both operands on the same side of zero.
    a.checked_add(b)
        .unwrap_or_else(|| saturated(a.is_sign_negative()))
}

pub(crate) fn sub(a: Decimal, b: Decimal) -> Decimal {
    add(a, -b)
}

/// `a / b`, or zero when `b` is zero.
pub(crate) fn div_or_zero(a: Decimal, b: Decimal) -> Decimal {
    if b.is_zero() {
        return Decimal::ZERO;
    }
    a.checked_div(b)
        .unwrap_or_else(|| saturated(a.is_sign_negative() != b.is_sign_negative()))
}

/// `amount * percent / 100`.
pub(crate) fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    // Dividing by 100 only shrinks the magnitude.
    mul(amount, percent) / dec!(100)
}

pub(crate) fn sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values.into_iter().fold(Decimal::ZERO, add)
}
