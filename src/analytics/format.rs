// src/analytics/format.rs

//! Display formatting for amounts and counts (en-PK conventions).
//!
//! Every function here is total: input that is not a finite number renders as
//! the fallback (`"Rs 0"` for money, `"0"` for counts) instead of failing.

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

use crate::common::numeric::{decimal_from_value, integer_from_value, parse_decimal, parse_integer};

pub const CURRENCY_FALLBACK: &str = "Rs 0";
const CURRENCY_PREFIX: &str = "Rs ";

/// Anything that can be shown as an amount. `None` means "not a valid number".
pub trait Amount {
    fn to_amount(&self) -> Option<Decimal>;

    /// Integer reading of the value; text uses integer-prefix parsing.
    fn to_count(&self) -> Option<i64> {
        self.to_amount().and_then(|d| i64::try_from(d.trunc()).ok())
    }
}

impl Amount for Decimal {
    fn to_amount(&self) -> Option<Decimal> {
        Some(*self)
    }
}

impl Amount for f64 {
    fn to_amount(&self) -> Option<Decimal> {
        if self.is_finite() {
            Decimal::try_from(*self).ok()
        } else {
            None
        }
    }
}

macro_rules! integer_amount {
    ($($t:ty),*) => {
        $(
            impl Amount for $t {
                fn to_amount(&self) -> Option<Decimal> {
                    Some(Decimal::from(*self))
                }

                fn to_count(&self) -> Option<i64> {
                    i64::try_from(*self).ok()
                }
            }
        )*
    };
}

integer_amount!(i32, i64, u32, u64, usize);

impl Amount for str {
    fn to_amount(&self) -> Option<Decimal> {
        parse_decimal(self)
    }

    fn to_count(&self) -> Option<i64> {
        parse_integer(self)
    }
}

impl Amount for String {
    fn to_amount(&self) -> Option<Decimal> {
        self.as_str().to_amount()
    }

    fn to_count(&self) -> Option<i64> {
        self.as_str().to_count()
    }
}

impl Amount for Value {
    fn to_amount(&self) -> Option<Decimal> {
        decimal_from_value(self)
    }

    fn to_count(&self) -> Option<i64> {
        integer_from_value(self)
    }
}

impl<T: Amount> Amount for Option<T> {
    fn to_amount(&self) -> Option<Decimal> {
        self.as_ref().and_then(Amount::to_amount)
    }

    fn to_count(&self) -> Option<i64> {
        self.as_ref().and_then(Amount::to_count)
    }
}

impl<T: Amount + ?Sized> Amount for &T {
    fn to_amount(&self) -> Option<Decimal> {
        (**self).to_amount()
    }

    fn to_count(&self) -> Option<i64> {
        (**self).to_count()
    }
}

/// `"Rs 1,501"`: no fraction digits, midpoints rounded away from zero.
pub fn format_currency<T: Amount + ?Sized>(value: &T) -> String {
    let Some(amount) = value.to_amount() else {
        return CURRENCY_FALLBACK.to_string();
    };

    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return CURRENCY_FALLBACK.to_string();
    }

    let digits = integer_digits(&rounded);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("{sign}{CURRENCY_PREFIX}{}", group_thousands(&digits))
}

/// Grouped number with up to three fraction digits: `"1,234.568"`, `"42"`.
pub fn format_number<T: Amount + ?Sized>(value: &T) -> String {
    let Some(amount) = value.to_amount() else {
        return "0".to_string();
    };

    let rounded = amount
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    if rounded.is_zero() {
        return "0".to_string();
    }

    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{}.{frac}", group_thousands(int_part)),
        None => format!("{sign}{}", group_thousands(int_part)),
    }
}

/// Grouped integer count: `"1,240"`. Text is read up to its first non-digit.
pub fn format_count<T: Amount + ?Sized>(value: &T) -> String {
    match value.to_count() {
        Some(count) if count < 0 => format!("-{}", group_thousands(&count.unsigned_abs().to_string())),
        Some(count) => group_thousands(&count.to_string()),
        None => "0".to_string(),
    }
}

/// Label used by the report summaries: `"Rs. 1,500.5"`.
pub fn format_rs_label<T: Amount + ?Sized>(value: &T) -> String {
    format!("Rs. {}", format_number(value))
}

/// One decimal place and a percent sign: `"12.5%"`. Invalid input is `"0%"`.
pub fn format_percent<T: Amount + ?Sized>(value: &T) -> String {
    match value.to_amount() {
        Some(amount) => {
            let mut rounded = amount.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(1);
            format!("{rounded}%")
        }
        None => "0%".to_string(),
    }
}

/// Chart axis tick in thousands: `"Rs 15k"`.
pub fn format_axis_thousands<T: Amount + ?Sized>(value: &T) -> String {
    let thousands = value
        .to_amount()
        .and_then(|amount| amount.checked_div(Decimal::ONE_THOUSAND))
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if thousands.is_zero() {
        return format!("{CURRENCY_PREFIX}0k");
    }

    let sign = if thousands.is_sign_negative() { "-" } else { "" };
    format!("{CURRENCY_PREFIX}{sign}{}k", integer_digits(&thousands))
}

// Absolute integer part of an already-rounded decimal, as plain digits.
fn integer_digits(value: &Decimal) -> String {
    let text = value.abs().trunc().to_string();
    match text.split_once('.') {
        Some((int_part, _)) => int_part.to_string(),
        None => text,
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
