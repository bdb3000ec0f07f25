// src/common/numeric.rs

//! Permissive parsing for the numeric-looking fields of report rows.
//!
//! The reporting API is not consistent about types: amounts show up as JSON
//! numbers, as text (`"1500.50"`), as `null`, or as garbage. Parsing follows the
//! `parseFloat` / `parseInt` contract the dashboard was written against: leading
//! whitespace is skipped and the longest numeric prefix wins, so `"12abc"` is 12
//! and `"abc"` is nothing.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parses the longest decimal prefix of `text`. `None` when no digit is found.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let bytes = text.trim_start().as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &bytes[int_start..pos];

    let mut frac_digits: &[u8] = &[];
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &bytes[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    // Exponent only counts when at least one digit follows it ("1e" is just 1).
    let mut exponent: Option<&[u8]> = None;
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && (bytes[end] == b'-' || bytes[end] == b'+') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = Some(&bytes[pos + 1..end]);
        }
    }

    let mut mantissa = String::with_capacity(int_digits.len() + frac_digits.len() + 3);
    if negative {
        mantissa.push('-');
    }
    if int_digits.is_empty() {
        mantissa.push('0');
    } else {
        mantissa.push_str(std::str::from_utf8(int_digits).ok()?);
    }
    if !frac_digits.is_empty() {
        mantissa.push('.');
        mantissa.push_str(std::str::from_utf8(frac_digits).ok()?);
    }

    match exponent {
        None => Decimal::from_str(&mantissa).ok(),
        Some(exp) => {
            let exp = std::str::from_utf8(exp).ok()?;
            Decimal::from_scientific(&format!("{mantissa}e{exp}")).ok()
        }
    }
}

/// Parses the leading integer of `text` (sign plus digits).
pub fn parse_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Converts any JSON value into a decimal, the way a `parseFloat` over it would.
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(Decimal::from(u))
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .and_then(|f| Decimal::try_from(f).ok())
            }
        }
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

/// Converts any JSON value into an integer, the way a `parseInt` over it would.
pub fn integer_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else if n.as_u64().is_some() {
                Some(i64::MAX)
            } else {
                n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)
            }
        }
        Value::String(s) => parse_integer(s),
        _ => None,
    }
}

// ---
// Serde helpers: `#[serde(default, deserialize_with = "...")]`
// ---

pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(decimal_from_value)
        .unwrap_or(Decimal::ZERO))
}

pub fn lenient_decimal_opt<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decimal_from_value))
}

pub fn lenient_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(integer_from_value).unwrap_or(0))
}

pub fn lenient_integer_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(integer_from_value))
}

/// Text fields: strings pass through, numbers and booleans are stringified,
/// anything else becomes empty.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}
