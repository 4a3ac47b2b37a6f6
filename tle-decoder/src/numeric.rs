//! Decoders turning raw field text into numbers

use crate::{fields::Field, DecodeError};
use std::str::FromStr;
use tle_types::prelude::CatalogId;

/// A plain base-10 float, sign allowed, leading digit optional (`-.00002182`)
pub fn parse_decimal(field: Field, raw: &str) -> Result<f64, DecodeError> {
    let text = raw.trim();
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DecodeError::numeric(field, text)),
    }
}

pub fn parse_integer<T: FromStr>(field: Field, raw: &str) -> Result<T, DecodeError> {
    let text = raw.trim();
    text.parse::<T>()
        .map_err(|_| DecodeError::numeric(field, text))
}

/// Rewrites the implied-decimal exponential notation (`-11606-4`) into
/// a literal float (`-0.11606e-4`).
///
/// The token is an optional sign, five mantissa digits following an
/// implied "0." and a signed single-digit exponent.
pub fn implied_decimal_exponent(raw: &str) -> Option<String> {
    let token = raw.trim();
    let (sign, digits) = match token.chars().next()? {
        '+' | '-' => token.split_at(1),
        _ => ("+", token),
    };
    if digits.len() != 7 || !digits.is_ascii() {
        return None;
    }
    let (mantissa, exponent) = digits.split_at(5);
    Some(format!("{sign}0.{mantissa}e{exponent}"))
}

pub fn parse_implied_decimal_exponent(field: Field, raw: &str) -> Result<f64, DecodeError> {
    implied_decimal_exponent(raw)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| DecodeError::numeric(field, raw.trim()))
}

/// Eccentricity has an implied leading decimal point, the leading zeros of
/// the field are significant so it is not trimmed.
pub fn parse_eccentricity(raw: &str) -> Result<f64, DecodeError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::numeric(Field::Eccentricity, raw));
    }
    format!("0.{raw}")
        .parse()
        .map_err(|_| DecodeError::numeric(Field::Eccentricity, raw))
}

/// Two-digit prefix of an Alpha-5 letter. `I` and `O` are never used.
pub const fn alpha5_prefix(letter: char) -> Option<u32> {
    let c = letter as u32;
    match letter {
        'A'..='H' => Some(10 + c - 'A' as u32),
        'J'..='N' => Some(18 + c - 'J' as u32),
        'P'..='Z' => Some(23 + c - 'P' as u32),
        _ => None,
    }
}

/// Catalog number, plain digits or Alpha-5 (`Z5544` is 335544)
pub fn parse_catalog_number(field: Field, raw: &str) -> Result<CatalogId, DecodeError> {
    let text = raw.trim();
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_digit() => parse_integer(field, text),
        Some(first) => {
            let prefix = alpha5_prefix(first).ok_or_else(|| DecodeError::Alpha5 {
                field,
                raw: text.to_owned(),
            })?;
            format!("{prefix}{}", chars.as_str())
                .parse()
                .map_err(|_| DecodeError::numeric(field, text))
        }
        None => Err(DecodeError::numeric(field, text)),
    }
}
