//! Modulo 10 checksum of a data line
//!
//! Digits count their value, minus signs count one, and everything else
//! (letters, blanks, periods, plus signs) counts zero.

use crate::{fields::LineNumber, DecodeError};

pub fn checksum(text: &str) -> u8 {
    let sum: u32 = text
        .bytes()
        .map(|b| match b {
            b'0'..=b'9' => u32::from(b - b'0'),
            b'-' => 1,
            _ => 0,
        })
        .sum();
    (sum % 10) as u8
}

/// Compares the trailing checksum digit of `line` with the checksum of
/// everything before it, returning the digit.
pub fn verify(line_number: LineNumber, line: &str) -> Result<u8, DecodeError> {
    let (body, found) = split_checksum(line_number, line)?;
    let computed = checksum(body);
    if computed == found {
        Ok(found)
    } else {
        Err(DecodeError::Checksum {
            line: line_number,
            found,
            computed,
        })
    }
}

/// Splits `line` into the checksummed text and its trailing digit
fn split_checksum(
    line_number: LineNumber,
    line: &str,
) -> Result<(&str, u8), DecodeError> {
    let last = line.chars().last().unwrap_or(' ');
    let found = last.to_digit(10).ok_or(DecodeError::ChecksumCharacter {
        line: line_number,
        found: last,
    })?;
    Ok((&line[..line.len() - last.len_utf8()], found as u8))
}
