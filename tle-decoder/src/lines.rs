//! Splits text into element set lines, one set or a whole catalog

use crate::{fields::LineNumber, DecodeError};
use nom::{
    bytes::complete::{take_till, take_while},
    character::complete::char,
    combinator::{map, opt, verify},
    multi::{many0, many0_count, separated_list1},
    sequence::terminated,
};
use tle_types::prelude::UnstructuredTle;

type ParseResult<I, O, E = nom::error::Error<I>> = std::result::Result<(I, O), nom::Err<E>>;

/// The lines of a single element set, borrowed from the input
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct TleLines<'a> {
    /// The input without surrounding whitespace
    pub contents: &'a str,
    pub name: Option<&'a str>,
    pub line1: &'a str,
    pub line2: &'a str,
}

/// Splits a single element set, with or without a name line
pub fn split_lines(text: &str) -> Result<TleLines<'_>, DecodeError> {
    let contents = text.trim();
    let line_count = |count| DecodeError::LineCount {
        count,
        contents: contents.to_owned(),
    };
    let (_, lines) = text_lines(contents).map_err(|_| line_count(0))?;
    match lines[..] {
        [line1, line2] => Ok(TleLines {
            contents,
            name: None,
            line1,
            line2,
        }),
        [name, line1, line2] => Ok(TleLines {
            contents,
            name: Some(name),
            line1,
            line2,
        }),
        _ => Err(line_count(lines.len())),
    }
}

/// Splits a catalog of element sets, each with an optional name line.
/// Blank lines may separate the entries.
pub fn split_set(text: &str) -> Result<Vec<UnstructuredTle>, DecodeError> {
    let (rest, set) = many0(tle)(text).map_err(|_| unrecognized(text, text))?;
    match rest.split('\n').find(|l| !l.trim().is_empty()) {
        Some(_) => Err(unrecognized(text, rest)),
        None => Ok(set),
    }
}

fn unrecognized(text: &str, rest: &str) -> DecodeError {
    let consumed = &text[..text.len() - rest.len()];
    let (offset, line) = rest
        .split('\n')
        .enumerate()
        .find(|(_, l)| !l.trim().is_empty())
        .unwrap_or((0, rest));
    DecodeError::UnrecognizedSetContent {
        line_number: consumed.matches('\n').count() + offset + 1,
        text: line.trim().to_owned(),
    }
}

fn text_lines(s: &str) -> ParseResult<&str, Vec<&str>> {
    separated_list1(char('\n'), map(take_till(|c: char| c == '\n'), str::trim_end))(s)
}

fn tle(s: &str) -> ParseResult<&str, UnstructuredTle> {
    let (s, _) = many0_count(blank_line)(s)?;
    let (s, name) = opt(name_line)(s)?;
    let (s, line1) = data_line(s, LineNumber::One)?;
    let (s, line2) = data_line(s, LineNumber::Two)?;
    Ok((
        s,
        UnstructuredTle {
            satellite_name: name.map(str::to_owned),
            line1: line1.to_owned(),
            line2: line2.to_owned(),
        },
    ))
}

fn blank_line(s: &str) -> ParseResult<&str, &str> {
    terminated(
        take_while(|c: char| c != '\n' && c.is_whitespace()),
        char('\n'),
    )(s)
}

fn name_line(s: &str) -> ParseResult<&str, &str> {
    let (s, name) = verify(take_till(|c: char| c == '\n'), |l: &str| {
        !l.trim().is_empty()
            && !is_data_line(l, LineNumber::One)
            && !is_data_line(l, LineNumber::Two)
    })(s)?;
    let (s, _) = char('\n')(s)?;
    Ok((s, name.trim()))
}

fn data_line(s: &str, line: LineNumber) -> ParseResult<&str, &str> {
    let (s, text) = verify(take_till(|c: char| c == '\n'), |l: &str| is_data_line(l, line))(s)?;
    let (s, _) = opt(char('\n'))(s)?;
    Ok((s, text.trim_end()))
}

fn is_data_line(text: &str, line: LineNumber) -> bool {
    let mut chars = text.chars();
    chars.next() == Some(line.marker()) && chars.next() == Some(' ')
}
