//! Fixed-column layout of the two data lines
//!
//! Columns are listed 1-based and inclusive in the published format, the
//! ranges here are the equivalent 0-based half-open byte ranges.

use crate::DecodeError;
use derive_more::Display;
use std::ops::Range;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum LineNumber {
    #[display(fmt = "1")]
    One,
    #[display(fmt = "2")]
    Two,
}

impl LineNumber {
    /// The character expected in column 1
    pub const fn marker(self) -> char {
        match self {
            LineNumber::One => '1',
            LineNumber::Two => '2',
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum Field {
    // Line 1
    #[display(fmt = "line number")]
    Line1Number,
    #[display(fmt = "catalog number")]
    CatalogNumber,
    #[display(fmt = "classification")]
    Classification,
    #[display(fmt = "international designator")]
    InternationalDesignator,
    #[display(fmt = "launch year")]
    LaunchYear,
    #[display(fmt = "launch number")]
    LaunchNumber,
    #[display(fmt = "launch piece")]
    LaunchPiece,
    #[display(fmt = "epoch")]
    Epoch,
    #[display(fmt = "epoch year")]
    EpochYear,
    #[display(fmt = "epoch day")]
    EpochDay,
    #[display(fmt = "mean motion first derivative")]
    MeanMotionDot,
    #[display(fmt = "mean motion second derivative")]
    MeanMotionDdot,
    #[display(fmt = "drag term")]
    BStar,
    #[display(fmt = "ephemeris type")]
    EphemerisType,
    #[display(fmt = "element set number")]
    ElementSetNumber,
    #[display(fmt = "checksum")]
    Line1Checksum,

    // Line 2
    #[display(fmt = "line number")]
    Line2Number,
    #[display(fmt = "catalog number")]
    Line2CatalogNumber,
    #[display(fmt = "inclination")]
    Inclination,
    #[display(fmt = "right ascension")]
    RightAscension,
    #[display(fmt = "eccentricity")]
    Eccentricity,
    #[display(fmt = "argument of perigee")]
    ArgumentOfPerigee,
    #[display(fmt = "mean anomaly")]
    MeanAnomaly,
    #[display(fmt = "mean motion")]
    MeanMotion,
    #[display(fmt = "revolution number")]
    RevolutionNumber,
    #[display(fmt = "checksum")]
    Line2Checksum,
}

impl Field {
    pub const fn line(self) -> LineNumber {
        use Field::*;
        match self {
            Line1Number | CatalogNumber | Classification | InternationalDesignator
            | LaunchYear | LaunchNumber | LaunchPiece | Epoch | EpochYear | EpochDay
            | MeanMotionDot | MeanMotionDdot | BStar | EphemerisType | ElementSetNumber
            | Line1Checksum => LineNumber::One,
            Line2Number | Line2CatalogNumber | Inclination | RightAscension | Eccentricity
            | ArgumentOfPerigee | MeanAnomaly | MeanMotion | RevolutionNumber
            | Line2Checksum => LineNumber::Two,
        }
    }

    pub const fn columns(self) -> Range<usize> {
        use Field::*;
        match self {
            Line1Number => 0..1,
            CatalogNumber => 2..7,
            Classification => 7..8,
            InternationalDesignator => 9..17,
            LaunchYear => 9..11,
            LaunchNumber => 11..14,
            LaunchPiece => 14..17,
            Epoch => 18..32,
            EpochYear => 18..20,
            EpochDay => 20..32,
            MeanMotionDot => 33..43,
            MeanMotionDdot => 44..52,
            BStar => 53..61,
            EphemerisType => 62..63,
            ElementSetNumber => 64..68,
            Line1Checksum => 68..69,

            Line2Number => 0..1,
            Line2CatalogNumber => 2..7,
            Inclination => 8..16,
            RightAscension => 17..25,
            Eccentricity => 26..33,
            ArgumentOfPerigee => 34..42,
            MeanAnomaly => 43..51,
            MeanMotion => 52..63,
            RevolutionNumber => 63..68,
            Line2Checksum => 68..69,
        }
    }
}

/// The untrimmed text of `field`, after checking `line` is long enough
pub fn raw(line: &str, field: Field) -> Result<&str, DecodeError> {
    let columns = field.columns();
    if line.len() < columns.end {
        return Err(DecodeError::LineTooShort {
            field,
            required: columns.end,
            len: line.len(),
        });
    }
    line.get(columns).ok_or(DecodeError::NonAscii { field })
}

/// The text of `field` with surrounding whitespace removed
pub fn extract(line: &str, field: Field) -> Result<&str, DecodeError> {
    raw(line, field).map(str::trim)
}

/// The single character of a one-column field
pub(crate) fn extract_char(line: &str, field: Field) -> Result<char, DecodeError> {
    raw(line, field)?
        .chars()
        .next()
        .ok_or(DecodeError::NonAscii { field })
}
