use crate::fields::{Field, LineNumber};
use derive_more::Display;

/// Coarse classification of a [`DecodeError`]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum ErrorKind {
    /// The text does not have the shape of an element set
    Format,
    /// A field's text does not parse as the expected number
    Numeric,
    /// A line's checksum digit is missing or wrong
    Checksum,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid TLE, must have 2 or 3 lines, found {count}:\n{contents}")]
    LineCount { count: usize, contents: String },

    #[error("Line {line} must start with '{line}', found '{found}'")]
    UnexpectedLineNumber { line: LineNumber, found: String },

    #[error(
        "Line {} is too short for the {field} field, {required} characters needed, {len} found",
        .field.line()
    )]
    LineTooShort {
        field: Field,
        required: usize,
        len: usize,
    },

    #[error("Line {} has non-ASCII text in the {field} field", .field.line())]
    NonAscii { field: Field },

    #[error("Invalid Alpha-5 catalog number '{raw}' on line {}", .field.line())]
    Alpha5 { field: Field, raw: String },

    #[error("Line 1 and line 2 catalog numbers do not match ({line1} != {line2})")]
    CatalogNumberMismatch { line1: String, line2: String },

    #[error("Invalid {field} on line {}: '{raw}'", .field.line())]
    Numeric { field: Field, raw: String },

    #[error("Line {line} checksum character '{found}' is not a digit")]
    ChecksumCharacter { line: LineNumber, found: char },

    #[error("Line {line} checksum is invalid, found {found} but computed {computed}")]
    Checksum {
        line: LineNumber,
        found: u8,
        computed: u8,
    },

    #[error("Unrecognized element set text at line {line_number}: '{text}'")]
    UnrecognizedSetContent { line_number: usize, text: String },

    #[error("Element set {index}: {source}")]
    SetEntry {
        index: usize,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        use DecodeError::*;
        match self {
            LineCount { .. }
            | UnexpectedLineNumber { .. }
            | LineTooShort { .. }
            | NonAscii { .. }
            | Alpha5 { .. }
            | CatalogNumberMismatch { .. }
            | UnrecognizedSetContent { .. } => ErrorKind::Format,
            Numeric { .. } => ErrorKind::Numeric,
            ChecksumCharacter { .. } | Checksum { .. } => ErrorKind::Checksum,
            SetEntry { source, .. } => source.kind(),
        }
    }

    pub(crate) fn numeric(field: Field, raw: &str) -> Self {
        DecodeError::Numeric {
            field,
            raw: raw.to_owned(),
        }
    }
}
