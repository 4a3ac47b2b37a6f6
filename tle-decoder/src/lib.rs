//! Decoder for two-line element sets
//! https://en.wikipedia.org/wiki/Two-line_element_set

pub use crate::config::{ConfigError, DecoderConfig};
pub use crate::decoder::{decode, decode_set, Decoder};
pub use crate::error::{DecodeError, ErrorKind};
pub use crate::fields::{Field, LineNumber};
pub use crate::lines::{split_lines, split_set, TleLines};
pub use tle_types::prelude::*;

pub mod checksum;
pub mod config;
mod decoder;
pub mod epoch;
mod error;
pub mod fields;
pub mod lines;
pub mod numeric;
