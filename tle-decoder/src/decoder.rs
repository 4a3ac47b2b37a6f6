use crate::{
    checksum,
    config::DecoderConfig,
    epoch,
    fields::{self, Field, LineNumber},
    lines::{split_lines, split_set, TleLines},
    numeric, DecodeError,
};
use std::str::FromStr;
use tle_types::prelude::*;
use tracing::{debug, trace};

/// Decodes a single element set with the default configuration
pub fn decode(text: &str) -> Result<Tle, DecodeError> {
    Decoder::default().decode(text)
}

/// Decodes every element set of a catalog with the default configuration
pub fn decode_set(text: &str) -> Result<Vec<Tle>, DecodeError> {
    Decoder::default().decode_set(text)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes two lines, or a name line and two lines. Decoding stops at
    /// the first field that fails.
    pub fn decode(&self, text: &str) -> Result<Tle, DecodeError> {
        split_lines(text)
            .and_then(|lines| self.decode_lines(lines))
            .map_err(|e| {
                debug!(error = %e, "Failed to decode element set");
                e
            })
    }

    pub fn decode_unstructured(&self, tle: &UnstructuredTle) -> Result<Tle, DecodeError> {
        let contents = tle.contents();
        self.decode_lines(TleLines {
            contents: &contents,
            name: tle.satellite_name.as_deref(),
            line1: &tle.line1,
            line2: &tle.line2,
        })
    }

    /// Decodes a catalog of element sets in order, stopping at the first
    /// entry that fails
    pub fn decode_set(&self, text: &str) -> Result<Vec<Tle>, DecodeError> {
        split_set(text)?
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                self.decode_unstructured(entry).map_err(|e| {
                    debug!(index, error = %e, "Failed to decode element set entry");
                    DecodeError::SetEntry {
                        index,
                        source: Box::new(e),
                    }
                })
            })
            .collect()
    }

    fn decode_lines(&self, lines: TleLines<'_>) -> Result<Tle, DecodeError> {
        let TleLines {
            contents,
            name,
            line1,
            line2,
        } = lines;

        // Line 1
        expect_line_number(line1, Field::Line1Number)?;
        let catalog_raw = fields::extract(line1, Field::CatalogNumber)?;
        let catalog_id = numeric::parse_catalog_number(Field::CatalogNumber, catalog_raw)?;
        let classification = fields::extract_char(line1, Field::Classification)?;

        let international_designator = InternationalDesignator {
            raw: fields::extract(line1, Field::InternationalDesignator)?.to_owned(),
            launch_year: fields::extract(line1, Field::LaunchYear)?.to_owned(),
            launch_number: fields::extract(line1, Field::LaunchNumber)?.to_owned(),
            launch_piece: fields::extract(line1, Field::LaunchPiece)?.to_owned(),
        };

        let epoch_year = fields::extract(line1, Field::EpochYear)?;
        let epoch_day = fields::extract(line1, Field::EpochDay)?;
        let epoch = Epoch {
            raw: fields::extract(line1, Field::Epoch)?.to_owned(),
            year: epoch_year.to_owned(),
            day: epoch_day.to_owned(),
            timestamp: epoch::epoch_timestamp(
                epoch_year,
                epoch_day,
                self.config.epoch_pivot_year,
            )?,
        };

        let mean_motion_dot = decimal(line1, Field::MeanMotionDot)?;
        let mean_motion_ddot = exponential(line1, Field::MeanMotionDdot)?;
        let bstar = exponential(line1, Field::BStar)?;
        let ephemeris_type = fields::extract_char(line1, Field::EphemerisType)?;
        let element_set_number = integer(line1, Field::ElementSetNumber)?;
        let line1_checksum = checksum_digit(line1, Field::Line1Checksum)?;

        // Line 2
        expect_line_number(line2, Field::Line2Number)?;
        let line2_catalog_raw = fields::extract(line2, Field::Line2CatalogNumber)?;
        let line2_catalog_id =
            numeric::parse_catalog_number(Field::Line2CatalogNumber, line2_catalog_raw)?;
        if line2_catalog_id != catalog_id {
            return Err(DecodeError::CatalogNumberMismatch {
                line1: catalog_raw.to_owned(),
                line2: line2_catalog_raw.to_owned(),
            });
        }

        let elements = OrbitalElements {
            inclination: decimal(line2, Field::Inclination)?,
            right_ascension: decimal(line2, Field::RightAscension)?,
            eccentricity: numeric::parse_eccentricity(fields::raw(line2, Field::Eccentricity)?)?,
            argument_of_perigee: decimal(line2, Field::ArgumentOfPerigee)?,
            mean_anomaly: decimal(line2, Field::MeanAnomaly)?,
            mean_motion: decimal(line2, Field::MeanMotion)?,
            revolution_number: integer(line2, Field::RevolutionNumber)?,
        };
        let line2_checksum = checksum_digit(line2, Field::Line2Checksum)?;

        self.check_checksum(LineNumber::One, line1)?;
        self.check_checksum(LineNumber::Two, line2)?;

        let tle = Tle {
            name: name.map(str::to_owned),
            line1: line1.to_owned(),
            line2: line2.to_owned(),
            contents: contents.to_owned(),
            catalog_number: CatalogNumber {
                raw: catalog_raw.to_owned(),
                id: catalog_id,
            },
            classification: classification.into(),
            international_designator,
            epoch,
            mean_motion_dot,
            mean_motion_ddot,
            bstar,
            ephemeris_type,
            element_set_number,
            line1_checksum,
            elements,
            line2_checksum,
        };
        trace!(catalog_id, epoch = %tle.epoch, "Decoded element set");
        Ok(tle)
    }

    fn check_checksum(&self, line_number: LineNumber, text: &str) -> Result<(), DecodeError> {
        match checksum::verify(line_number, text) {
            Ok(_) => Ok(()),
            Err(DecodeError::Checksum {
                line,
                found,
                computed,
            }) if !self.config.verify_checksums => {
                debug!(%line, found, computed, "Ignoring checksum mismatch");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

fn expect_line_number(line: &str, field: Field) -> Result<(), DecodeError> {
    let marker = fields::raw(line, field)?;
    let expected = field.line();
    if marker.starts_with(expected.marker()) {
        Ok(())
    } else {
        Err(DecodeError::UnexpectedLineNumber {
            line: expected,
            found: marker.to_owned(),
        })
    }
}

fn decimal(line: &str, field: Field) -> Result<f64, DecodeError> {
    numeric::parse_decimal(field, fields::raw(line, field)?)
}

fn exponential(line: &str, field: Field) -> Result<f64, DecodeError> {
    numeric::parse_implied_decimal_exponent(field, fields::raw(line, field)?)
}

fn integer<T: FromStr>(line: &str, field: Field) -> Result<T, DecodeError> {
    numeric::parse_integer(field, fields::raw(line, field)?)
}

fn checksum_digit(line: &str, field: Field) -> Result<u8, DecodeError> {
    let c = fields::extract_char(line, field)?;
    c.to_digit(10)
        .map(|d| d as u8)
        .ok_or(DecodeError::ChecksumCharacter {
            line: field.line(),
            found: c,
        })
}
