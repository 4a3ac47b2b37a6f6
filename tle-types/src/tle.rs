use crate::{
    catalog::{CatalogId, CatalogNumber, Classification},
    designator::InternationalDesignator,
    epoch::Epoch,
    orbit::OrbitalElements,
    time::UtcTimestamp,
};
use derive_more::Display;

/// Unstructured TLE
/// https://en.wikipedia.org/wiki/Two-line_element_set
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct UnstructuredTle {
    pub satellite_name: Option<String>,
    pub line1: String,
    pub line2: String,
}

impl UnstructuredTle {
    /// The entry as a single text block, name line first
    pub fn contents(&self) -> String {
        match &self.satellite_name {
            Some(name) => format!("{name}\n{}\n{}", self.line1, self.line2),
            None => format!("{}\n{}", self.line1, self.line2),
        }
    }
}

/// A decoded two-line element set
#[derive(Clone, PartialEq, Debug, Display)]
#[display(
    fmt = "{{catalog_number: {}, name: {:?}, epoch: {}, elements: {}, ...}}",
    "catalog_number",
    "name",
    "epoch",
    "elements"
)]
pub struct Tle {
    /// Present for three-line input
    pub name: Option<String>,

    /// Data line 1, verbatim
    pub line1: String,
    /// Data line 2, verbatim
    pub line2: String,
    /// The whole input, trimmed
    pub contents: String,

    pub catalog_number: CatalogNumber,
    pub classification: Classification,
    pub international_designator: InternationalDesignator,
    pub epoch: Epoch,

    /// First derivative of mean motion divided by two [rev/day^2]
    pub mean_motion_dot: f64,
    /// Second derivative of mean motion divided by six [rev/day^3]
    pub mean_motion_ddot: f64,
    /// Drag term [1/earth radii]
    pub bstar: f64,

    pub ephemeris_type: char,
    pub element_set_number: u32,
    pub line1_checksum: u8,

    pub elements: OrbitalElements,
    pub line2_checksum: u8,
}

impl Tle {
    pub fn catalog_id(&self) -> CatalogId {
        self.catalog_number.id
    }

    pub fn epoch_timestamp(&self) -> UtcTimestamp {
        self.epoch.timestamp
    }

    pub fn to_unstructured(&self) -> UnstructuredTle {
        UnstructuredTle {
            satellite_name: self.name.clone(),
            line1: self.line1.clone(),
            line2: self.line2.clone(),
        }
    }
}
