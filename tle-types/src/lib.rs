//! Data model for decoded two-line element sets

pub mod catalog;
pub mod designator;
pub mod epoch;
pub mod orbit;
pub mod prelude;
pub mod time;
pub mod tle;
