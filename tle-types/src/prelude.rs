pub use crate::catalog::{CatalogId, CatalogNumber, Classification};
pub use crate::designator::InternationalDesignator;
pub use crate::epoch::Epoch;
pub use crate::orbit::OrbitalElements;
pub use crate::time::UtcTimestamp;
pub use crate::tle::{Tle, UnstructuredTle};
