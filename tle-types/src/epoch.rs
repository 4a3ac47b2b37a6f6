use crate::time::UtcTimestamp;
use derive_more::Display;

/// Reference time of the element set
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display(fmt = "{}", "timestamp")]
pub struct Epoch {
    /// Columns 19-32 of line 1, `YYDDD.DDDDDDDD`
    pub raw: String,

    /// Two-digit year
    pub year: String,

    /// Day of the year and fractional portion of the day, 1-based
    pub day: String,

    pub timestamp: UtcTimestamp,
}
