use chrono::{DateTime, Utc};

pub type UtcTimestamp = DateTime<Utc>;
