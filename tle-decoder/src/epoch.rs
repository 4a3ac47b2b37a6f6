//! Conversion of the two-digit year and fractional day of year to UTC

use crate::{fields::Field, numeric, DecodeError};
use chrono::{NaiveDate, TimeDelta};
use tle_types::prelude::UtcTimestamp;

/// Two-digit years below this are in the 21st century
pub const DEFAULT_PIVOT_YEAR: u8 = 57;

const NANOS_PER_DAY: f64 = 86_400.0 * 1e9;

pub fn resolve_year(two_digit_year: u32, pivot: u8) -> i32 {
    let year = two_digit_year as i32;
    if year < i32::from(pivot) {
        year + 2000
    } else {
        year + 1900
    }
}

/// `day` is 1-based, day 1.0 is the start of January 1st
pub fn epoch_timestamp(year: &str, day: &str, pivot: u8) -> Result<UtcTimestamp, DecodeError> {
    let two_digit_year: u32 = numeric::parse_integer(Field::EpochYear, year)?;
    let day_of_year = numeric::parse_decimal(Field::EpochDay, day)?;
    let out_of_range = || DecodeError::numeric(Field::EpochDay, day.trim());

    let year_start = NaiveDate::from_ymd_opt(resolve_year(two_digit_year, pivot), 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| DecodeError::numeric(Field::EpochYear, year.trim()))?
        .and_utc();

    let nanos = day_of_year * NANOS_PER_DAY;
    if nanos.abs() >= i64::MAX as f64 {
        return Err(out_of_range());
    }

    year_start
        .checked_add_signed(TimeDelta::nanoseconds(nanos as i64))
        .and_then(|t| t.checked_sub_signed(TimeDelta::days(1)))
        .ok_or_else(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use chrono::{Datelike, Timelike};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ns: u32) -> UtcTimestamp {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_nano_opt(h, mi, s, ns)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn year_pivot() {
        assert_eq!(resolve_year(0, DEFAULT_PIVOT_YEAR), 2000);
        assert_eq!(resolve_year(20, DEFAULT_PIVOT_YEAR), 2020);
        assert_eq!(resolve_year(56, DEFAULT_PIVOT_YEAR), 2056);
        assert_eq!(resolve_year(57, DEFAULT_PIVOT_YEAR), 1957);
        assert_eq!(resolve_year(98, DEFAULT_PIVOT_YEAR), 1998);
        assert_eq!(resolve_year(56, 50), 1956);
    }

    #[test]
    fn leap_year_epoch() {
        let t = epoch_timestamp("20", "274.51782528", DEFAULT_PIVOT_YEAR).unwrap();
        assert_eq!(t, utc(2020, 9, 30, 12, 25, 40, 104_192_000));
    }

    #[test]
    fn fractional_epoch() {
        let t = epoch_timestamp("15", "22.968530853511766", DEFAULT_PIVOT_YEAR).unwrap();
        let expected = utc(2015, 1, 22, 23, 14, 41, 65_743_000);
        let delta = (t - expected).num_nanoseconds().unwrap();
        assert!(delta.abs() < 1_000, "{t} is {delta}ns away from {expected}");
    }

    #[test]
    fn start_of_year() {
        let t = epoch_timestamp("57", "  1.00000000", DEFAULT_PIVOT_YEAR).unwrap();
        assert_eq!(t, utc(1957, 1, 1, 0, 0, 0, 0));

        let t = epoch_timestamp("08", "264.51782528", DEFAULT_PIVOT_YEAR).unwrap();
        assert_eq!((t.year(), t.month(), t.day()), (2008, 9, 20));
        assert_eq!((t.hour(), t.minute(), t.second()), (12, 25, 40));
    }

    #[test]
    fn invalid_year() {
        let err = epoch_timestamp("2a", "274.51782528", DEFAULT_PIVOT_YEAR).unwrap_err();
        assert_eq!(err, DecodeError::numeric(Field::EpochYear, "2a"));
        assert_eq!(err.kind(), ErrorKind::Numeric);
    }

    #[test]
    fn invalid_day() {
        let err = epoch_timestamp("20", "274.51782528a", DEFAULT_PIVOT_YEAR).unwrap_err();
        assert_eq!(err, DecodeError::numeric(Field::EpochDay, "274.51782528a"));

        let err = epoch_timestamp("20", "1e300", DEFAULT_PIVOT_YEAR).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Numeric);
    }
}
