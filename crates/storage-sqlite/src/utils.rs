//! Parsing and formatting helpers shared by the database models.
//!
//! SQLite stores our decimals, dates and timestamps as TEXT. Reads are
//! tolerant: a row that fails to parse is logged and falls back to a
//! neutral value instead of poisoning the whole query.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Parses a stored decimal, with a fallback for scientific notation by
/// parsing as f64 first.
pub(crate) fn parse_decimal(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match f64::from_str(value_str).ok().and_then(Decimal::from_f64) {
            Some(dec_val) => dec_val,
            None => {
                log::error!(
                    "Failed to parse {} '{}' as Decimal ({}). Falling back to ZERO.",
                    field_name,
                    value_str,
                    e_decimal
                );
                Decimal::ZERO
            }
        },
    }
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn parse_date(value_str: &str, field_name: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value_str, DATE_FORMAT).unwrap_or_else(|e| {
        log::error!("Failed to parse {} '{}': {}", field_name, value_str, e);
        NaiveDate::default()
    })
}

pub(crate) fn format_datetime(datetime: DateTime<Utc>) -> String {
    datetime.format(DATETIME_FORMAT).to_string()
}

pub(crate) fn parse_datetime(value_str: &str, field_name: &str) -> DateTime<Utc> {
    match NaiveDateTime::parse_from_str(value_str, DATETIME_FORMAT) {
        Ok(naive) => Utc.from_utc_datetime(&naive),
        Err(e) => {
            log::error!("Failed to parse {} '{}': {}", field_name, value_str, e);
            Utc::now()
        }
    }
}
