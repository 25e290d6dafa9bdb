//! Shared conversion helpers for DB model types.
//!
//! Dates and decimals are stored as TEXT; parsing is tolerant because a
//! malformed row should degrade to a logged default, not poison a whole list
//! query.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a stored decimal, falling back through f64 for scientific notation.
pub fn parse_decimal(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match f64::from_str(value_str) {
            Ok(f_val) => Decimal::from_f64(f_val).unwrap_or_else(|| {
                log::error!("failed to convert {field_name} '{value_str}' to Decimal");
                Decimal::ZERO
            }),
            Err(e_f64) => {
                log::error!(
                    "failed to parse {field_name} '{value_str}': as Decimal ({e_decimal}), as f64 ({e_f64}); falling back to zero"
                );
                Decimal::ZERO
            }
        },
    }
}

/// Parse a stored RFC 3339 timestamp.
pub fn parse_datetime_utc(value_str: &str, field_name: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|e| {
            log::error!("failed to parse {field_name} '{value_str}': {e}");
            Utc::now()
        })
}

/// Parse a stored `YYYY-MM-DD` date.
pub fn parse_naive_date(value_str: &str, field_name: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value_str, "%Y-%m-%d").unwrap_or_else(|e| {
        log::error!("failed to parse {field_name} '{value_str}': {e}");
        Utc::now().date_naive()
    })
}
