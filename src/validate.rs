//! Pure validation of write-request fields: trimming, presence, and the
//! shape checks for dates and times. Nothing in here touches the store.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::error::{BookingError, Result};

lazy_static! {
    // Shape only: four digits, two digits, two digits. Calendar validity
    // is deliberately not checked, so 2025-02-30 passes.
    static ref DATE_SHAPE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    // 24-hour clock, zero padded: 00-23 hours, 00-59 minutes.
    static ref TIME_SHAPE: Regex = Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap();
}

/// Body of a create or update request. Every field is optional at the
/// deserialization layer; presence is enforced by [`validate`] after
/// normalization, so `null`, missing and whitespace-only all fail alike.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationDraft {
    pub room: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub owner: Option<String>,
}

/// The validated, normalized fields of a write request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationFields {
    pub room: String,
    pub date: String,
    pub time: String,
    pub owner: String,
}

/// Trimmed string form of an optional value; absent becomes empty.
pub fn normalize(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_string()
}

pub fn is_valid_date(s: &str) -> bool {
    DATE_SHAPE.is_match(s)
}

pub fn is_valid_time(s: &str) -> bool {
    TIME_SHAPE.is_match(s)
}

/// Checks run in a fixed order and the first failure wins:
/// presence, then date shape, then time shape.
pub fn validate(draft: &ReservationDraft) -> Result<ReservationFields> {
    let room = normalize(draft.room.as_deref());
    let date = normalize(draft.date.as_deref());
    let time = normalize(draft.time.as_deref());
    let owner = normalize(draft.owner.as_deref());
    if room.is_empty() || date.is_empty() || time.is_empty() || owner.is_empty() {
        return Err(BookingError::MissingFields);
    }
    if !is_valid_date(&date) {
        return Err(BookingError::InvalidDateFormat);
    }
    if !is_valid_time(&time) {
        return Err(BookingError::InvalidTimeFormat);
    }
    Ok(ReservationFields {
        room,
        date,
        time,
        owner,
    })
}
