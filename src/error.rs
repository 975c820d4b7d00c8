use thiserror::Error;

use crate::model::ReservationId;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("room, date, time and owner are all required")]
    MissingFields,
    #[error("date must have the form YYYY-MM-DD")]
    InvalidDateFormat,
    #[error("time must have the form HH:MM")]
    InvalidTimeFormat,
    #[error("the room is already reserved at that date and time")]
    Conflict,
    #[error("no reservation with id {0}")]
    NotFound(ReservationId),
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Lock poisoned: {0}")]
    Lock(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, BookingError>;

// Helper conversions
impl From<std::io::Error> for BookingError {
    fn from(e: std::io::Error) -> Self {
        Self::Persistence(e.to_string())
    }
}
impl From<serde_json::Error> for BookingError {
    fn from(e: serde_json::Error) -> Self {
        Self::Persistence(e.to_string())
    }
}
