use chrono::{NaiveDate, Weekday};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Date format used for input dates and the `date` column.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

lazy_static! {
    static ref EMAIL_DOMAIN: Regex = Regex::new(r"(?i)@devoteam\.com$").unwrap();
}

/// Everything needed to generate the bookings of one run.
///
/// The seat is the raw token (`24`), the `P` prefix is added per row.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
#[validate(schema(function = "validate_date_range", skip_on_field_errors = false))]
pub struct BookingRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(length(min = 1, code = "no_weekday_selected"))]
    pub weekdays: HashSet<Weekday>,
    pub seat: String,
    #[validate(regex(path = *EMAIL_DOMAIN, code = "invalid_email"))]
    pub email: String,
    pub first_half: bool,
    pub second_half: bool,
    pub private: bool,
}

fn validate_date_range(request: &BookingRequest) -> Result<(), ValidationError> {
    if request.start_date > request.end_date {
        return Err(ValidationError::new("invalid_date_range"));
    }
    Ok(())
}

/// One reserved seat on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRow {
    pub id: Uuid,
    pub seat_id: String,
    pub date: NaiveDate,
    /// Milliseconds since the epoch at local midnight of `date`.
    pub timestamp: i64,
    pub first_half: bool,
    pub second_half: bool,
    pub email: String,
    pub private: bool,
}

impl BookingRow {
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}
