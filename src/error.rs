use crate::i18n::{text, Language};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("email must end with @devoteam.com")]
    InvalidEmail,
    #[error("start date must not be after end date")]
    InvalidDateRange,
    #[error("no weekday selected")]
    NoWeekdaySelected,
    #[error("failed to write bookings: {0}")]
    WriteFailure(String),
}

impl BookingError {
    /// Message shown to the user. Write failures are passed through verbatim.
    pub fn message(&self, language: Language) -> String {
        let key = match self {
            BookingError::InvalidEmail => "invalid_email",
            BookingError::InvalidDateRange => "start_date_must_be_before_end_date",
            BookingError::NoWeekdaySelected => "select_at_least_one_weekday",
            BookingError::WriteFailure(message) => return message.clone(),
        };
        text(language, key).to_string()
    }
}
