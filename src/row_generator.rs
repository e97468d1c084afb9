use crate::error::BookingError;
use crate::types::{BookingRequest, BookingRow};
use chrono::{Datelike, NaiveDate, NaiveTime, Offset, TimeZone};
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

pub const SEAT_PREFIX: &str = "P";

/// Validation rules in reporting order, the first failing one wins.
const VALIDATION_ORDER: [(&str, BookingError); 3] = [
    ("email", BookingError::InvalidEmail),
    ("__all__", BookingError::InvalidDateRange),
    ("weekdays", BookingError::NoWeekdaySelected),
];

pub fn validate_request(request: &BookingRequest) -> Result<(), BookingError> {
    let Err(errors) = request.validate() else {
        return Ok(());
    };
    let field_errors = errors.field_errors();
    for (field, err) in VALIDATION_ORDER {
        if field_errors.contains_key(field) {
            debug!(field, "Booking request rejected");
            return Err(err);
        }
    }
    Ok(())
}

/// Produces one row per day in `[start_date, end_date]` whose weekday is selected,
/// in ascending date order. Timestamps are local midnight in `tz`.
pub fn generate<Tz: TimeZone>(
    request: &BookingRequest,
    tz: &Tz,
) -> Result<Vec<BookingRow>, BookingError> {
    validate_request(request)?;

    let seat_id = format!("{SEAT_PREFIX}{}", request.seat);
    let rows: Vec<BookingRow> = request
        .start_date
        .iter_days()
        .take_while(|date| *date <= request.end_date)
        .filter(|date| request.weekdays.contains(&date.weekday()))
        .map(|date| BookingRow {
            id: Uuid::new_v4(),
            seat_id: seat_id.clone(),
            date,
            timestamp: midnight_timestamp_millis(date, tz),
            first_half: request.first_half,
            second_half: request.second_half,
            email: request.email.clone(),
            private: request.private,
        })
        .collect();

    debug!(
        start_date = %request.start_date,
        end_date = %request.end_date,
        rows = rows.len(),
        "Generated booking rows"
    );
    Ok(rows)
}

fn midnight_timestamp_millis<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight).earliest() {
        Some(datetime) => datetime.timestamp_millis(),
        // midnight falls into a DST gap
        None => {
            let offset = tz.offset_from_utc_datetime(&midnight).fix();
            (midnight - offset).and_utc().timestamp_millis()
        }
    }
}
