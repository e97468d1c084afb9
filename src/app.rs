use crate::configuration::Configuration;
use crate::error::BookingError;
use crate::export::BookingExporter;
use crate::row_generator::generate;
use chrono::TimeZone;
use tracing::info;

/// Generates the bookings described by `configuration` and hands them to `exporter`.
/// Returns the number of exported rows.
pub fn run<C: Configuration, E: BookingExporter, Tz: TimeZone>(
    configuration: &C,
    exporter: &E,
    tz: &Tz,
) -> Result<usize, BookingError> {
    let request = configuration.booking_request();
    info!(
        start_date = %request.start_date,
        end_date = %request.end_date,
        seat = %request.seat,
        "Generating bookings"
    );

    let rows = generate(&request, tz)?;
    exporter.export(&rows)?;
    Ok(rows.len())
}
