use crate::error::BookingError;
use crate::export::{flag_text, BookingExporter};
use crate::types::BookingRow;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Output path that selects stdout instead of a file.
pub const STDOUT_PATH: &str = "-";

/// A row keyed by the sheet header names.
#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    id: String,
    #[serde(rename = "seatID")]
    seat_id: &'a str,
    date: String,
    timestamp: i64,
    #[serde(rename = "firstHalf")]
    first_half: &'static str,
    #[serde(rename = "secondHalf")]
    second_half: &'static str,
    email: &'a str,
    private: &'static str,
}

impl<'a> From<&'a BookingRow> for JsonRow<'a> {
    fn from(row: &'a BookingRow) -> Self {
        Self {
            id: row.id.to_string(),
            seat_id: &row.seat_id,
            date: row.formatted_date(),
            timestamp: row.timestamp,
            first_half: flag_text(row.first_half),
            second_half: flag_text(row.second_half),
            email: &row.email,
            private: flag_text(row.private),
        }
    }
}

pub fn is_stdout(path: &Path) -> bool {
    path == Path::new(STDOUT_PATH)
}

#[derive(Debug, Clone)]
pub struct JsonExporter<'a> {
    path_file_out: &'a Path,
}

impl<'a> JsonExporter<'a> {
    pub fn new(path_file_out: &'a Path) -> Self {
        Self { path_file_out }
    }

    fn write_rows<W: Write>(mut writer: W, rows: &[BookingRow]) -> Result<(), BookingError> {
        let json_rows: Vec<JsonRow> = rows.iter().map(JsonRow::from).collect();
        serde_json::to_writer_pretty(&mut writer, &json_rows)
            .map_err(|err| BookingError::WriteFailure(err.to_string()))?;
        writeln!(writer).map_err(|err| BookingError::WriteFailure(err.to_string()))?;
        writer
            .flush()
            .map_err(|err| BookingError::WriteFailure(err.to_string()))
    }
}

impl BookingExporter for JsonExporter<'_> {
    fn export(&self, rows: &[BookingRow]) -> Result<(), BookingError> {
        if is_stdout(self.path_file_out) {
            return Self::write_rows(io::stdout().lock(), rows);
        }

        let file = File::create(self.path_file_out)
            .map_err(|err| BookingError::WriteFailure(err.to_string()))?;
        Self::write_rows(BufWriter::new(file), rows)?;

        info!(path = %self.path_file_out.display(), rows = rows.len(), "Wrote json file");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::Value;
    use std::fs;
    use uuid::Uuid;

    fn row(day: u32) -> BookingRow {
        BookingRow {
            id: Uuid::new_v4(),
            seat_id: "P7".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            timestamp: 1_709_506_800_000,
            first_half: false,
            second_half: true,
            email: "a@DEVOTEAM.COM".into(),
            private: true,
        }
    }

    #[test]
    fn test_write_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        let rows = vec![row(4), row(5)];

        JsonExporter::new(&path).export(&rows).unwrap();

        let content: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let entries = content.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], rows[0].id.to_string());
        assert_eq!(entries[0]["seatID"], "P7");
        assert_eq!(entries[0]["date"], "04.03.2024");
        assert_eq!(entries[0]["timestamp"], 1_709_506_800_000_i64);
        assert_eq!(entries[0]["firstHalf"], "FALSE");
        assert_eq!(entries[0]["secondHalf"], "TRUE");
        assert_eq!(entries[0]["email"], "a@DEVOTEAM.COM");
        assert_eq!(entries[0]["private"], "TRUE");
        assert_eq!(entries[1]["date"], "05.03.2024");
    }

    #[test]
    fn test_keys_follow_header_order() {
        let mut buffer = Vec::new();
        JsonExporter::write_rows(&mut buffer, &[row(4)]).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let positions: Vec<usize> = crate::export::HEADER
            .iter()
            .map(|name| text.find(&format!("\"{name}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test_case::test_case("-", true)]
    #[test_case::test_case("bookings.json", false)]
    fn test_is_stdout(path: &str, expected: bool) {
        assert_eq!(is_stdout(Path::new(path)), expected);
    }

    #[test]
    fn test_write_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("bookings.json");

        let err = JsonExporter::new(&path).export(&[row(4)]).unwrap_err();
        assert!(matches!(err, BookingError::WriteFailure(_)));
    }
}
