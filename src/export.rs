use crate::error::BookingError;
use crate::types::BookingRow;
use clap::ValueEnum;

/// Column names of the exported sheet, in order.
pub const HEADER: [&str; 8] = [
    "id",
    "seatID",
    "date",
    "timestamp",
    "firstHalf",
    "secondHalf",
    "email",
    "private",
];

pub trait BookingExporter {
    /// Serializes `HEADER` followed by `rows`, keeping their order.
    fn export(&self, rows: &[BookingRow]) -> Result<(), BookingError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
}

pub fn flag_text(flag: bool) -> &'static str {
    if flag {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// Renders a row in `HEADER` order.
pub fn row_cells(row: &BookingRow) -> [CellValue; 8] {
    [
        CellValue::Text(row.id.to_string()),
        CellValue::Text(row.seat_id.clone()),
        CellValue::Text(row.formatted_date()),
        CellValue::Integer(row.timestamp),
        CellValue::Text(flag_text(row.first_half).into()),
        CellValue::Text(flag_text(row.second_half).into()),
        CellValue::Text(row.email.clone()),
        CellValue::Text(flag_text(row.private).into()),
    ]
}
