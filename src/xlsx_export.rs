use crate::error::BookingError;
use crate::export::{row_cells, BookingExporter, CellValue, HEADER};
use crate::types::BookingRow;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;
use tracing::info;

pub const SHEET_NAME: &str = "Bookings";
/// Excel worksheet maximum row count, header included.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;

#[derive(Debug, Clone)]
pub struct XlsxExporter<'a> {
    path_file_out: &'a Path,
}

impl<'a> XlsxExporter<'a> {
    pub fn new(path_file_out: &'a Path) -> Self {
        Self { path_file_out }
    }

    fn build_workbook(&self, rows: &[BookingRow]) -> Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();
        let fmt_header = Format::new().set_bold();
        let fmt_integer = Format::new().set_num_format("0");

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;
        for (idx_col, name) in HEADER.iter().enumerate() {
            worksheet.write_string_with_format(0, idx_col as u16, *name, &fmt_header)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        for (idx_row, row) in rows.iter().enumerate() {
            let n_row = (idx_row + 1) as u32;
            for (idx_col, cell) in row_cells(row).into_iter().enumerate() {
                let n_col = idx_col as u16;
                match cell {
                    CellValue::Text(value) => worksheet.write_string(n_row, n_col, value)?,
                    CellValue::Integer(value) => {
                        worksheet.write_number_with_format(n_row, n_col, value as f64, &fmt_integer)?
                    }
                };
            }
        }

        Ok(workbook)
    }
}

impl BookingExporter for XlsxExporter<'_> {
    fn export(&self, rows: &[BookingRow]) -> Result<(), BookingError> {
        if rows.len() + 1 > N_NROWS_EXCEL_MAX {
            return Err(BookingError::WriteFailure(format!(
                "{} rows exceed the worksheet limit of {N_NROWS_EXCEL_MAX}",
                rows.len()
            )));
        }

        let mut workbook = self
            .build_workbook(rows)
            .map_err(|err| BookingError::WriteFailure(err.to_string()))?;
        workbook
            .save(self.path_file_out)
            .map_err(|err| BookingError::WriteFailure(err.to_string()))?;

        info!(path = %self.path_file_out.display(), rows = rows.len(), "Wrote xlsx file");
        Ok(())
    }
}
