use std::{
    collections::HashSet,
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc, Mutex,
    },
};

use chrono::{NaiveDate, Weekday};

use crate::{
    configuration::Configuration, error::BookingError, export::BookingExporter,
    export::OutputFormat, i18n::Language, types::BookingRow,
};

pub struct MockExporterInner {
    pub success: AtomicBool,
    pub calls_to_export: AtomicU64,
    pub exported_rows: Mutex<Vec<BookingRow>>,
}

#[derive(Clone)]
pub struct MockExporter(pub Arc<MockExporterInner>);

impl MockExporterInner {
    fn new() -> Self {
        Self {
            success: AtomicBool::new(true),
            calls_to_export: AtomicU64::default(),
            exported_rows: Mutex::default(),
        }
    }
}

impl MockExporter {
    pub fn new() -> Self {
        Self(Arc::new(MockExporterInner::new()))
    }
}

impl BookingExporter for MockExporter {
    fn export(&self, rows: &[BookingRow]) -> Result<(), BookingError> {
        self.0.calls_to_export.fetch_add(1, Ordering::SeqCst);
        if !self.0.success.load(Ordering::SeqCst) {
            return Err(BookingError::WriteFailure("Supposed to fail".into()));
        }
        *self.0.exported_rows.lock().unwrap() = rows.to_vec();
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct TestConfiguration {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub weekdays: Vec<Weekday>,
    pub seat: String,
    pub email: String,
}

impl Default for TestConfiguration {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            weekdays: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            seat: "24".into(),
            email: "a@devoteam.com".into(),
        }
    }
}

impl Configuration for TestConfiguration {
    fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    fn weekdays(&self) -> HashSet<Weekday> {
        self.weekdays.iter().copied().collect()
    }

    fn seat(&self) -> String {
        self.seat.clone()
    }

    fn email(&self) -> String {
        self.email.clone()
    }

    fn first_half(&self) -> bool {
        true
    }

    fn second_half(&self) -> bool {
        false
    }

    fn private(&self) -> bool {
        false
    }

    fn output_path(&self) -> PathBuf {
        PathBuf::from("bookings.xlsx")
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::Xlsx
    }

    fn language(&self) -> Language {
        Language::En
    }
}
