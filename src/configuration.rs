use crate::export::OutputFormat;
use crate::i18n::Language;
use crate::types::BookingRequest;
use chrono::{NaiveDate, Weekday};
use std::collections::HashSet;
use std::path::PathBuf;

pub trait Configuration: Clone + Send + Sync + 'static {
    fn start_date(&self) -> NaiveDate;
    fn end_date(&self) -> NaiveDate;
    fn weekdays(&self) -> HashSet<Weekday>;
    fn seat(&self) -> String;
    fn email(&self) -> String;
    fn first_half(&self) -> bool;
    fn second_half(&self) -> bool;
    fn private(&self) -> bool;
    fn output_path(&self) -> PathBuf;
    fn output_format(&self) -> OutputFormat;
    fn language(&self) -> Language;

    fn booking_request(&self) -> BookingRequest {
        BookingRequest {
            start_date: self.start_date(),
            end_date: self.end_date(),
            weekdays: self.weekdays(),
            seat: self.seat(),
            email: self.email(),
            first_half: self.first_half(),
            second_half: self.second_half(),
            private: self.private(),
        }
    }
}
