use crate::configuration::Configuration;
use crate::export::OutputFormat;
use crate::i18n::Language;
use crate::json_export::is_stdout;
use crate::types::DATE_FORMAT;
use chrono::{NaiveDate, Weekday};
use clap::{ArgAction, Parser};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Generate a long term seat booking file, one row per selected weekday.
#[derive(Debug, Clone, Parser)]
#[command(name = "long_term_booking", version)]
pub struct ConfigurationHandler {
    /// First day of the booking (dd.mm.yyyy or yyyy-mm-dd)
    #[arg(long, env = "BOOKING_START_DATE", value_parser = parse_date)]
    start_date: NaiveDate,

    /// Last day of the booking (dd.mm.yyyy or yyyy-mm-dd)
    #[arg(long, env = "BOOKING_END_DATE", value_parser = parse_date)]
    end_date: NaiveDate,

    /// Weekdays to book, comma separated (Monday to Friday)
    #[arg(
        long,
        env = "BOOKING_WEEKDAYS",
        value_delimiter = ',',
        value_parser = parse_weekday,
        default_values_t = [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri]
    )]
    weekdays: Vec<Weekday>,

    /// Seat number, e.g. 24 (not P24)
    #[arg(long, env = "BOOKING_SEAT")]
    seat: String,

    /// Email address ending with @devoteam.com
    #[arg(long, env = "BOOKING_EMAIL")]
    email: String,

    /// Book the first half of the day
    #[arg(long, env = "BOOKING_FIRST_HALF", default_value_t = true, action = ArgAction::Set)]
    first_half: bool,

    /// Book the second half of the day
    #[arg(long, env = "BOOKING_SECOND_HALF", default_value_t = true, action = ArgAction::Set)]
    second_half: bool,

    /// Mark the bookings as private
    #[arg(long, env = "BOOKING_PRIVATE")]
    private: bool,

    /// Destination file, `-` writes json to stdout
    #[arg(long, env = "BOOKING_OUTPUT")]
    output: Option<PathBuf>,

    #[arg(long, env = "BOOKING_FORMAT", value_enum, default_value_t)]
    format: OutputFormat,

    /// Language of the messages
    #[arg(long, env = "BOOKING_LANG", value_enum, default_value_t)]
    lang: Language,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        if let Err(err) = dotenvy::dotenv() {
            debug!(?err, "No .env file loaded");
        }
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
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
        self.seat.trim().to_string()
    }

    fn email(&self) -> String {
        self.email.trim().to_string()
    }

    fn first_half(&self) -> bool {
        self.first_half
    }

    fn second_half(&self) -> bool {
        self.second_half
    }

    fn private(&self) -> bool {
        self.private
    }

    fn output_path(&self) -> PathBuf {
        let extension = self.format.extension();
        match &self.output {
            Some(path) if is_stdout(path) || path.extension().is_some() => path.clone(),
            Some(path) => path.with_extension(extension),
            None => PathBuf::from(format!("bookings.{extension}")),
        }
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn language(&self) -> Language {
        self.lang
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(value, ISO_DATE_FORMAT))
        .map_err(|_| format!("invalid date `{value}`, expected dd.mm.yyyy or yyyy-mm-dd"))
}

/// Accepts English and German names and abbreviations of Monday to Friday.
fn parse_weekday(value: &str) -> Result<Weekday, String> {
    match value.trim().to_lowercase().as_str() {
        "mon" | "monday" | "mo" | "montag" => Ok(Weekday::Mon),
        "tue" | "tuesday" | "di" | "dienstag" => Ok(Weekday::Tue),
        "wed" | "wednesday" | "mi" | "mittwoch" => Ok(Weekday::Wed),
        "thu" | "thursday" | "do" | "donnerstag" => Ok(Weekday::Thu),
        "fri" | "friday" | "fr" | "freitag" => Ok(Weekday::Fri),
        other => Err(format!(
            "unsupported weekday `{other}`, expected one of Monday to Friday"
        )),
    }
}
