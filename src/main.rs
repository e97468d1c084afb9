use crate::{
    app::run, configuration::Configuration, configuration_handler::ConfigurationHandler,
    export::OutputFormat, i18n::text, json_export::is_stdout, json_export::JsonExporter,
    xlsx_export::XlsxExporter,
};
use chrono::Local;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod configuration;
mod configuration_handler;
mod error;
mod export;
mod i18n;
mod json_export;
mod row_generator;
#[cfg(test)]
mod testutils;
mod types;
mod xlsx_export;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let configuration = ConfigurationHandler::parse_arguments();
    let language = configuration.language();
    let output_path = configuration.output_path();
    info!(path = %output_path.display(), "Starting long term booking");

    let result = match configuration.output_format() {
        OutputFormat::Xlsx => run(&configuration, &XlsxExporter::new(&output_path), &Local),
        OutputFormat::Json => run(&configuration, &JsonExporter::new(&output_path), &Local),
    };

    match result {
        Ok(rows) => {
            info!(rows, "Bookings written");
            let success = match configuration.output_format() {
                OutputFormat::Xlsx => text(language, "success"),
                OutputFormat::Json => text(language, "success_json"),
            };
            if is_stdout(&output_path) {
                eprintln!("{success}");
            } else {
                println!("{success}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(?err, "Failed to generate bookings");
            eprintln!("{}", err.message(language));
            ExitCode::FAILURE
        }
    }
}
