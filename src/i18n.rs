use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    En,
    De,
}

/// Looks up the user-facing text for `key`, falling back to the key itself.
pub fn text(language: Language, key: &str) -> &str {
    let translated = match language {
        Language::En => english(key),
        Language::De => german(key),
    };
    translated.unwrap_or(key)
}

fn english(key: &str) -> Option<&'static str> {
    let translated = match key {
        "title" => "Long Term Booking",
        "invalid_email" => "Please enter a valid email ending with @devoteam.com",
        "start_date_must_be_before_end_date" => "Start date must be before end date.",
        "select_at_least_one_weekday" => "Please select at least one weekday.",
        "success" => "Excel file generated successfully!",
        "success_json" => "JSON file generated successfully!",
        _ => return None,
    };
    Some(translated)
}

fn german(key: &str) -> Option<&'static str> {
    let translated = match key {
        "title" => "Langzeitbuchung",
        "invalid_email" => "Bitte geben Sie eine gültige E-Mail mit @devoteam.com an",
        "start_date_must_be_before_end_date" => "Startdatum muss vor Enddatum liegen.",
        "select_at_least_one_weekday" => "Bitte wählen Sie mindestens einen Wochentag.",
        "success" => "Excel-Datei erfolgreich generiert!",
        "success_json" => "JSON-Datei erfolgreich generiert!",
        _ => return None,
    };
    Some(translated)
}
