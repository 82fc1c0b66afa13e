/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{NaiveDate, NaiveDateTime};
use contracts::shared::metadata::FieldValue;

/// Format date to DD.MM.YYYY format
/// Example: 1991-01-23 -> "23.01.1991"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format date-time to DD.MM.YYYY HH:MM format
/// Example: 1991-01-23T12:23:05 -> "23.01.1991 12:23"
pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format("%d.%m.%Y %H:%M").to_string()
}

/// Text of a grid cell
pub fn format_cell(value: &FieldValue) -> String {
    match value {
        FieldValue::Date(date) => format_date(date),
        FieldValue::DateTime(datetime) => format_datetime(datetime),
        FieldValue::Flag(true) => "✓".to_string(),
        FieldValue::Flag(false) => String::new(),
        other => other.to_string(),
    }
}
