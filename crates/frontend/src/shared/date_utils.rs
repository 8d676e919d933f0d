/// Date formatting for table cells and labels
use chrono::NaiveDate;

/// `DD/MM/YYYY`, or `-` when the date is missing
/// Example: 2024-03-15 -> "15/03/2024"
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => "-".to_string(),
    }
}

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
