//! CSV export format shared by the dashboards
//!
//! Output is a UTF-8 BOM followed by a header line and one line per row, so
//! spreadsheet software opens non-ASCII text correctly. The browser download
//! itself lives in the frontend.

use crate::shared::error::ExportError;
use crate::shared::record_list::{Record, RecordSchema};
use chrono::NaiveDateTime;

/// Types that can be exported as CSV rows
pub trait CsvExportable {
    /// Column headers
    fn headers() -> Vec<String>;

    /// Cell values, same order as `headers`
    fn to_csv_row(&self) -> Vec<String>;
}

/// Any schema exports its list-visible fields
impl<T: RecordSchema> CsvExportable for Record<T> {
    fn headers() -> Vec<String> {
        let mut headers = vec!["ID".to_string()];
        headers.extend(T::list_fields().iter().map(|f| f.label.to_string()));
        headers
    }

    fn to_csv_row(&self) -> Vec<String> {
        let mut row = vec![self.id().to_string()];
        row.extend(
            T::list_fields()
                .iter()
                .map(|f| self.data.field_value(f.name).display()),
        );
        row
    }
}

/// Serialize rows into CSV text with a BOM prefix
pub fn to_csv<T: CsvExportable>(data: &[T], delimiter: char) -> Result<String, ExportError> {
    if data.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');

    push_line(&mut csv_content, &T::headers(), delimiter);
    for item in data {
        push_line(&mut csv_content, &item.to_csv_row(), delimiter);
    }

    Ok(csv_content)
}

fn push_line(out: &mut String, cells: &[String], delimiter: char) {
    let escaped: Vec<String> = cells
        .iter()
        .map(|cell| escape_csv_cell(cell, delimiter))
        .collect();
    out.push_str(&escaped.join(&delimiter.to_string()));
    out.push('\n');
}

/// Quote a cell containing the delimiter, quotes or line breaks
fn escape_csv_cell(cell: &str, delimiter: char) -> String {
    if cell.contains(delimiter) || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
    {
        // Double the quotes inside the value
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

/// "{prefix}_{YYYYMMDD_HHMMSS}.csv"
pub fn export_filename(prefix: &str, now: NaiveDateTime) -> String {
    format!("{}_{}.csv", prefix, now.format("%Y%m%d_%H%M%S"))
}
