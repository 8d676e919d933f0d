//! Field kind enumeration for the schema descriptor

use chrono::NaiveDate;
use std::cmp::Ordering;

/// Input/storage kind of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,   // free text
    Number, // f64, parse-or-zero on input
    Date,   // NaiveDate, ISO "YYYY-MM-DD" on input
    Enum,   // one of FieldMetadata::enum_values
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Enum => "enum",
        }
    }

    /// HTML input type used by the entry form
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Enum => "text",
            Self::Number => "number",
            Self::Date => "date",
        }
    }
}

/// Typed value read from a record field.
///
/// Filters, sorting, table cells and CSV export all go through this type,
/// so a schema only has to describe how to read each of its fields once.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(Option<NaiveDate>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Raw string form, as it appears in form inputs and exports
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format_raw_number(*n),
            Self::Date(Some(d)) => d.format("%Y-%m-%d").to_string(),
            Self::Date(None) => String::new(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => *d,
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(_) => false,
            Self::Date(d) => d.is_none(),
        }
    }

    /// Ordering used by column sorting. Text compares case-insensitively,
    /// missing dates sort first, values of different kinds compare equal.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

fn format_raw_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Parse a numeric form input. Anything unparsable degrades to zero.
pub fn parse_number_or_zero(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    match cleaned.replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Parse an ISO date form input ("YYYY-MM-DD"); empty or invalid input is `None`
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_or_zero() {
        assert_eq!(parse_number_or_zero("42"), 42.0);
        assert_eq!(parse_number_or_zero(" 1 500 "), 1500.0);
        assert_eq!(parse_number_or_zero("12,5"), 12.5);
        assert_eq!(parse_number_or_zero("abc"), 0.0);
        assert_eq!(parse_number_or_zero(""), 0.0);
        assert_eq!(parse_number_or_zero("NaN"), 0.0);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-15"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("15.03.2024"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::Number(1500.0).display(), "1500");
        assert_eq!(FieldValue::Number(12.5).display(), "12.5");
        assert_eq!(FieldValue::Date(None).display(), "");
        assert_eq!(
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 1, 2)).display(),
            "2024-01-02"
        );
    }

    #[test]
    fn test_compare() {
        let a = FieldValue::text("apple");
        let b = FieldValue::text("Banana");
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(
            FieldValue::Number(2.0).compare(&FieldValue::Number(10.0)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Date(None).compare(&FieldValue::Date(NaiveDate::from_ymd_opt(2020, 1, 1))),
            Ordering::Less
        );
    }
}
