//! Display text of a record field inside a table cell

use super::number_format::format_number;
use crate::shared::date_utils::format_date;
use contracts::shared::metadata::{FieldKind, FieldMetadata, FieldValue};

pub fn format_cell(meta: &FieldMetadata, value: &FieldValue) -> String {
    match (meta.kind, value) {
        (FieldKind::Number, FieldValue::Number(n)) => format_number(*n),
        (FieldKind::Date, FieldValue::Date(d)) => format_date(*d),
        _ if value.is_blank() => "-".to_string(),
        _ => value.display(),
    }
}

/// Numeric columns are right aligned
pub fn cell_align(meta: &FieldMetadata) -> &'static str {
    if meta.kind == FieldKind::Number {
        "right"
    } else {
        "left"
    }
}
