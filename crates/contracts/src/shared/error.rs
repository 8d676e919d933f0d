use thiserror::Error;

/// Validation failure for a single form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub label: &'static str,
    pub message: String,
}

/// All field failures collected by one submit attempt
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Tidak ada data untuk diekspor")]
    NoData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let errors = ValidationErrors(vec![FieldError {
            field: "name",
            label: "Nama",
            message: "Nama wajib diisi".to_string(),
        }]);
        assert_eq!(errors.to_string(), "1 field(s) failed validation");
        assert_eq!(
            errors.for_field("name").map(|e| e.message.as_str()),
            Some("Nama wajib diisi")
        );
        assert!(errors.for_field("code").is_none());
    }
}
