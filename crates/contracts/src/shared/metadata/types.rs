//! Core metadata types for dashboards and their fields
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::field_type::FieldKind;
use super::validation::ValidationRules;

// ============================================================================
// Entity-level metadata
// ============================================================================

/// Metadata for a dashboard entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMetadataInfo {
    /// Short index, e.g. "a001"
    pub entity_index: &'static str,
    /// Collection name, e.g. "stock_item"
    pub collection_name: &'static str,
    pub ui: EntityUiMetadata,
}

impl EntityMetadataInfo {
    /// Full name, e.g. "a001_stock_item"
    pub fn full_name(&self) -> String {
        format!("{}_{}", self.entity_index, self.collection_name)
    }
}

/// UI metadata for entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityUiMetadata {
    /// Singular, e.g. "Barang"
    pub element_name: &'static str,
    /// Plural, e.g. "Stok Barang"
    pub list_name: &'static str,
    pub icon: Option<&'static str>,
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// Metadata for a single field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub validation: ValidationRules,
    pub placeholder: Option<&'static str>,
    pub visible_in_list: bool,
    pub visible_in_form: bool,
    /// Computed from other fields, shown read-only in the form
    pub derived: bool,
    pub enum_values: Option<&'static [&'static str]>,
}

impl FieldMetadata {
    const fn base(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            validation: ValidationRules::none(),
            placeholder: None,
            visible_in_list: true,
            visible_in_form: true,
            derived: false,
            enum_values: None,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldKind::Text)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldKind::Number)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldKind::Date)
    }

    pub const fn enumeration(
        name: &'static str,
        label: &'static str,
        values: &'static [&'static str],
    ) -> Self {
        Self {
            enum_values: Some(values),
            ..Self::base(name, label, FieldKind::Enum)
        }
    }

    pub const fn required(self) -> Self {
        Self {
            validation: ValidationRules {
                required: true,
                ..self.validation
            },
            ..self
        }
    }

    pub const fn min(self, min: f64) -> Self {
        Self {
            validation: ValidationRules {
                min: Some(min),
                ..self.validation
            },
            ..self
        }
    }

    pub const fn max_length(self, max: usize) -> Self {
        Self {
            validation: ValidationRules {
                max_length: Some(max),
                ..self.validation
            },
            ..self
        }
    }

    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        Self {
            placeholder: Some(placeholder),
            ..self
        }
    }

    /// Derived fields are never edited directly
    pub const fn derived(self) -> Self {
        Self {
            derived: true,
            ..self
        }
    }

    pub const fn hidden_in_list(self) -> Self {
        Self {
            visible_in_list: false,
            ..self
        }
    }

    pub const fn hidden_in_form(self) -> Self {
        Self {
            visible_in_form: false,
            ..self
        }
    }

    /// Check if field is optional
    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }

    /// Editable in the entry form
    pub fn is_editable(&self) -> bool {
        self.visible_in_form && !self.derived
    }

    pub fn options(&self) -> &'static [&'static str] {
        self.enum_values.unwrap_or(&[])
    }
}
