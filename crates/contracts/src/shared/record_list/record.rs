use super::filter::FilterDef;
use super::id::RecordId;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, FieldValue};
use serde::{Deserialize, Serialize};

/// A stored record: schema data plus its immutable id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    id: RecordId,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Record<T> {
    pub(crate) fn new(id: RecordId, data: T) -> Self {
        Self { id, data }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Record shape of a dashboard.
///
/// A dashboard is a value of this trait: metadata, field access and the
/// derivation of computed fields. All list/filter/form logic is generic
/// over it.
pub trait RecordSchema: Clone + std::fmt::Debug + 'static {
    /// Partial update: `Some` fields replace, `None` fields are kept
    type Patch: Default + Clone + std::fmt::Debug;

    fn entity() -> &'static EntityMetadataInfo;

    fn fields() -> &'static [FieldMetadata];

    /// Filter bar layout
    fn filters() -> &'static [FilterDef];

    /// Column used for the initial sort, if any
    fn default_sort() -> Option<&'static str> {
        None
    }

    /// Draft used by the entry form in create mode
    fn empty() -> Self;

    /// Human-readable label, shown by the delete confirmation
    fn label(&self) -> String;

    fn field_value(&self, field: &str) -> FieldValue;

    /// Form binding; unknown field names are ignored
    fn set_field(&mut self, field: &str, raw: &str);

    fn apply_patch(&mut self, patch: &Self::Patch);

    /// Recompute derived fields from their inputs
    fn refresh_derived(&mut self) {}

    fn field(name: &str) -> Option<&'static FieldMetadata> {
        Self::fields().iter().find(|f| f.name == name)
    }

    fn list_fields() -> Vec<&'static FieldMetadata> {
        Self::fields().iter().filter(|f| f.visible_in_list).collect()
    }

    fn form_fields() -> Vec<&'static FieldMetadata> {
        Self::fields().iter().filter(|f| f.visible_in_form).collect()
    }
}
