//! Create/edit form state: `Closed -> Open(draft) -> Closed`

use super::id::RecordId;
use super::record::{Record, RecordSchema};
use crate::shared::error::{FieldError, ValidationErrors};
use crate::shared::metadata::{FieldKind, FieldMetadata};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

/// Validated draft handed to the owner's save callback
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<T> {
    pub mode: FormMode,
    pub draft: T,
}

#[derive(Debug, Clone)]
pub enum EntryModal<T> {
    Closed,
    Open {
        mode: FormMode,
        draft: T,
        errors: ValidationErrors,
    },
}

impl<T> Default for EntryModal<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T: RecordSchema> EntryModal<T> {
    pub fn open_create(&mut self) {
        let mut draft = T::empty();
        draft.refresh_derived();
        *self = Self::Open {
            mode: FormMode::Create,
            draft,
            errors: ValidationErrors::default(),
        };
    }

    /// The draft is a copy; the stored record is untouched until commit
    pub fn open_edit(&mut self, record: &Record<T>) {
        *self = Self::Open {
            mode: FormMode::Edit(record.id().clone()),
            draft: record.data.clone(),
            errors: ValidationErrors::default(),
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn mode(&self) -> Option<&FormMode> {
        match self {
            Self::Open { mode, .. } => Some(mode),
            Self::Closed => None,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode(), Some(FormMode::Edit(_)))
    }

    pub fn draft(&self) -> Option<&T> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Open { errors, .. } => Some(errors),
            Self::Closed => None,
        }
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors()
            .and_then(|e| e.for_field(field))
            .map(|e| e.message.as_str())
    }

    /// Bind one input; derived fields follow immediately
    pub fn set_field(&mut self, field: &str, raw: &str) {
        let Self::Open { draft, errors, .. } = self else {
            return;
        };
        if T::field(field).map_or(true, |meta| !meta.is_editable()) {
            log::debug!("{}: field {} is not editable", T::entity().full_name(), field);
            return;
        }
        draft.set_field(field, raw);
        draft.refresh_derived();
        if errors.for_field(field).is_some() && check_field(draft, T::field(field)).is_none() {
            errors.0.retain(|e| e.field != field);
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            Self::Open { draft, .. } => validate_draft(draft),
            Self::Closed => Ok(()),
        }
    }

    /// Refresh derived fields and validate, recording inline errors.
    /// The form stays open either way.
    pub fn check(&mut self) -> Result<(), ValidationErrors> {
        let Self::Open { draft, errors, .. } = self else {
            return Ok(());
        };
        draft.refresh_derived();
        let result = validate_draft(draft);
        *errors = result.clone().err().unwrap_or_default();
        result
    }

    /// Validate, then hand the draft to `on_save` and close.
    /// On failure the form stays open with inline errors and `on_save` is not called.
    pub fn submit(&mut self, on_save: impl FnOnce(Submission<T>)) -> Result<(), ValidationErrors> {
        self.check()?;
        if let Self::Open { mode, draft, .. } = std::mem::take(self) {
            on_save(Submission { mode, draft });
        }
        Ok(())
    }

    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }
}

fn check_field<T: RecordSchema>(draft: &T, meta: Option<&FieldMetadata>) -> Option<FieldError> {
    let meta = meta?;
    if !meta.is_editable() {
        return None;
    }
    let value = draft.field_value(meta.name);
    let result = match meta.kind {
        FieldKind::Number => value
            .as_number()
            .map_or(Ok(()), |n| meta.validation.validate_number(n, meta.label)),
        _ => meta.validation.validate_string(&value.display(), meta.label),
    };
    result.err().map(|message| FieldError {
        field: meta.name,
        label: meta.label,
        message,
    })
}

fn validate_draft<T: RecordSchema>(draft: &T) -> Result<(), ValidationErrors> {
    let failed: Vec<FieldError> = T::fields()
        .iter()
        .filter_map(|meta| check_field(draft, Some(meta)))
        .collect();
    if failed.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(failed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_list::controller::RecordListController;
    use crate::shared::record_list::test_support::{item, Item};

    #[test]
    fn test_create_mode_seeds_empty_draft() {
        let mut modal = EntryModal::<Item>::default();
        assert!(!modal.is_open());
        modal.open_create();
        assert_eq!(modal.mode(), Some(&FormMode::Create));
        assert_eq!(modal.draft().unwrap().name, "");
        assert_eq!(modal.draft().unwrap().level, "kosong");
    }

    #[test]
    fn test_submit_blocked_by_required_fields() {
        let mut modal = EntryModal::<Item>::default();
        modal.open_create();
        modal.set_field("name", "   ");
        let mut called = false;
        let result = modal.submit(|_| called = true);
        let errors = result.unwrap_err();
        assert!(!called);
        assert!(modal.is_open());
        assert_eq!(errors.len(), 2);
        assert_eq!(modal.error_for("name"), Some("Nama wajib diisi"));
        assert!(modal.error_for("category").is_some());
    }

    #[test]
    fn test_error_clears_once_field_filled() {
        let mut modal = EntryModal::<Item>::default();
        modal.open_create();
        let _ = modal.submit(|_| {});
        modal.set_field("name", "Toner");
        assert!(modal.error_for("name").is_none());
        assert!(modal.error_for("category").is_some());
    }

    #[test]
    fn test_number_rule_checked() {
        let mut modal = EntryModal::<Item>::default();
        modal.open_create();
        modal.set_field("name", "Toner");
        modal.set_field("category", "ATK");
        modal.set_field("qty", "-3");
        let errors = modal.submit(|_| {}).unwrap_err();
        assert!(errors.for_field("qty").is_some());
    }

    #[test]
    fn test_check_keeps_form_open() {
        let mut modal = EntryModal::<Item>::default();
        modal.open_create();
        assert!(modal.check().is_err());
        assert!(modal.error_for("name").is_some());

        modal.set_field("name", "Toner");
        modal.set_field("category", "ATK");
        modal.set_field("qty", "4");
        assert!(modal.check().is_ok());
        assert!(modal.is_open());
        assert!(modal.errors().is_some_and(|e| e.is_empty()));
        assert_eq!(modal.draft().unwrap().level, "ada");
    }

    #[test]
    fn test_submit_calls_once_and_closes() {
        let mut modal = EntryModal::<Item>::default();
        modal.open_create();
        modal.set_field("name", "Toner");
        modal.set_field("category", "ATK");
        modal.set_field("qty", "abc");
        let mut saved = Vec::new();
        modal.submit(|s| saved.push(s)).unwrap();
        assert!(!modal.is_open());
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].mode, FormMode::Create);
        assert_eq!(saved[0].draft.qty, 0.0);
    }

    #[test]
    fn test_derived_field_is_reactive_and_read_only() {
        let mut modal = EntryModal::<Item>::default();
        modal.open_create();
        modal.set_field("qty", "5");
        assert_eq!(modal.draft().unwrap().level, "ada");
        modal.set_field("level", "kosong");
        assert_eq!(modal.draft().unwrap().level, "ada");
    }

    #[test]
    fn test_edit_draft_does_not_touch_stored_record() {
        let mut controller = RecordListController::<Item>::default();
        let id = controller.add(item("Toner", "ATK", 2.0, None)).id().clone();

        let mut modal = EntryModal::<Item>::default();
        modal.open_edit(controller.get(&id).unwrap());
        modal.set_field("name", "Toner Baru");
        assert_eq!(controller.get(&id).unwrap().data.name, "Toner");

        let mut submission = None;
        modal.submit(|s| submission = Some(s)).unwrap();
        let submission = submission.unwrap();
        assert_eq!(submission.mode, FormMode::Edit(id.clone()));
        controller.apply(submission);
        assert_eq!(controller.get(&id).unwrap().data.name, "Toner Baru");
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut modal = EntryModal::<Item>::default();
        modal.open_create();
        modal.set_field("name", "x");
        modal.cancel();
        assert!(!modal.is_open());
        assert!(modal.draft().is_none());
        let mut called = false;
        assert!(modal.submit(|_| called = true).is_ok());
        assert!(!called);
    }
}
