//! Filter bar state: pending inputs, committed predicate

use super::record::RecordSchema;
use chrono::NaiveDate;

/// One input of the filter bar, declared by the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDef {
    /// Case-insensitive substring search over any of `fields`
    Text {
        label: &'static str,
        fields: &'static [&'static str],
        placeholder: &'static str,
    },
    /// Exact match against one of `options`
    Select {
        label: &'static str,
        field: &'static str,
        options: &'static [&'static str],
    },
    /// Inclusive date bounds; a missing bound is unbounded
    DateRange {
        label: &'static str,
        field: &'static str,
    },
}

impl FilterDef {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text { label, .. } | Self::Select { label, .. } | Self::DateRange { label, .. } => {
                label
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Select(String),
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl FilterValue {
    pub fn empty_for(def: &FilterDef) -> Self {
        match def {
            FilterDef::Text { .. } => Self::Text(String::new()),
            FilterDef::Select { .. } => Self::Select(String::new()),
            FilterDef::DateRange { .. } => Self::DateRange {
                from: None,
                to: None,
            },
        }
    }

    /// Inactive values match every record
    pub fn is_active(&self) -> bool {
        match self {
            Self::Text(s) | Self::Select(s) => !s.trim().is_empty(),
            Self::DateRange { from, to } => from.is_some() || to.is_some(),
        }
    }

    fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    fn matches<T: RecordSchema>(&self, def: &FilterDef, record: &T) -> bool {
        if !self.is_active() {
            return true;
        }
        match (def, self) {
            (FilterDef::Text { fields, .. }, Self::Text(needle)) => {
                let needle = needle.trim().to_lowercase();
                fields.iter().any(|f| {
                    record
                        .field_value(f)
                        .display()
                        .to_lowercase()
                        .contains(&needle)
                })
            }
            (FilterDef::Select { field, .. }, Self::Select(expected)) => {
                record.field_value(field).display() == *expected
            }
            (FilterDef::DateRange { field, .. }, Self::DateRange { from, to }) => {
                match record.field_value(field).as_date() {
                    Some(date) => {
                        from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
                    }
                    None => false,
                }
            }
            _ => true,
        }
    }
}

/// Filter inputs and the committed predicate built from them.
///
/// Typing only changes the pending values; `commit` (the explicit search
/// action) is what the list reacts to.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBar {
    defs: &'static [FilterDef],
    pending: Vec<FilterValue>,
    committed: Vec<FilterValue>,
}

impl FilterBar {
    pub fn new(defs: &'static [FilterDef]) -> Self {
        let empty: Vec<FilterValue> = defs.iter().map(FilterValue::empty_for).collect();
        Self {
            defs,
            pending: empty.clone(),
            committed: empty,
        }
    }

    pub fn for_schema<T: RecordSchema>() -> Self {
        Self::new(T::filters())
    }

    pub fn defs(&self) -> &'static [FilterDef] {
        self.defs
    }

    pub fn pending(&self, index: usize) -> Option<&FilterValue> {
        self.pending.get(index)
    }

    pub fn committed(&self, index: usize) -> Option<&FilterValue> {
        self.committed.get(index)
    }

    /// Replace a pending value. Values of the wrong kind for the slot are ignored.
    pub fn set_pending(&mut self, index: usize, value: FilterValue) {
        match self.pending.get_mut(index) {
            Some(slot) if slot.same_kind(&value) => *slot = value,
            _ => log::debug!("filter slot {} rejected value {:?}", index, value),
        }
    }

    pub fn set_text(&mut self, index: usize, value: impl Into<String>) {
        self.set_pending(index, FilterValue::Text(value.into()));
    }

    pub fn set_select(&mut self, index: usize, value: impl Into<String>) {
        self.set_pending(index, FilterValue::Select(value.into()));
    }

    pub fn set_date_from(&mut self, index: usize, from: Option<NaiveDate>) {
        if let Some(FilterValue::DateRange { to, .. }) = self.pending.get(index) {
            let to = *to;
            self.set_pending(index, FilterValue::DateRange { from, to });
        }
    }

    pub fn set_date_to(&mut self, index: usize, to: Option<NaiveDate>) {
        if let Some(FilterValue::DateRange { from, .. }) = self.pending.get(index) {
            let from = *from;
            self.set_pending(index, FilterValue::DateRange { from, to });
        }
    }

    /// Pending values differ from what the list currently shows
    pub fn is_dirty(&self) -> bool {
        self.pending != self.committed
    }

    /// Copy pending values into the predicate. Callers reset pagination.
    pub fn commit(&mut self) {
        self.committed = self.pending.clone();
    }

    pub fn clear(&mut self) {
        let empty: Vec<FilterValue> = self.defs.iter().map(FilterValue::empty_for).collect();
        self.pending = empty.clone();
        self.committed = empty;
    }

    /// Drop one filter from both the inputs and the predicate; other
    /// pending edits stay uncommitted
    pub fn reset_slot(&mut self, index: usize) {
        let Some(def) = self.defs.get(index) else {
            return;
        };
        let empty = FilterValue::empty_for(def);
        self.pending[index] = empty.clone();
        self.committed[index] = empty;
    }

    /// Number of committed filters that restrict the list
    pub fn active_count(&self) -> usize {
        self.committed.iter().filter(|v| v.is_active()).count()
    }

    /// Logical AND across all committed filters
    pub fn matches<T: RecordSchema>(&self, record: &T) -> bool {
        self.defs
            .iter()
            .zip(self.committed.iter())
            .all(|(def, value)| value.matches(def, record))
    }
}
