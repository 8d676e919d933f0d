use super::record::{Record, RecordSchema};

/// Single-column sort; `None` keeps collection order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub sort_field: Option<String>,
    pub sort_ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            sort_field: None,
            sort_ascending: true,
        }
    }
}

impl SortState {
    pub fn by(field: impl Into<String>) -> Self {
        Self {
            sort_field: Some(field.into()),
            sort_ascending: true,
        }
    }

    pub fn for_schema<T: RecordSchema>() -> Self {
        T::default_sort().map(Self::by).unwrap_or_default()
    }

    /// Same column flips direction, a new column starts ascending
    pub fn toggle(&mut self, field: &str) {
        if self.sort_field.as_deref() == Some(field) {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = Some(field.to_string());
            self.sort_ascending = true;
        }
    }

    pub fn is_sorted_by(&self, field: &str) -> bool {
        self.sort_field.as_deref() == Some(field)
    }

    /// Stable sort; records with equal keys keep their relative order
    pub fn apply<T: RecordSchema>(&self, items: &mut [&Record<T>]) {
        let Some(field) = self.sort_field.as_deref() else {
            return;
        };
        items.sort_by(|a, b| {
            let cmp = a.data.field_value(field).compare(&b.data.field_value(field));
            if self.sort_ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });
    }
}
