use super::id::RecordId;
use super::record::{Record, RecordSchema};

/// Delete confirmation: remembers only which record is pending
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfirmModal {
    #[default]
    Closed,
    Pending {
        id: RecordId,
        label: String,
    },
}

impl ConfirmModal {
    pub fn open<T: RecordSchema>(&mut self, record: &Record<T>) {
        *self = Self::Pending {
            id: record.id().clone(),
            label: record.data.label(),
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Pending { label, .. } => Some(label),
            Self::Closed => None,
        }
    }

    pub fn pending_id(&self) -> Option<&RecordId> {
        match self {
            Self::Pending { id, .. } => Some(id),
            Self::Closed => None,
        }
    }

    /// Discard the pending target without side effects
    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    /// Call `on_confirm` exactly once with the pending id, then close.
    /// Returns false when nothing was pending.
    pub fn confirm(&mut self, on_confirm: impl FnOnce(RecordId)) -> bool {
        match std::mem::take(self) {
            Self::Pending { id, .. } => {
                on_confirm(id);
                true
            }
            Self::Closed => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_list::controller::RecordListController;
    use crate::shared::record_list::test_support::{item, Item};

    #[test]
    fn test_confirm_removes_once() {
        let mut controller = RecordListController::<Item>::default();
        let id = controller.add(item("Toner Printer", "ATK", 1.0, None)).id().clone();
        controller.add(item("Kertas", "ATK", 1.0, None));

        let mut modal = ConfirmModal::default();
        modal.open(controller.get(&id).unwrap());
        assert_eq!(modal.label(), Some("Toner Printer"));

        let mut calls = 0;
        assert!(modal.confirm(|pending| {
            calls += 1;
            controller.remove(&pending);
        }));
        assert_eq!(calls, 1);
        assert!(!modal.is_open());
        assert!(controller.get(&id).is_none());
        assert_eq!(controller.len(), 1);

        assert!(!modal.confirm(|_| calls += 1));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_cancel_has_no_side_effect() {
        let mut controller = RecordListController::<Item>::default();
        let id = controller.add(item("Toner", "ATK", 1.0, None)).id().clone();
        let mut modal = ConfirmModal::default();
        modal.open(controller.get(&id).unwrap());
        assert_eq!(modal.pending_id(), Some(&id));
        modal.cancel();
        assert!(!modal.is_open());
        assert_eq!(controller.len(), 1);
    }
}
