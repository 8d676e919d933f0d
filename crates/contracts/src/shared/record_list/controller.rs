use super::entry_modal::{FormMode, Submission};
use super::filter::FilterBar;
use super::id::{IdGenerator, IdStrategy, RecordId};
use super::record::{Record, RecordSchema};
use super::sort::SortState;
use super::view_state::ListViewState;
use crate::shared::config::RecordsConfig;
use serde::{Deserialize, Serialize};

/// Where `add` puts new records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertPosition {
    #[default]
    Head,
    Tail,
}

/// One rendered page of the filtered, sorted collection
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    pub items: Vec<Record<T>>,
    /// Size of the filtered set (all pages)
    pub total: usize,
    /// Effective 1-based page after clamping
    pub page: usize,
    pub total_pages: usize,
}

/// Owner of the canonical collection of one dashboard.
///
/// Mutations never fail: an unknown id is a silent no-op, since ids only
/// ever come from this controller.
#[derive(Debug, Clone)]
pub struct RecordListController<T: RecordSchema> {
    records: Vec<Record<T>>,
    insert_position: InsertPosition,
    ids: IdGenerator,
}

impl<T: RecordSchema> RecordListController<T> {
    pub fn new(insert_position: InsertPosition, id_strategy: IdStrategy) -> Self {
        Self {
            records: Vec::new(),
            insert_position,
            ids: IdGenerator::new(id_strategy),
        }
    }

    pub fn from_config(config: &RecordsConfig) -> Self {
        Self::new(config.insert_position, config.id_strategy)
    }

    /// Seed the collection; seeds keep their given order
    pub fn with_records(mut self, seeds: impl IntoIterator<Item = T>) -> Self {
        for mut data in seeds {
            data.refresh_derived();
            let id = self.ids.next_id();
            self.records.push(Record::new(id, data));
        }
        log::debug!(
            "{}: seeded {} record(s)",
            T::entity().full_name(),
            self.records.len()
        );
        self
    }

    pub fn insert_position(&self) -> InsertPosition {
        self.insert_position
    }

    pub fn records(&self) -> &[Record<T>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record<T>> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Store a validated draft under a fresh id
    pub fn add(&mut self, mut draft: T) -> &Record<T> {
        draft.refresh_derived();
        let id = self.ids.next_id();
        log::debug!("{}: add {}", T::entity().full_name(), id);
        let record = Record::new(id, draft);
        let index = match self.insert_position {
            InsertPosition::Head => {
                self.records.insert(0, record);
                0
            }
            InsertPosition::Tail => {
                self.records.push(record);
                self.records.len() - 1
            }
        };
        &self.records[index]
    }

    /// `{...existing, ...patch}`; the id is preserved
    pub fn update(&mut self, id: &RecordId, patch: &T::Patch) -> Option<&Record<T>> {
        let Some(index) = self.position(id) else {
            log::debug!("{}: update ignored, unknown id {}", T::entity().full_name(), id);
            return None;
        };
        let data = &mut self.records[index].data;
        data.apply_patch(patch);
        data.refresh_derived();
        Some(&self.records[index])
    }

    /// Replace all fields of a record, as committed by the edit form
    pub fn replace(&mut self, id: &RecordId, mut data: T) -> Option<&Record<T>> {
        let Some(index) = self.position(id) else {
            log::debug!("{}: replace ignored, unknown id {}", T::entity().full_name(), id);
            return None;
        };
        data.refresh_derived();
        self.records[index].data = data;
        Some(&self.records[index])
    }

    pub fn remove(&mut self, id: &RecordId) {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        if self.records.len() == before {
            log::debug!("{}: remove ignored, unknown id {}", T::entity().full_name(), id);
        }
    }

    /// Route an entry form submission to `add` or `replace`
    pub fn apply(&mut self, submission: Submission<T>) -> Option<RecordId> {
        match submission.mode {
            FormMode::Create => Some(self.add(submission.draft).id().clone()),
            FormMode::Edit(id) => self.replace(&id, submission.draft).map(|r| r.id().clone()),
        }
    }

    /// Filtered and sorted records, all pages
    pub fn filtered(&self, filters: &FilterBar, sort: &SortState) -> Vec<&Record<T>> {
        let mut items: Vec<&Record<T>> = self
            .records
            .iter()
            .filter(|r| filters.matches(&r.data))
            .collect();
        sort.apply(&mut items);
        items
    }

    /// Size of the filtered set, without sorting or cloning
    pub fn count(&self, filters: &FilterBar) -> usize {
        self.records
            .iter()
            .filter(|r| filters.matches(&r.data))
            .count()
    }

    /// Current page of the list. Pure: the stored page is not touched,
    /// the returned `page` is the clamped one.
    pub fn view(&self, state: &ListViewState) -> ListView<T> {
        let filtered = self.filtered(&state.filters, &state.sort);
        let total = filtered.len();
        let window = state.pagination.window(total);
        ListView {
            items: filtered[window].iter().map(|r| (*r).clone()).collect(),
            total,
            page: state.pagination.effective_page(total),
            total_pages: state.pagination.total_pages(total),
        }
    }
}

impl<T: RecordSchema> Default for RecordListController<T> {
    fn default() -> Self {
        Self::new(InsertPosition::default(), IdStrategy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_list::test_support::{item, Item, ItemPatch};

    fn controller_with(n: usize) -> RecordListController<Item> {
        RecordListController::new(InsertPosition::Tail, IdStrategy::Sequence).with_records(
            (0..n).map(|i| item(&format!("Barang {}", i + 1), "ATK", i as f64, None)),
        )
    }

    #[test]
    fn test_empty_collection_view() {
        let controller = RecordListController::<Item>::default();
        let state = ListViewState::for_schema::<Item>(10);
        let view = controller.view(&state);
        assert!(view.items.is_empty());
        assert_eq!(view.total, 0);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page, 1);
    }

    #[test]
    fn test_add_then_update_keeps_id() {
        let mut controller = RecordListController::<Item>::default();
        let id = controller.add(item("Toner", "ATK", 3.0, None)).id().clone();
        assert_eq!(id.as_str(), "1");

        let patch = ItemPatch {
            name: Some("X".to_string()),
            ..Default::default()
        };
        controller.update(&id, &patch);
        let stored = controller.get(&RecordId::from("1")).unwrap();
        assert_eq!(stored.data.name, "X");
        assert_eq!(stored.id().as_str(), "1");
        assert_eq!(stored.data.category, "ATK");
        assert_eq!(stored.data.qty, 3.0);
    }

    #[test]
    fn test_insert_position() {
        let mut head = RecordListController::<Item>::new(InsertPosition::Head, IdStrategy::Sequence);
        head.add(item("a", "ATK", 1.0, None));
        head.add(item("b", "ATK", 1.0, None));
        assert_eq!(head.records()[0].data.name, "b");

        let mut tail = RecordListController::<Item>::new(InsertPosition::Tail, IdStrategy::Sequence);
        tail.add(item("a", "ATK", 1.0, None));
        tail.add(item("b", "ATK", 1.0, None));
        assert_eq!(tail.records()[0].data.name, "a");
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut controller = controller_with(3);
        let before = controller.records().to_vec();
        assert!(controller
            .update(&RecordId::from("99"), &ItemPatch::default())
            .is_none());
        assert!(controller
            .replace(&RecordId::from("99"), item("z", "IT", 0.0, None))
            .is_none());
        controller.remove(&RecordId::from("99"));
        assert_eq!(controller.records(), before.as_slice());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut once = controller_with(3);
        let mut twice = controller_with(3);
        let id = RecordId::from("2");
        once.remove(&id);
        twice.remove(&id);
        twice.remove(&id);
        assert_eq!(once.records(), twice.records());
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn test_derived_refreshed_on_add_and_update() {
        let mut controller = RecordListController::<Item>::default();
        let id = controller.add(item("a", "ATK", 0.0, None)).id().clone();
        assert_eq!(controller.get(&id).unwrap().data.level, "kosong");
        controller.update(
            &id,
            &ItemPatch {
                qty: Some(4.0),
                ..Default::default()
            },
        );
        assert_eq!(controller.get(&id).unwrap().data.level, "ada");
    }

    #[test]
    fn test_seeds_get_fresh_ids_and_derived() {
        let controller = controller_with(3);
        let ids: Vec<&str> = controller.records().iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(controller.records()[0].data.level, "kosong");
    }

    #[test]
    fn test_twelve_items_page_size_five() {
        let controller = controller_with(12);
        let mut state = ListViewState::for_schema::<Item>(5);
        let first = controller.view(&state);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 5);

        state.set_page(3);
        let last = controller.view(&state);
        assert_eq!(last.items.len(), 2);
        assert_eq!(last.items[0].data.name, "Barang 11");
    }

    #[test]
    fn test_delete_only_item_on_last_page_clamps_down() {
        let mut controller = controller_with(11);
        let mut state = ListViewState::for_schema::<Item>(5);
        state.set_page(3);
        let view = controller.view(&state);
        assert_eq!(view.items.len(), 1);

        let only = view.items[0].id().clone();
        controller.remove(&only);
        let view = controller.view(&state);
        assert_eq!(view.page, 2);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.items.len(), 5);

        state.clamp_to(view.total);
        assert_eq!(state.pagination.page(), 2);
    }

    #[test]
    fn test_count_matches_filtered_len() {
        let mut controller = controller_with(6);
        controller.add(item("Toner Printer", "IT", 2.0, None));
        let mut state = ListViewState::for_schema::<Item>(5);
        assert_eq!(controller.count(&state.filters), 7);

        state.filters.set_select(1, "IT");
        state.commit_filters();
        assert_eq!(
            controller.count(&state.filters),
            controller.filtered(&state.filters, &state.sort).len()
        );
        assert_eq!(controller.count(&state.filters), 1);
    }

    #[test]
    fn test_filter_commit_then_view() {
        let mut controller = controller_with(4);
        controller.add(item("Toner Printer", "IT", 2.0, None));
        let mut state = ListViewState::for_schema::<Item>(10);
        state.filters.set_text(0, "TONER");
        state.commit_filters();
        let view = controller.view(&state);
        assert_eq!(view.total, 1);
        assert_eq!(view.items[0].data.name, "Toner Printer");
    }

    #[test]
    fn test_apply_submission() {
        let mut controller = RecordListController::<Item>::default();
        let id = controller
            .apply(Submission {
                mode: FormMode::Create,
                draft: item("a", "ATK", 1.0, None),
            })
            .unwrap();
        let edited = controller.apply(Submission {
            mode: FormMode::Edit(id.clone()),
            draft: item("b", "IT", 0.0, None),
        });
        assert_eq!(edited, Some(id.clone()));
        let stored = controller.get(&id).unwrap();
        assert_eq!(stored.data.name, "b");
        assert_eq!(stored.data.level, "kosong");

        let missing = controller.apply(Submission {
            mode: FormMode::Edit(RecordId::from("404")),
            draft: item("c", "IT", 0.0, None),
        });
        assert!(missing.is_none());
        assert_eq!(controller.len(), 1);
    }
}
