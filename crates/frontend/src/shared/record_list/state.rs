use contracts::shared::config::DashboardConfig;
use contracts::shared::record_list::{
    ConfirmModal, EntryModal, ListView, ListViewState, Record, RecordId, RecordListController,
    RecordSchema, Submission,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Reactive wrapper around one dashboard's controller and its page state.
///
/// Every field is a signal handle, so the whole struct is `Copy` and can be
/// moved into as many event handlers as a page needs.
pub struct RecordListState<T: RecordSchema + Send + Sync> {
    pub controller: RwSignal<RecordListController<T>>,
    pub view_state: RwSignal<ListViewState>,
    pub entry: RwSignal<EntryModal<T>>,
    pub confirm: RwSignal<ConfirmModal>,
    /// A validated form waiting for `save_delay_ms`, locks the modals
    pub saving: RwSignal<bool>,
    pub page_size_options: StoredValue<Vec<usize>>,
    save_delay_ms: u32,
}

impl<T: RecordSchema + Send + Sync> Clone for RecordListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: RecordSchema + Send + Sync> Copy for RecordListState<T> {}

impl<T: RecordSchema + Send + Sync> RecordListState<T> {
    pub fn new(config: &DashboardConfig, seeds: Vec<T>) -> Self {
        let controller = RecordListController::from_config(&config.records).with_records(seeds);
        log::debug!(
            "{}: {} seed records",
            T::entity().full_name(),
            controller.len()
        );

        Self {
            controller: RwSignal::new(controller),
            view_state: RwSignal::new(ListViewState::for_schema::<T>(
                config.pagination.default_page_size,
            )),
            entry: RwSignal::new(EntryModal::default()),
            confirm: RwSignal::new(ConfirmModal::default()),
            saving: RwSignal::new(false),
            page_size_options: StoredValue::new(config.page_size_options()),
            save_delay_ms: config.ui.save_delay_ms,
        }
    }

    /// Current page of the filtered, sorted list
    pub fn view(&self) -> ListView<T> {
        self.controller
            .with(|c| self.view_state.with(|s| c.view(s)))
    }

    /// Whole filtered set in display order, for totals and export
    pub fn filtered(&self) -> Vec<Record<T>> {
        self.controller.with(|c| {
            self.view_state.with(|s| {
                c.filtered(&s.filters, &s.sort)
                    .into_iter()
                    .cloned()
                    .collect()
            })
        })
    }

    pub fn total_records(&self) -> usize {
        self.controller.with(|c| c.len())
    }

    pub fn toggle_sort(&self, field: &str) {
        self.view_state.update(|s| s.toggle_sort(field));
    }

    pub fn set_page(&self, page: usize) {
        self.view_state.update(|s| s.set_page(page));
    }

    pub fn set_page_size(&self, page_size: usize) {
        self.view_state.update(|s| s.set_page_size(page_size));
    }

    /// Pull the stored page back into range after the collection shrank
    fn clamp_page(&self) {
        let total = self
            .controller
            .with_untracked(|c| self.view_state.with_untracked(|s| c.count(&s.filters)));
        let out_of_range = self
            .view_state
            .with_untracked(|s| s.pagination.page() > s.pagination.total_pages(total));
        if out_of_range {
            self.view_state.update(|s| s.clamp_to(total));
        }
    }

    pub fn open_create(&self) {
        if self.saving.get_untracked() {
            return;
        }
        self.entry.update(|m| m.open_create());
    }

    pub fn open_edit(&self, id: &RecordId) {
        if self.saving.get_untracked() {
            return;
        }
        let record = self.controller.with_untracked(|c| c.get(id).cloned());
        match record {
            Some(record) => self.entry.update(|m| m.open_edit(&record)),
            None => log::warn!("edit requested for unknown id {}", id),
        }
    }

    /// Draft edits are ignored while a save is pending
    pub fn set_field(&self, field: &str, raw: &str) {
        if self.saving.get_untracked() {
            return;
        }
        self.entry.update(|m| m.set_field(field, raw));
    }

    pub fn cancel_entry(&self) {
        if !self.saving.get_untracked() {
            self.entry.update(|m| m.cancel());
        }
    }

    /// Validate the form and save a valid draft after `save_delay_ms`.
    /// The modal stays open and locked until the save lands.
    pub fn submit(&self) {
        if !self.begin_submit() {
            return;
        }
        if self.save_delay_ms == 0 {
            self.finish_submit();
            return;
        }

        let this = *self;
        let delay = self.save_delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            this.finish_submit();
        });
    }

    /// Returns true when a valid draft is now waiting to be saved
    fn begin_submit(&self) -> bool {
        if self.saving.get_untracked() || !self.entry.with_untracked(|m| m.is_open()) {
            return false;
        }

        let mut draft_ok = true;
        self.entry.update(|m| {
            if let Err(errors) = m.check() {
                log::debug!("form rejected: {} field error(s)", errors.len());
                draft_ok = false;
            }
        });
        if draft_ok {
            self.saving.set(true);
        }
        draft_ok
    }

    fn finish_submit(&self) {
        let mut submission = None;
        self.entry.update(|m| {
            if let Err(errors) = m.submit(|s| submission = Some(s)) {
                log::debug!("form rejected: {} field error(s)", errors.len());
            }
        });
        if let Some(submission) = submission {
            self.apply(submission);
        }
        self.saving.set(false);
    }

    fn apply(&self, submission: Submission<T>) {
        let mut saved = None;
        self.controller.update(|c| saved = c.apply(submission));
        match saved {
            Some(id) => log::info!("{}: saved {}", T::entity().full_name(), id),
            None => log::warn!("{}: save target no longer exists", T::entity().full_name()),
        }
        self.clamp_page();
    }

    pub fn request_delete(&self, id: &RecordId) {
        if self.saving.get_untracked() {
            return;
        }
        let record = self.controller.with_untracked(|c| c.get(id).cloned());
        if let Some(record) = record {
            self.confirm.update(|m| m.open(&record));
        }
    }

    pub fn cancel_delete(&self) {
        self.confirm.update(|m| m.cancel());
    }

    pub fn confirm_delete(&self) {
        let mut target = None;
        self.confirm.update(|m| {
            m.confirm(|id| target = Some(id));
        });

        if let Some(id) = target {
            self.controller.update(|c| c.remove(&id));
            log::info!("{}: deleted {}", T::entity().full_name(), id);
            self.clamp_page();
        }
    }
}
