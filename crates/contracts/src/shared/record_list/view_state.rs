use super::filter::FilterBar;
use super::pagination::Pagination;
use super::record::RecordSchema;
use super::sort::SortState;

/// Filter, sort and page state of one list page.
///
/// Owned by the page and passed into `RecordListController::view`, so the
/// controller itself holds nothing but the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewState {
    pub filters: FilterBar,
    pub sort: SortState,
    pub pagination: Pagination,
}

impl ListViewState {
    pub fn for_schema<T: RecordSchema>(page_size: usize) -> Self {
        Self {
            filters: FilterBar::for_schema::<T>(),
            sort: SortState::for_schema::<T>(),
            pagination: Pagination::new(page_size),
        }
    }

    /// Explicit search action: pending filters become the predicate, back to page 1
    pub fn commit_filters(&mut self) {
        self.filters.commit();
        self.pagination.reset();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.pagination.reset();
    }

    /// Remove a single committed filter, back to page 1
    pub fn remove_filter(&mut self, index: usize) {
        self.filters.reset_slot(index);
        self.pagination.reset();
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
        self.pagination.reset();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
    }

    /// Keep the stored page inside the range of a list of `total` items
    pub fn clamp_to(&mut self, total: usize) {
        self.pagination.clamp(total);
    }
}
