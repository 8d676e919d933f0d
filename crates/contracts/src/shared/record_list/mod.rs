//! Generic CRUD list: collection owner, filter bar, sort, pagination and
//! the two modal state machines.
//!
//! Every dashboard is a `RecordSchema` implementation; nothing in here
//! knows about a concrete field set.
//!
//! ```rust,ignore
//! let mut controller = RecordListController::<StockItem>::default()
//!     .with_records(StockItem::seed());
//! let mut state = ListViewState::for_schema::<StockItem>(10);
//!
//! state.filters.set_text(0, "toner");
//! state.commit_filters();
//! let view = controller.view(&state);
//! ```

pub mod confirm_modal;
pub mod controller;
pub mod entry_modal;
pub mod filter;
pub mod id;
pub mod pagination;
pub mod record;
pub mod sort;
pub mod view_state;

#[cfg(test)]
pub(crate) mod test_support;

pub use confirm_modal::ConfirmModal;
pub use controller::{InsertPosition, ListView, RecordListController};
pub use entry_modal::{EntryModal, FormMode, Submission};
pub use filter::{FilterBar, FilterDef, FilterValue};
pub use id::{IdGenerator, IdStrategy, RecordId};
pub use pagination::{total_pages, Pagination};
pub use record::{Record, RecordSchema};
pub use sort::SortState;
pub use view_state::ListViewState;
