//! Generic list page over any `RecordSchema`
//!
//! A dashboard builds a `RecordListState` from its seed data and renders
//! `RecordListPage`; table columns, filter inputs and form fields all come
//! from the schema metadata.

pub mod confirm_dialog;
pub mod entry_form;
pub mod page;
pub mod state;
pub mod table;

pub use page::RecordListPage;
pub use state::RecordListState;
pub use table::{BadgeFn, ExtraColumn};
