//! Sortable table header cell
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Stok"
//!     field="stock"
//!     sort=Signal::derive(move || view_state.with(|s| s.sort.clone()))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::record_list::SortState;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    /// Header text
    #[prop(into)]
    label: String,

    /// Field the column sorts by
    field: &'static str,

    /// Current sort of the list
    #[prop(into)]
    sort: Signal<SortState>,

    /// Called with `field` on click
    on_sort: Callback<&'static str>,

    /// Header alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(field)
            >
                {label}
                <span class=move || sort.with(|s| get_sort_class(s, field))>
                    {move || sort.with(|s| get_sort_indicator(s, field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
