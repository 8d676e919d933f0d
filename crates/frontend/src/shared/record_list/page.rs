use super::confirm_dialog::ConfirmDeleteDialog;
use super::entry_form::EntryFormModal;
use super::state::RecordListState;
use super::table::{BadgeFn, ExtraColumn, RecordTable};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::badge::Badge;
use crate::shared::export::export_csv;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::shared::record_list::RecordSchema;
use leptos::prelude::*;
use thaw::*;

const CSV_DELIMITER: char = ',';

/// Full list page of one dashboard: header, filter bar, table and both modals
#[component]
pub fn RecordListPage<T>(
    state: RecordListState<T>,

    /// Page category, `PAGE_CAT_LIST` unless given
    #[prop(optional)]
    category: Option<&'static str>,

    #[prop(optional)]
    extra_columns: Vec<ExtraColumn<T>>,

    #[prop(optional)]
    badge: Option<BadgeFn>,

    /// File name prefix; enables the CSV export button of the filtered set
    #[prop(optional)]
    export_prefix: Option<&'static str>,

    /// Rendered between the filter bar and the table
    #[prop(optional, into)]
    summary: Option<ViewFn>,
) -> impl IntoView
where
    T: RecordSchema + Send + Sync,
{
    let entity = T::entity();
    let category = category.unwrap_or(PAGE_CAT_LIST);

    let view = Memo::new(move |_| {
        let v = state.view();
        (v.page, v.total_pages, v.total)
    });
    let current_page = Signal::derive(move || view.get().0);
    let total_pages = Signal::derive(move || view.get().1);
    let total_count = Signal::derive(move || view.get().2);
    let page_size = Signal::derive(move || state.view_state.with(|s| s.pagination.page_size()));

    let pagination = move || {
        view! {
            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                total_count=total_count
                page_size=page_size
                on_page_change=Callback::new(move |page| state.set_page(page))
                on_page_size_change=Callback::new(move |size| state.set_page_size(size))
                page_size_options=state.page_size_options.get_value()
            />
        }
    };

    let export_button = export_prefix.map(|prefix| {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| {
                    if let Err(e) = export_csv(&state.filtered(), prefix, CSV_DELIMITER) {
                        log::error!("export failed: {}", e);
                    }
                }
                disabled=Signal::derive(move || total_count.get() == 0)
            >
                {icon("download")}
                " Ekspor CSV"
            </Button>
        }
    });

    view! {
        <PageFrame
            page_id=page_id(entity.entity_index, entity.collection_name, category)
            category=category
        >
            <div class="page__header">
                <div class="page__header-left">
                    {icon(entity.ui.icon.unwrap_or_default())}
                    <h1 class="page__title">{entity.ui.list_name}</h1>
                    <Badge variant="primary".to_string()>
                        {move || state.total_records().to_string()}
                    </Badge>
                    <Show when=move || state.saving.get()>
                        <span class="page__saving">"Menyimpan..."</span>
                    </Show>
                </div>

                <div class="page__header-right">
                    {export_button}
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.open_create()
                    >
                        {icon("plus")}
                        {format!(" Tambah {}", entity.ui.element_name)}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel view_state=state.view_state pagination=pagination />
                {summary.map(|s| s.run())}
                <RecordTable state=state extra_columns=extra_columns badge=badge.unwrap_or(no_badge) />
            </div>

            <EntryFormModal state=state />
            <ConfirmDeleteDialog state=state />
        </PageFrame>
    }
}

fn no_badge(_field: &str, _value: &str) -> Option<&'static str> {
    None
}
