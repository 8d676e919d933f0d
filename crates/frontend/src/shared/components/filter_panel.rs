//! Collapsible filter bar: one input per schema filter, explicit search action

use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::shared::metadata::parse_date;
use contracts::shared::record_list::{FilterBar, FilterDef, FilterValue, ListViewState};
use leptos::prelude::*;
use thaw::*;

fn pending_text(bar: &FilterBar, index: usize) -> String {
    match bar.pending(index) {
        Some(FilterValue::Text(s)) | Some(FilterValue::Select(s)) => s.clone(),
        _ => String::new(),
    }
}

fn pending_date(bar: &FilterBar, index: usize, upper: bool) -> String {
    match bar.pending(index) {
        Some(FilterValue::DateRange { from, to }) => {
            let date = if upper { to } else { from };
            date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
        }
        _ => String::new(),
    }
}

/// Chip text for a committed filter, `None` when it is inactive
pub fn describe_filter(def: &FilterDef, value: &FilterValue) -> Option<String> {
    if !value.is_active() {
        return None;
    }
    let text = match value {
        FilterValue::Text(s) => format!("\"{}\"", s.trim()),
        FilterValue::Select(s) => s.clone(),
        FilterValue::DateRange { from, to } => match (from, to) {
            (Some(_), Some(_)) => format!("{} s/d {}", format_date(*from), format_date(*to)),
            (Some(_), None) => format!("sejak {}", format_date(*from)),
            _ => format!("sampai {}", format_date(*to)),
        },
    };
    Some(format!("{}: {}", def.label(), text))
}

#[component]
pub fn FilterPanel(
    /// View state holding pending and committed filter values
    view_state: RwSignal<ListViewState>,

    /// Pagination controls shown in the header
    #[prop(into)]
    pagination: ViewFn,
) -> impl IntoView {
    let is_expanded = RwSignal::new(true);
    let defs = view_state.with_untracked(|s| s.filters.defs());

    let active_filters_count = Signal::derive(move || view_state.with(|s| s.filters.active_count()));
    let is_dirty = Signal::derive(move || view_state.with(|s| s.filters.is_dirty()));

    let commit = move || view_state.update(|s| s.commit_filters());
    let clear = move || view_state.update(|s| s.clear_filters());

    // Drops one chip; uncommitted edits in the other inputs stay pending
    let remove_filter = move |index: usize| view_state.update(|s| s.remove_filter(index));

    let inputs = move || {
        defs.iter()
            .enumerate()
            .map(|(index, def)| match *def {
                FilterDef::Text { label, placeholder, .. } => view! {
                    <div class="filter-field">
                        <Label>{label}</Label>
                        <input
                            type="text"
                            class="form__input"
                            placeholder=placeholder
                            prop:value=move || view_state.with(|s| pending_text(&s.filters, index))
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                view_state.update(|s| s.filters.set_text(index, value));
                            }
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    commit();
                                }
                            }
                        />
                    </div>
                }
                .into_any(),
                FilterDef::Select { label, options, .. } => view! {
                    <div class="filter-field">
                        <Label>{label}</Label>
                        <select
                            class="form__select"
                            prop:value=move || view_state.with(|s| pending_text(&s.filters, index))
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                view_state.update(|s| s.filters.set_select(index, value));
                            }
                        >
                            <option value="">"Semua"</option>
                            {options
                                .iter()
                                .map(|option| view! { <option value=*option>{*option}</option> })
                                .collect_view()}
                        </select>
                    </div>
                }
                .into_any(),
                FilterDef::DateRange { label, .. } => view! {
                    <div class="filter-field">
                        <Label>{label}</Label>
                        <div class="filter-field__range">
                            <input
                                type="date"
                                class="form__input"
                                prop:value=move || view_state.with(|s| pending_date(&s.filters, index, false))
                                on:change=move |ev| {
                                    let from = parse_date(&event_target_value(&ev));
                                    view_state.update(|s| s.filters.set_date_from(index, from));
                                }
                            />
                            <span>"-"</span>
                            <input
                                type="date"
                                class="form__input"
                                prop:value=move || view_state.with(|s| pending_date(&s.filters, index, true))
                                on:change=move |ev| {
                                    let to = parse_date(&event_target_value(&ev));
                                    view_state.update(|s| s.filters.set_date_to(index, to));
                                }
                            />
                        </div>
                    </div>
                }
                .into_any(),
            })
            .collect_view()
    };

    let filter_tags = move || {
        view_state.with(|s| {
            s.filters
                .defs()
                .iter()
                .enumerate()
                .filter_map(|(index, def)| {
                    let value = s.filters.committed(index)?;
                    describe_filter(def, value).map(|label| (index, label))
                })
                .collect::<Vec<_>>()
        })
        .into_iter()
        .map(|(index, label)| {
            view! { <FilterTag label=label on_remove=Callback::new(move |_| remove_filter(index)) /> }
        })
        .collect_view()
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filter"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination.run()}
                </div>
            </div>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        {inputs()}
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| commit()
                        >
                            {icon("search")}
                            {move || if is_dirty.get() { " Cari*" } else { " Cari" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| clear()
                        >
                            "Reset"
                        </Button>
                    </Flex>
                    <div class="filter-panel__tags">{filter_tags}</div>
                </div>
            </Show>
        </div>
    }
}

/// Chip for one active filter
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                title="Hapus filter"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
