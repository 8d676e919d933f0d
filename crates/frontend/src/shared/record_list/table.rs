//! Generic record table: one sortable column per list field, row actions

use super::state::RecordListState;
use crate::shared::components::table::cell_format::{cell_align, format_cell};
use crate::shared::components::table::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use contracts::shared::metadata::FieldMetadata;
use contracts::shared::record_list::{FilterBar, FilterDef, FilterValue, Record, RecordSchema};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Badge variant for a field's display value, `None` renders plain text
pub type BadgeFn = fn(field: &str, value: &str) -> Option<&'static str>;

/// Computed column appended after the schema columns
pub struct ExtraColumn<T> {
    pub label: &'static str,
    /// Text and badge variant for one record
    pub cell: Arc<dyn Fn(&T) -> (String, &'static str) + Send + Sync>,
}

impl<T> Clone for ExtraColumn<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> ExtraColumn<T> {
    pub fn new(
        label: &'static str,
        cell: impl Fn(&T) -> (String, &'static str) + Send + Sync + 'static,
    ) -> Self {
        Self {
            label,
            cell: Arc::new(cell),
        }
    }
}

/// Text and badge variant of every extra column for one record
pub fn extra_cells<T>(columns: &[ExtraColumn<T>], data: &T) -> Vec<(String, &'static str)> {
    columns.iter().map(|column| (column.cell)(data)).collect()
}

/// Committed search text of the text filter covering `field`
pub fn highlight_needle(bar: &FilterBar, field: &str) -> Option<String> {
    bar.defs().iter().enumerate().find_map(|(index, def)| match def {
        FilterDef::Text { fields, .. } if fields.contains(&field) => match bar.committed(index)? {
            FilterValue::Text(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        },
        _ => None,
    })
}

fn render_cell<T: RecordSchema>(
    record: &Record<T>,
    meta: &'static FieldMetadata,
    bar: &FilterBar,
    badge: Option<BadgeFn>,
) -> AnyView {
    let text = format_cell(meta, &record.data.field_value(meta.name));

    if let Some(variant) = badge.and_then(|f| f(meta.name, &text)) {
        return view! { <Badge variant=variant.to_string()>{text}</Badge> }.into_any();
    }

    match highlight_needle(bar, meta.name) {
        Some(needle) => highlight_matches(&text, &needle),
        None => view! { <span>{text}</span> }.into_any(),
    }
}

#[component]
pub fn RecordTable<T>(
    state: RecordListState<T>,

    /// Columns computed outside the schema
    #[prop(optional)]
    extra_columns: Vec<ExtraColumn<T>>,

    /// Field values rendered as badges
    #[prop(optional)]
    badge: Option<BadgeFn>,
) -> impl IntoView
where
    T: RecordSchema + Send + Sync,
{
    let fields = T::list_fields();
    let column_count = fields.len() + extra_columns.len() + 1;
    let extra_labels: Vec<&'static str> = extra_columns.iter().map(|c| c.label).collect();
    let extra_columns = StoredValue::new(extra_columns);

    let sort = Signal::derive(move || state.view_state.with(|s| s.sort.clone()));
    let on_sort = Callback::new(move |field: &'static str| state.toggle_sort(field));

    let headers = fields
        .iter()
        .map(|meta| {
            view! {
                <SortableHeaderCell
                    label=meta.label
                    field=meta.name
                    sort=sort
                    on_sort=on_sort
                    align=cell_align(meta)
                />
            }
        })
        .collect_view();

    let rows = move || {
        let view = state.view();
        if view.items.is_empty() {
            return view! {
                <TableRow>
                    <td class="table__cell table__cell--empty" colspan=column_count.to_string()>
                        "Tidak ada data"
                    </td>
                </TableRow>
            }
            .into_any();
        }

        let bar = state.view_state.with(|s| s.filters.clone());
        view.items
            .into_iter()
            .map(|record| {
                let cells = T::list_fields()
                    .into_iter()
                    .map(|meta| {
                        let class = if cell_align(meta) == "right" {
                            "table__cell--right"
                        } else {
                            ""
                        };
                        let content = render_cell(&record, meta, &bar, badge);
                        view! {
                            <TableCell class=class>
                                <TableCellLayout truncate=true>{content}</TableCellLayout>
                            </TableCell>
                        }
                    })
                    .collect_view();

                let extras = extra_columns.with_value(|columns| {
                    extra_cells(columns, &record.data)
                        .into_iter()
                        .map(|(text, variant)| {
                            view! {
                                <TableCell>
                                    <Badge variant=variant.to_string()>{text}</Badge>
                                </TableCell>
                            }
                        })
                        .collect_view()
                });

                let edit_id = record.id().clone();
                let delete_id = record.id().clone();
                view! {
                    <TableRow>
                        {cells}
                        {extras}
                        <TableCell>
                            <div class="table__actions">
                                <button
                                    class="button button--icon"
                                    title="Ubah"
                                    on:click=move |_| state.open_edit(&edit_id)
                                >
                                    {icon("edit")}
                                </button>
                                <button
                                    class="button button--icon button--danger"
                                    title="Hapus"
                                    on:click=move |_| state.request_delete(&delete_id)
                                >
                                    {icon("trash")}
                                </button>
                            </div>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {headers}
                        {extra_labels
                            .into_iter()
                            .map(|label| view! { <TableHeaderCell>{label}</TableHeaderCell> })
                            .collect_view()}
                        <TableHeaderCell>"Aksi"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
        </div>
    }
}
