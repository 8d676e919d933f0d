//! Create/edit modal driven by the schema's form fields

use super::state::RecordListState;
use crate::shared::components::table::cell_format::format_cell;
use crate::shared::modal::Modal;
use contracts::shared::metadata::{FieldKind, FieldMetadata};
use contracts::shared::record_list::RecordSchema;
use leptos::prelude::*;
use thaw::*;

fn field_input<T>(state: RecordListState<T>, meta: &'static FieldMetadata) -> AnyView
where
    T: RecordSchema + Send + Sync,
{
    let name = meta.name;
    let value = move || {
        state
            .entry
            .with(|m| m.draft().map(|d| d.field_value(name).display()))
            .unwrap_or_default()
    };
    let on_input = move |ev: leptos::ev::Event| state.set_field(name, &event_target_value(&ev));
    let locked = move || state.saving.get();

    match meta.kind {
        FieldKind::Enum => view! {
            <select
                class="form__select"
                prop:value=value
                prop:disabled=locked
                on:change=on_input
            >
                <option value="">"-- Pilih --"</option>
                {meta
                    .options()
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        // Bound on change: the parsed value is written back into the input
        FieldKind::Number => view! {
            <input
                type="number"
                step="any"
                class="form__input form__input--number"
                prop:value=value
                prop:disabled=locked
                on:change=on_input
            />
        }
        .into_any(),
        FieldKind::Date => view! {
            <input
                type="date"
                class="form__input"
                prop:value=value
                prop:disabled=locked
                on:input=on_input
            />
        }
        .into_any(),
        FieldKind::Text => view! {
            <input
                type="text"
                class="form__input"
                placeholder=meta.placeholder.unwrap_or("")
                maxlength=meta.validation.max_length.map(|n| n.to_string())
                prop:value=value
                prop:disabled=locked
                on:input=on_input
            />
        }
        .into_any(),
    }
}

/// Derived fields are previewed from the draft, never typed
fn derived_value<T>(state: RecordListState<T>, meta: &'static FieldMetadata) -> AnyView
where
    T: RecordSchema + Send + Sync,
{
    let text = move || {
        state
            .entry
            .with(|m| m.draft().map(|d| format_cell(meta, &d.field_value(meta.name))))
            .unwrap_or_default()
    };
    view! { <div class="form__readonly">{text}</div> }.into_any()
}

#[component]
pub fn EntryFormModal<T>(state: RecordListState<T>) -> impl IntoView
where
    T: RecordSchema + Send + Sync,
{
    let element_name = T::entity().ui.element_name;
    let title = Signal::derive(move || {
        if state.entry.with(|m| m.is_edit()) {
            format!("Ubah {}", element_name)
        } else {
            format!("Tambah {}", element_name)
        }
    });
    let on_close = Callback::new(move |_| state.cancel_entry());

    let fields = move || {
        T::form_fields()
            .into_iter()
            .map(|meta| {
                let name = meta.name;
                let error = move || {
                    state
                        .entry
                        .with(|m| m.error_for(name).map(str::to_string))
                        .map(|e| view! { <div class="form__error">{e}</div> })
                };
                let control = if meta.derived {
                    derived_value(state, meta)
                } else {
                    field_input(state, meta)
                };

                view! {
                    <div class="form__group">
                        <label class="form__label">
                            {meta.label}
                            {meta.validation.required.then_some(" *")}
                        </label>
                        {control}
                        {error}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || state.entry.with(|m| m.is_open())>
            <Modal title=title on_close=on_close modal_class="modal--form">
                <div class="form">
                    {fields()}
                    <div class="form__actions">
                        <Flex gap=FlexGap::Small justify=FlexJustify::End>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| state.cancel_entry()
                                disabled=state.saving
                            >
                                "Batal"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| state.submit()
                                disabled=state.saving
                            >
                                {move || if state.saving.get() { "Menyimpan..." } else { "Simpan" }}
                            </Button>
                        </Flex>
                    </div>
                </div>
            </Modal>
        </Show>
    }
}
