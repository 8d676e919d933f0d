use super::state::RecordListState;
use crate::shared::modal::Modal;
use contracts::shared::record_list::RecordSchema;
use leptos::prelude::*;
use thaw::*;

/// "Hapus data?" prompt for the record held by `state.confirm`
#[component]
pub fn ConfirmDeleteDialog<T>(state: RecordListState<T>) -> impl IntoView
where
    T: RecordSchema + Send + Sync,
{
    let label = move || {
        state
            .confirm
            .with(|m| m.label().map(str::to_string))
            .unwrap_or_default()
    };

    view! {
        <Show when=move || state.confirm.with(|m| m.is_open())>
            <Modal
                title="Hapus data?".to_string()
                on_close=Callback::new(move |_| state.cancel_delete())
                modal_class="modal--confirm"
            >
                <p class="confirm__text">
                    "Data "<strong>{label}</strong>" akan dihapus permanen."
                </p>
                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| state.cancel_delete()
                    >
                        "Batal"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        class="button--danger"
                        on_click=move |_| state.confirm_delete()
                    >
                        "Hapus"
                    </Button>
                </Flex>
            </Modal>
        </Show>
    }
}
