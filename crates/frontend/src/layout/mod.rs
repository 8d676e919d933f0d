pub mod global_context;
pub mod sidebar;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Application shell: collapsible sidebar on the left, active dashboard in
/// the center.
///
/// ```text
/// +------------------------------------------+
/// |              top bar                     |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = AppGlobalContext::expect();

    view! {
        <div class="app-layout">
            <div class="app-top-header">
                <button
                    class="button button--icon"
                    on:click=move |_| ctx.left_open.update(|open| *open = !*open)
                    title="Tampilkan/sembunyikan menu"
                >
                    {crate::shared::icons::icon("menu")}
                </button>
                <span class="app-top-header__title">"Back Office"</span>
            </div>

            <div class="app-body">
                <Show when=move || ctx.left_open.get()>
                    <aside class="app-sidebar">
                        <Sidebar />
                    </aside>
                </Show>

                <main class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
