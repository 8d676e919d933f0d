use crate::shared::record_list::{RecordListPage, RecordListState};
use contracts::domain::a003_asset_handover::AssetHandover;
use contracts::shared::config::DashboardConfig;
use leptos::prelude::*;

fn condition_badge(field: &str, value: &str) -> Option<&'static str> {
    match (field, value) {
        ("condition", "Baik") => Some("success"),
        ("condition", "Rusak Ringan") => Some("warning"),
        ("condition", "Rusak Berat") => Some("error"),
        _ => None,
    }
}

#[component]
pub fn AssetHandoverList() -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let state = RecordListState::new(&config, AssetHandover::seed());

    view! { <RecordListPage state=state badge=condition_badge /> }
}
