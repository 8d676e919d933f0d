use crate::shared::record_list::{RecordListPage, RecordListState};
use contracts::domain::a002_tax_record::TaxRecord;
use contracts::shared::config::DashboardConfig;
use leptos::prelude::*;

fn payment_badge(field: &str, value: &str) -> Option<&'static str> {
    match (field, value) {
        ("payment_status", "Lunas") => Some("success"),
        ("payment_status", _) => Some("warning"),
        _ => None,
    }
}

#[component]
pub fn TaxRecordList() -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let state = RecordListState::new(&config, TaxRecord::seed());

    view! { <RecordListPage state=state badge=payment_badge /> }
}
