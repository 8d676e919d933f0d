use crate::shared::record_list::{RecordListPage, RecordListState};
use contracts::domain::a004_payslip::Payslip;
use contracts::shared::config::DashboardConfig;
use leptos::prelude::*;

#[component]
pub fn PayslipList() -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let state = RecordListState::new(&config, Payslip::seed());

    view! { <RecordListPage state=state /> }
}
