use crate::shared::date_utils::today;
use crate::shared::record_list::{ExtraColumn, RecordListPage, RecordListState};
use contracts::domain::a005_qhse_certificate::{AlertLevel, QhseCertificate};
use contracts::shared::config::DashboardConfig;
use leptos::prelude::*;

fn alert_variant(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::Berlaku => "success",
        AlertLevel::SegeraBerakhir => "warning",
        AlertLevel::Kedaluwarsa => "error",
    }
}

#[component]
pub fn QhseCertificateList() -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let state = RecordListState::new(&config, QhseCertificate::seed());
    let warning_days = config.ui.expiry_warning_days;

    // Evaluated on every render, so the badge follows the calendar
    let alert = ExtraColumn::new("Status", move |cert: &QhseCertificate| {
        let level = cert.alert_level(today(), warning_days);
        (level.as_str().to_string(), alert_variant(level))
    });

    view! { <RecordListPage state=state extra_columns=vec![alert] /> }
}
