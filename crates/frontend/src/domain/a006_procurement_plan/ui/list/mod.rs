use crate::shared::components::table::number_format::{format_money, format_number, format_percent};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::record_list::{RecordListPage, RecordListState};
use contracts::domain::a006_procurement_plan::{PlanTotals, ProcurementPlan};
use contracts::shared::config::DashboardConfig;
use leptos::prelude::*;

/// Summary value class by sign of the variance
fn variance_class(variance: f64) -> &'static str {
    if variance > 0.0 {
        "summary__value summary__value--over"
    } else if variance < 0.0 {
        "summary__value summary__value--under"
    } else {
        "summary__value"
    }
}

#[component]
fn PlanTotalsBar(#[prop(into)] totals: Signal<PlanTotals>) -> impl IntoView {
    view! {
        <div class="summary">
            <div class="summary__item">
                <span class="summary__label">"Baris"</span>
                <span class="summary__value">{move || totals.get().count}</span>
            </div>
            <div class="summary__item">
                <span class="summary__label">"Qty Rencana / Realisasi"</span>
                <span class="summary__value">
                    {move || {
                        let t = totals.get();
                        format!("{} / {}", format_number(t.plan_qty), format_number(t.actual_qty))
                    }}
                </span>
            </div>
            <div class="summary__item">
                <span class="summary__label">"Nilai Rencana"</span>
                <span class="summary__value">{move || format_money(totals.get().plan_amount)}</span>
            </div>
            <div class="summary__item">
                <span class="summary__label">"Nilai Realisasi"</span>
                <span class="summary__value">{move || format_money(totals.get().actual_amount)}</span>
            </div>
            <div class="summary__item">
                <span class="summary__label">"Selisih"</span>
                <span class=move || variance_class(totals.get().variance)>
                    {move || {
                        let t = totals.get();
                        format!("{} ({})", format_money(t.variance), format_percent(t.variance_pct))
                    }}
                </span>
            </div>
        </div>
    }
}

#[component]
pub fn ProcurementPlanList() -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let state = RecordListState::new(&config, ProcurementPlan::seed());

    let totals = Memo::new(move |_| {
        let lines = state.filtered();
        ProcurementPlan::totals(lines.iter().map(|r| &r.data))
    });

    view! {
        <RecordListPage
            state=state
            category=PAGE_CAT_DASHBOARD
            export_prefix="rencana_pengadaan"
            summary=move || view! { <PlanTotalsBar totals=totals /> }
        />
    }
}
