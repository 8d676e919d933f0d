use crate::layout::global_context::{AppGlobalContext, Dashboard};
use crate::layout::Shell;
use crate::shared::config::load_dashboard_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Loaded once; every list page reads page sizes and ids from it
    provide_context(load_dashboard_config());
    provide_context(AppGlobalContext::new());

    view! {
        <ConfigProvider>
            <Shell center=|| view! { <ActiveDashboard /> }.into_any() />
        </ConfigProvider>
    }
}

/// Renders the dashboard picked in the sidebar. Switching recreates the
/// page, so each dashboard starts again from its seed data.
#[component]
fn ActiveDashboard() -> impl IntoView {
    let ctx = AppGlobalContext::expect();

    move || match ctx.active.get() {
        Dashboard::StockItem => {
            view! { <crate::domain::a001_stock_item::ui::list::StockItemList /> }.into_any()
        }
        Dashboard::TaxRecord => {
            view! { <crate::domain::a002_tax_record::ui::list::TaxRecordList /> }.into_any()
        }
        Dashboard::AssetHandover => {
            view! { <crate::domain::a003_asset_handover::ui::list::AssetHandoverList /> }
                .into_any()
        }
        Dashboard::Payslip => {
            view! { <crate::domain::a004_payslip::ui::list::PayslipList /> }.into_any()
        }
        Dashboard::QhseCertificate => {
            view! { <crate::domain::a005_qhse_certificate::ui::list::QhseCertificateList /> }
                .into_any()
        }
        Dashboard::ProcurementPlan => {
            view! { <crate::domain::a006_procurement_plan::ui::list::ProcurementPlanList /> }
                .into_any()
        }
    }
}
