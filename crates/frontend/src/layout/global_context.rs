use contracts::domain::a001_stock_item::StockItem;
use contracts::domain::a002_tax_record::TaxRecord;
use contracts::domain::a003_asset_handover::AssetHandover;
use contracts::domain::a004_payslip::Payslip;
use contracts::domain::a005_qhse_certificate::QhseCertificate;
use contracts::domain::a006_procurement_plan::ProcurementPlan;
use contracts::shared::metadata::EntityMetadataInfo;
use contracts::shared::record_list::RecordSchema;
use leptos::prelude::*;

/// Dashboards reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dashboard {
    StockItem,
    TaxRecord,
    AssetHandover,
    Payslip,
    QhseCertificate,
    ProcurementPlan,
}

impl Dashboard {
    pub const ALL: [Dashboard; 6] = [
        Dashboard::StockItem,
        Dashboard::TaxRecord,
        Dashboard::AssetHandover,
        Dashboard::Payslip,
        Dashboard::QhseCertificate,
        Dashboard::ProcurementPlan,
    ];

    pub fn entity(&self) -> &'static EntityMetadataInfo {
        match self {
            Dashboard::StockItem => StockItem::entity(),
            Dashboard::TaxRecord => TaxRecord::entity(),
            Dashboard::AssetHandover => AssetHandover::entity(),
            Dashboard::Payslip => Payslip::entity(),
            Dashboard::QhseCertificate => QhseCertificate::entity(),
            Dashboard::ProcurementPlan => ProcurementPlan::entity(),
        }
    }

    /// Sidebar group the dashboard is listed under
    pub fn group(&self) -> &'static str {
        match self {
            Dashboard::StockItem | Dashboard::AssetHandover => "Gudang & Aset",
            Dashboard::TaxRecord | Dashboard::ProcurementPlan => "Keuangan",
            Dashboard::Payslip => "SDM",
            Dashboard::QhseCertificate => "QHSE",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Dashboard>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Dashboard::StockItem),
            left_open: RwSignal::new(true),
        }
    }

    pub fn expect() -> Self {
        expect_context::<AppGlobalContext>()
    }

    pub fn open(&self, dashboard: Dashboard) {
        if self.active.get_untracked() != dashboard {
            log::debug!("open dashboard {}", dashboard.entity().full_name());
            self.active.set(dashboard);
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
