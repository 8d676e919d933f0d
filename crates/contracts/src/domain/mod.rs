pub mod a001_stock_item;
pub mod a002_tax_record;
pub mod a003_asset_handover;
pub mod a004_payslip;
pub mod a005_qhse_certificate;
pub mod a006_procurement_plan;
