use crate::shared::metadata::{
    parse_date, parse_number_or_zero, EntityMetadataInfo, EntityUiMetadata, FieldMetadata,
    FieldValue,
};
use crate::shared::record_list::{FilterDef, RecordSchema};
use crate::shared::seed::parse_seed;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const TAX_TYPES: &[&str] = &["PPh21", "PPh23", "PPN", "PBB"];
pub const PAYMENT_STATUSES: &[&str] = &["Belum Bayar", "Lunas"];

/// Tax obligation for one taxpayer and period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRecord {
    pub taxpayer: String,
    pub tax_number: String,
    pub tax_type: String,
    pub period: Option<NaiveDate>,
    pub amount: f64,
    pub payment_status: String,
}

#[derive(Debug, Clone, Default)]
pub struct TaxRecordPatch {
    pub taxpayer: Option<String>,
    pub tax_number: Option<String>,
    pub tax_type: Option<String>,
    pub period: Option<Option<NaiveDate>>,
    pub amount: Option<f64>,
    pub payment_status: Option<String>,
}

static ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a002",
    collection_name: "tax_record",
    ui: EntityUiMetadata {
        element_name: "Data Pajak",
        list_name: "Data Pajak",
        icon: Some("receipt"),
    },
};

static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("taxpayer", "Wajib Pajak").required(),
    FieldMetadata::text("tax_number", "NPWP")
        .required()
        .max_length(20)
        .placeholder("01.234.567.8-901.000"),
    FieldMetadata::enumeration("tax_type", "Jenis Pajak", TAX_TYPES).required(),
    FieldMetadata::date("period", "Masa Pajak").required(),
    FieldMetadata::number("amount", "Jumlah (Rp)").min(0.0),
    FieldMetadata::enumeration("payment_status", "Status Bayar", PAYMENT_STATUSES),
];

static FILTERS: &[FilterDef] = &[
    FilterDef::Text {
        label: "Cari",
        fields: &["taxpayer", "tax_number"],
        placeholder: "Wajib pajak atau NPWP...",
    },
    FilterDef::Select {
        label: "Jenis Pajak",
        field: "tax_type",
        options: TAX_TYPES,
    },
    FilterDef::Select {
        label: "Status Bayar",
        field: "payment_status",
        options: PAYMENT_STATUSES,
    },
    FilterDef::DateRange {
        label: "Masa Pajak",
        field: "period",
    },
];

impl TaxRecord {
    pub fn seed() -> Vec<Self> {
        parse_seed(ENTITY.collection_name, include_str!("seed.json"))
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == "Lunas"
    }
}

impl RecordSchema for TaxRecord {
    type Patch = TaxRecordPatch;

    fn entity() -> &'static EntityMetadataInfo {
        &ENTITY
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn filters() -> &'static [FilterDef] {
        FILTERS
    }

    fn default_sort() -> Option<&'static str> {
        Some("period")
    }

    fn empty() -> Self {
        Self {
            taxpayer: String::new(),
            tax_number: String::new(),
            tax_type: String::new(),
            period: None,
            amount: 0.0,
            payment_status: "Belum Bayar".to_string(),
        }
    }

    fn label(&self) -> String {
        format!("{} ({})", self.taxpayer, self.tax_type)
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "taxpayer" => FieldValue::text(&self.taxpayer),
            "tax_number" => FieldValue::text(&self.tax_number),
            "tax_type" => FieldValue::text(&self.tax_type),
            "period" => FieldValue::Date(self.period),
            "amount" => FieldValue::Number(self.amount),
            "payment_status" => FieldValue::text(&self.payment_status),
            _ => FieldValue::text(""),
        }
    }

    fn set_field(&mut self, field: &str, raw: &str) {
        match field {
            "taxpayer" => self.taxpayer = raw.to_string(),
            "tax_number" => self.tax_number = raw.to_string(),
            "tax_type" => self.tax_type = raw.to_string(),
            "period" => self.period = parse_date(raw),
            "amount" => self.amount = parse_number_or_zero(raw),
            "payment_status" => self.payment_status = raw.to_string(),
            _ => {}
        }
    }

    fn apply_patch(&mut self, patch: &TaxRecordPatch) {
        if let Some(v) = &patch.taxpayer {
            self.taxpayer = v.clone();
        }
        if let Some(v) = &patch.tax_number {
            self.tax_number = v.clone();
        }
        if let Some(v) = &patch.tax_type {
            self.tax_type = v.clone();
        }
        if let Some(v) = patch.period {
            self.period = v;
        }
        if let Some(v) = patch.amount {
            self.amount = v;
        }
        if let Some(v) = &patch.payment_status {
            self.payment_status = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_list::{EntryModal, ListViewState, RecordListController};

    fn d(y: i32, m: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, day)
    }

    fn tax(taxpayer: &str, tax_type: &str, period: Option<NaiveDate>, status: &str) -> TaxRecord {
        TaxRecord {
            taxpayer: taxpayer.to_string(),
            tax_number: "01.000.000.0-000.000".to_string(),
            tax_type: tax_type.to_string(),
            period,
            amount: 1_000_000.0,
            payment_status: status.to_string(),
        }
    }

    #[test]
    fn test_seed() {
        let seed = TaxRecord::seed();
        assert!(!seed.is_empty());
        assert!(seed
            .iter()
            .all(|t| TAX_TYPES.contains(&t.tax_type.as_str()) && t.period.is_some()));
    }

    #[test]
    fn test_period_is_required() {
        let mut modal = EntryModal::<TaxRecord>::default();
        modal.open_create();
        modal.set_field("taxpayer", "PT Maju");
        modal.set_field("tax_number", "01.234");
        modal.set_field("tax_type", "PPN");
        let errors = modal.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.for_field("period").is_some());

        modal.set_field("period", "2024-03-01");
        assert!(modal.validate().is_ok());
    }

    #[test]
    fn test_filters_combine() {
        let controller = RecordListController::<TaxRecord>::default().with_records(vec![
            tax("PT Maju", "PPN", d(2024, 1, 1), "Lunas"),
            tax("PT Maju", "PPh21", d(2024, 2, 1), "Belum Bayar"),
            tax("CV Sentosa", "PPN", d(2024, 3, 1), "Belum Bayar"),
            tax("CV Sentosa", "PPN", d(2023, 12, 1), "Belum Bayar"),
        ]);
        let mut state = ListViewState::for_schema::<TaxRecord>(10);

        state.filters.set_select(1, "PPN");
        state.filters.set_select(2, "Belum Bayar");
        state.filters.set_date_from(3, d(2024, 1, 1));
        state.commit_filters();

        let view = controller.view(&state);
        assert_eq!(view.total, 1);
        assert_eq!(view.items[0].data.taxpayer, "CV Sentosa");
        assert_eq!(view.items[0].data.period, d(2024, 3, 1));
    }

    #[test]
    fn test_default_sort_by_period() {
        let controller = RecordListController::<TaxRecord>::default().with_records(vec![
            tax("B", "PPN", d(2024, 5, 1), "Lunas"),
            tax("A", "PPN", d(2024, 1, 1), "Lunas"),
        ]);
        let state = ListViewState::for_schema::<TaxRecord>(10);
        let view = controller.view(&state);
        assert_eq!(view.items[0].data.taxpayer, "A");
        assert!(view.items[0].data.is_paid());
    }
}
