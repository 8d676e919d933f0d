use crate::shared::metadata::{
    parse_date, parse_number_or_zero, EntityMetadataInfo, EntityUiMetadata, FieldMetadata,
    FieldValue,
};
use crate::shared::record_list::{FilterDef, RecordSchema};
use crate::shared::seed::parse_seed;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEPARTMENTS: &[&str] = &["HRD", "IT", "Keuangan", "Operasional"];

/// Monthly payslip (slip gaji). `period` holds the first day of the month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    pub employee: String,
    pub department: String,
    pub period: Option<NaiveDate>,
    pub base_salary: f64,
    pub allowance: f64,
    pub deduction: f64,
    /// base_salary + allowance - deduction
    #[serde(default)]
    pub net: f64,
}

#[derive(Debug, Clone, Default)]
pub struct PayslipPatch {
    pub employee: Option<String>,
    pub department: Option<String>,
    pub period: Option<Option<NaiveDate>>,
    pub base_salary: Option<f64>,
    pub allowance: Option<f64>,
    pub deduction: Option<f64>,
}

static ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a004",
    collection_name: "payslip",
    ui: EntityUiMetadata {
        element_name: "Slip Gaji",
        list_name: "Slip Gaji",
        icon: Some("wallet"),
    },
};

static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("employee", "Karyawan").required(),
    FieldMetadata::enumeration("department", "Departemen", DEPARTMENTS).required(),
    FieldMetadata::date("period", "Periode").required(),
    FieldMetadata::number("base_salary", "Gaji Pokok").min(0.0),
    FieldMetadata::number("allowance", "Tunjangan").min(0.0),
    FieldMetadata::number("deduction", "Potongan").min(0.0),
    FieldMetadata::number("net", "Gaji Bersih").derived(),
];

static FILTERS: &[FilterDef] = &[
    FilterDef::Text {
        label: "Karyawan",
        fields: &["employee"],
        placeholder: "Nama karyawan...",
    },
    FilterDef::Select {
        label: "Departemen",
        field: "department",
        options: DEPARTMENTS,
    },
    FilterDef::DateRange {
        label: "Periode",
        field: "period",
    },
];

impl Payslip {
    pub fn seed() -> Vec<Self> {
        parse_seed(ENTITY.collection_name, include_str!("seed.json"))
    }

    pub fn net_of(base_salary: f64, allowance: f64, deduction: f64) -> f64 {
        base_salary + allowance - deduction
    }
}

impl RecordSchema for Payslip {
    type Patch = PayslipPatch;

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
        Some("employee")
    }

    fn empty() -> Self {
        Self {
            employee: String::new(),
            department: String::new(),
            period: None,
            base_salary: 0.0,
            allowance: 0.0,
            deduction: 0.0,
            net: 0.0,
        }
    }

    fn label(&self) -> String {
        match self.period {
            Some(period) => format!("{} ({})", self.employee, period.format("%m/%Y")),
            None => self.employee.clone(),
        }
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "employee" => FieldValue::text(&self.employee),
            "department" => FieldValue::text(&self.department),
            "period" => FieldValue::Date(self.period),
            "base_salary" => FieldValue::Number(self.base_salary),
            "allowance" => FieldValue::Number(self.allowance),
            "deduction" => FieldValue::Number(self.deduction),
            "net" => FieldValue::Number(self.net),
            _ => FieldValue::text(""),
        }
    }

    fn set_field(&mut self, field: &str, raw: &str) {
        match field {
            "employee" => self.employee = raw.to_string(),
            "department" => self.department = raw.to_string(),
            "period" => self.period = parse_date(raw),
            "base_salary" => self.base_salary = parse_number_or_zero(raw),
            "allowance" => self.allowance = parse_number_or_zero(raw),
            "deduction" => self.deduction = parse_number_or_zero(raw),
            _ => {}
        }
    }

    fn apply_patch(&mut self, patch: &PayslipPatch) {
        if let Some(v) = &patch.employee {
            self.employee = v.clone();
        }
        if let Some(v) = &patch.department {
            self.department = v.clone();
        }
        if let Some(v) = patch.period {
            self.period = v;
        }
        if let Some(v) = patch.base_salary {
            self.base_salary = v;
        }
        if let Some(v) = patch.allowance {
            self.allowance = v;
        }
        if let Some(v) = patch.deduction {
            self.deduction = v;
        }
    }

    fn refresh_derived(&mut self) {
        self.net = Self::net_of(self.base_salary, self.allowance, self.deduction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_list::{EntryModal, RecordListController};

    #[test]
    fn test_net_recomputed() {
        let mut controller = RecordListController::<Payslip>::default();
        let mut draft = Payslip::empty();
        draft.employee = "Rina".to_string();
        draft.base_salary = 5_000_000.0;
        draft.allowance = 750_000.0;
        draft.deduction = 250_000.0;
        let id = controller.add(draft).id().clone();
        assert_eq!(controller.get(&id).unwrap().data.net, 5_500_000.0);

        controller.update(
            &id,
            &PayslipPatch {
                deduction: Some(1_000_000.0),
                ..Default::default()
            },
        );
        assert_eq!(controller.get(&id).unwrap().data.net, 4_750_000.0);
    }

    #[test]
    fn test_net_follows_form_input() {
        let mut modal = EntryModal::<Payslip>::default();
        modal.open_create();
        modal.set_field("base_salary", "4 000 000");
        modal.set_field("allowance", "500000");
        modal.set_field("deduction", "abc");
        modal.set_field("net", "1");
        assert_eq!(modal.draft().unwrap().net, 4_500_000.0);
    }

    #[test]
    fn test_negative_deduction_rejected() {
        let mut modal = EntryModal::<Payslip>::default();
        modal.open_create();
        modal.set_field("employee", "Budi");
        modal.set_field("department", "IT");
        modal.set_field("period", "2024-03-01");
        modal.set_field("deduction", "-5");
        let errors = modal.validate().unwrap_err();
        assert!(errors.for_field("deduction").is_some());
    }

    #[test]
    fn test_seed_net_consistent() {
        let controller = RecordListController::<Payslip>::default().with_records(Payslip::seed());
        assert!(!controller.is_empty());
        for record in controller.records() {
            let p = &record.data;
            assert_eq!(p.net, p.base_salary + p.allowance - p.deduction);
        }
    }

    #[test]
    fn test_label_uses_month() {
        let mut slip = Payslip::empty();
        slip.employee = "Dewi".to_string();
        slip.period = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert_eq!(slip.label(), "Dewi (03/2024)");
    }
}
