use crate::shared::metadata::{
    parse_date, parse_number_or_zero, EntityMetadataInfo, EntityUiMetadata, FieldMetadata,
    FieldValue,
};
use crate::shared::record_list::{FilterDef, RecordSchema};
use crate::shared::seed::parse_seed;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEPARTMENTS: &[&str] = &["HSE", "IT", "Operasional", "Umum"];

/// Procurement plan line compared with what was actually purchased
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcurementPlan {
    pub item: String,
    pub department: String,
    pub plan_date: Option<NaiveDate>,
    pub plan_qty: f64,
    pub plan_amount: f64,
    pub actual_qty: f64,
    pub actual_amount: f64,
    /// actual_amount - plan_amount
    #[serde(default)]
    pub variance: f64,
    /// Variance as a percentage of plan, 0 when nothing was planned
    #[serde(default)]
    pub variance_pct: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ProcurementPlanPatch {
    pub item: Option<String>,
    pub department: Option<String>,
    pub plan_date: Option<Option<NaiveDate>>,
    pub plan_qty: Option<f64>,
    pub plan_amount: Option<f64>,
    pub actual_qty: Option<f64>,
    pub actual_amount: Option<f64>,
}

/// Summary row for a set of plan lines
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanTotals {
    pub count: usize,
    pub plan_qty: f64,
    pub plan_amount: f64,
    pub actual_qty: f64,
    pub actual_amount: f64,
    pub variance: f64,
    pub variance_pct: f64,
}

static ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a006",
    collection_name: "procurement_plan",
    ui: EntityUiMetadata {
        element_name: "Rencana Pengadaan",
        list_name: "Rencana vs Realisasi Pengadaan",
        icon: Some("chart"),
    },
};

static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("item", "Barang").required(),
    FieldMetadata::enumeration("department", "Departemen", DEPARTMENTS).required(),
    FieldMetadata::date("plan_date", "Tanggal Rencana").required(),
    FieldMetadata::number("plan_qty", "Qty Rencana").min(0.0),
    FieldMetadata::number("plan_amount", "Nilai Rencana").min(0.0),
    FieldMetadata::number("actual_qty", "Qty Realisasi").min(0.0),
    FieldMetadata::number("actual_amount", "Nilai Realisasi").min(0.0),
    FieldMetadata::number("variance", "Selisih").derived(),
    FieldMetadata::number("variance_pct", "Selisih (%)").derived(),
];

static FILTERS: &[FilterDef] = &[
    FilterDef::Text {
        label: "Barang",
        fields: &["item"],
        placeholder: "Nama barang...",
    },
    FilterDef::Select {
        label: "Departemen",
        field: "department",
        options: DEPARTMENTS,
    },
    FilterDef::DateRange {
        label: "Tanggal Rencana",
        field: "plan_date",
    },
];

/// Percentage with two decimals; zero plan gives zero
fn variance_pct(variance: f64, plan_amount: f64) -> f64 {
    if plan_amount == 0.0 {
        return 0.0;
    }
    (variance / plan_amount * 10_000.0).round() / 100.0
}

impl ProcurementPlan {
    pub fn seed() -> Vec<Self> {
        parse_seed(ENTITY.collection_name, include_str!("seed.json"))
    }

    pub fn totals<'a>(lines: impl IntoIterator<Item = &'a ProcurementPlan>) -> PlanTotals {
        let mut totals = lines
            .into_iter()
            .fold(PlanTotals::default(), |mut acc, line| {
                acc.count += 1;
                acc.plan_qty += line.plan_qty;
                acc.plan_amount += line.plan_amount;
                acc.actual_qty += line.actual_qty;
                acc.actual_amount += line.actual_amount;
                acc
            });
        totals.variance = totals.actual_amount - totals.plan_amount;
        totals.variance_pct = variance_pct(totals.variance, totals.plan_amount);
        totals
    }
}

impl RecordSchema for ProcurementPlan {
    type Patch = ProcurementPlanPatch;

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
        Some("plan_date")
    }

    fn empty() -> Self {
        Self {
            item: String::new(),
            department: String::new(),
            plan_date: None,
            plan_qty: 0.0,
            plan_amount: 0.0,
            actual_qty: 0.0,
            actual_amount: 0.0,
            variance: 0.0,
            variance_pct: 0.0,
        }
    }

    fn label(&self) -> String {
        format!("{} ({})", self.item, self.department)
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "item" => FieldValue::text(&self.item),
            "department" => FieldValue::text(&self.department),
            "plan_date" => FieldValue::Date(self.plan_date),
            "plan_qty" => FieldValue::Number(self.plan_qty),
            "plan_amount" => FieldValue::Number(self.plan_amount),
            "actual_qty" => FieldValue::Number(self.actual_qty),
            "actual_amount" => FieldValue::Number(self.actual_amount),
            "variance" => FieldValue::Number(self.variance),
            "variance_pct" => FieldValue::Number(self.variance_pct),
            _ => FieldValue::text(""),
        }
    }

    fn set_field(&mut self, field: &str, raw: &str) {
        match field {
            "item" => self.item = raw.to_string(),
            "department" => self.department = raw.to_string(),
            "plan_date" => self.plan_date = parse_date(raw),
            "plan_qty" => self.plan_qty = parse_number_or_zero(raw),
            "plan_amount" => self.plan_amount = parse_number_or_zero(raw),
            "actual_qty" => self.actual_qty = parse_number_or_zero(raw),
            "actual_amount" => self.actual_amount = parse_number_or_zero(raw),
            _ => {}
        }
    }

    fn apply_patch(&mut self, patch: &ProcurementPlanPatch) {
        if let Some(v) = &patch.item {
            self.item = v.clone();
        }
        if let Some(v) = &patch.department {
            self.department = v.clone();
        }
        if let Some(v) = patch.plan_date {
            self.plan_date = v;
        }
        if let Some(v) = patch.plan_qty {
            self.plan_qty = v;
        }
        if let Some(v) = patch.plan_amount {
            self.plan_amount = v;
        }
        if let Some(v) = patch.actual_qty {
            self.actual_qty = v;
        }
        if let Some(v) = patch.actual_amount {
            self.actual_amount = v;
        }
    }

    fn refresh_derived(&mut self) {
        self.variance = self.actual_amount - self.plan_amount;
        self.variance_pct = variance_pct(self.variance, self.plan_amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::to_csv;
    use crate::shared::record_list::{ListViewState, RecordListController};

    fn line(item: &str, department: &str, plan: f64, actual: f64) -> ProcurementPlan {
        let mut line = ProcurementPlan::empty();
        line.item = item.to_string();
        line.department = department.to_string();
        line.plan_date = NaiveDate::from_ymd_opt(2024, 3, 1);
        line.plan_qty = 1.0;
        line.plan_amount = plan;
        line.actual_qty = 1.0;
        line.actual_amount = actual;
        line
    }

    #[test]
    fn test_variance_derived() {
        let controller = RecordListController::<ProcurementPlan>::default()
            .with_records(vec![line("Laptop", "IT", 1000.0, 1250.0), line("Meja", "Umum", 0.0, 300.0)]);
        let laptop = &controller.records()[0].data;
        assert_eq!(laptop.variance, 250.0);
        assert_eq!(laptop.variance_pct, 25.0);

        let meja = &controller.records()[1].data;
        assert_eq!(meja.variance, 300.0);
        assert_eq!(meja.variance_pct, 0.0);
    }

    #[test]
    fn test_variance_pct_rounds_to_two_decimals() {
        assert_eq!(variance_pct(-1.0, 3.0), -33.33);
    }

    #[test]
    fn test_totals_follow_filter() {
        let controller = RecordListController::<ProcurementPlan>::default().with_records(vec![
            line("Laptop", "IT", 1000.0, 800.0),
            line("Lisensi", "IT", 500.0, 500.0),
            line("Helm", "HSE", 200.0, 260.0),
        ]);

        let mut state = ListViewState::for_schema::<ProcurementPlan>(2);
        let all = controller.filtered(&state.filters, &state.sort);
        let totals = ProcurementPlan::totals(all.iter().map(|r| &r.data));
        assert_eq!(totals.count, 3);
        assert_eq!(totals.plan_amount, 1700.0);
        assert_eq!(totals.actual_amount, 1560.0);
        assert_eq!(totals.variance, -140.0);

        state.filters.set_select(1, "IT");
        state.commit_filters();
        let it = controller.filtered(&state.filters, &state.sort);
        let totals = ProcurementPlan::totals(it.iter().map(|r| &r.data));
        assert_eq!(totals.count, 2);
        assert_eq!(totals.variance, -200.0);
        assert_eq!(totals.variance_pct, -13.33);
    }

    #[test]
    fn test_totals_of_nothing() {
        let totals = ProcurementPlan::totals(std::iter::empty());
        assert_eq!(totals, PlanTotals::default());
    }

    #[test]
    fn test_csv_export_of_filtered_set() {
        let controller = RecordListController::<ProcurementPlan>::default().with_records(vec![
            line("Laptop, 14 inci", "IT", 1000.0, 1250.0),
            line("Helm", "HSE", 200.0, 200.0),
        ]);
        let mut state = ListViewState::for_schema::<ProcurementPlan>(10);
        state.filters.set_select(1, "IT");
        state.commit_filters();

        let rows: Vec<_> = controller
            .filtered(&state.filters, &state.sort)
            .into_iter()
            .cloned()
            .collect();
        let csv = to_csv(&rows, ',').unwrap();
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "ID,Barang,Departemen,Tanggal Rencana,Qty Rencana,Nilai Rencana,Qty Realisasi,Nilai Realisasi,Selisih,Selisih (%)"
        );
        assert_eq!(lines[1], "1,\"Laptop, 14 inci\",IT,2024-03-01,1,1000,1,1250,250,25");
    }

    #[test]
    fn test_seed() {
        let seed = ProcurementPlan::seed();
        assert!(seed.len() >= 6);
        assert!(seed.iter().all(|p| DEPARTMENTS.contains(&p.department.as_str())));
    }
}
