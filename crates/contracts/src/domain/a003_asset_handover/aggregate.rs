use crate::shared::metadata::{
    parse_date, EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldValue,
};
use crate::shared::record_list::{FilterDef, RecordSchema};
use crate::shared::seed::parse_seed;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const CONDITIONS: &[&str] = &["Baik", "Rusak Ringan", "Rusak Berat"];

/// Asset hand-over document (berita acara serah terima)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetHandover {
    pub asset_code: String,
    pub asset_name: String,
    pub from_holder: String,
    pub to_holder: String,
    pub handover_date: Option<NaiveDate>,
    pub condition: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default)]
pub struct AssetHandoverPatch {
    pub asset_code: Option<String>,
    pub asset_name: Option<String>,
    pub from_holder: Option<String>,
    pub to_holder: Option<String>,
    pub handover_date: Option<Option<NaiveDate>>,
    pub condition: Option<String>,
    pub notes: Option<String>,
}

static ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a003",
    collection_name: "asset_handover",
    ui: EntityUiMetadata {
        element_name: "Serah Terima Aset",
        list_name: "Serah Terima Aset",
        icon: Some("swap"),
    },
};

static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("asset_code", "Kode Aset")
        .required()
        .max_length(20)
        .placeholder("AST-0001"),
    FieldMetadata::text("asset_name", "Nama Aset").required(),
    FieldMetadata::text("from_holder", "Dari").required(),
    FieldMetadata::text("to_holder", "Kepada").required(),
    FieldMetadata::date("handover_date", "Tanggal Serah Terima").required(),
    FieldMetadata::enumeration("condition", "Kondisi", CONDITIONS),
    FieldMetadata::text("notes", "Catatan")
        .max_length(200)
        .hidden_in_list(),
];

static FILTERS: &[FilterDef] = &[
    FilterDef::Text {
        label: "Cari",
        fields: &["asset_code", "asset_name", "from_holder", "to_holder"],
        placeholder: "Kode, nama aset atau pemegang...",
    },
    FilterDef::Select {
        label: "Kondisi",
        field: "condition",
        options: CONDITIONS,
    },
    FilterDef::DateRange {
        label: "Tanggal",
        field: "handover_date",
    },
];

impl AssetHandover {
    pub fn seed() -> Vec<Self> {
        parse_seed(ENTITY.collection_name, include_str!("seed.json"))
    }
}

impl RecordSchema for AssetHandover {
    type Patch = AssetHandoverPatch;

    fn entity() -> &'static EntityMetadataInfo {
        &ENTITY
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn filters() -> &'static [FilterDef] {
        FILTERS
    }

    fn empty() -> Self {
        Self {
            asset_code: String::new(),
            asset_name: String::new(),
            from_holder: String::new(),
            to_holder: String::new(),
            handover_date: None,
            condition: "Baik".to_string(),
            notes: String::new(),
        }
    }

    fn label(&self) -> String {
        format!(
            "{} {}: {} \u{2192} {}",
            self.asset_code, self.asset_name, self.from_holder, self.to_holder
        )
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "asset_code" => FieldValue::text(&self.asset_code),
            "asset_name" => FieldValue::text(&self.asset_name),
            "from_holder" => FieldValue::text(&self.from_holder),
            "to_holder" => FieldValue::text(&self.to_holder),
            "handover_date" => FieldValue::Date(self.handover_date),
            "condition" => FieldValue::text(&self.condition),
            "notes" => FieldValue::text(&self.notes),
            _ => FieldValue::text(""),
        }
    }

    fn set_field(&mut self, field: &str, raw: &str) {
        match field {
            "asset_code" => self.asset_code = raw.to_string(),
            "asset_name" => self.asset_name = raw.to_string(),
            "from_holder" => self.from_holder = raw.to_string(),
            "to_holder" => self.to_holder = raw.to_string(),
            "handover_date" => self.handover_date = parse_date(raw),
            "condition" => self.condition = raw.to_string(),
            "notes" => self.notes = raw.to_string(),
            _ => {}
        }
    }

    fn apply_patch(&mut self, patch: &AssetHandoverPatch) {
        if let Some(v) = &patch.asset_code {
            self.asset_code = v.clone();
        }
        if let Some(v) = &patch.asset_name {
            self.asset_name = v.clone();
        }
        if let Some(v) = &patch.from_holder {
            self.from_holder = v.clone();
        }
        if let Some(v) = &patch.to_holder {
            self.to_holder = v.clone();
        }
        if let Some(v) = patch.handover_date {
            self.handover_date = v;
        }
        if let Some(v) = &patch.condition {
            self.condition = v.clone();
        }
        if let Some(v) = &patch.notes {
            self.notes = v.clone();
        }
    }
}
