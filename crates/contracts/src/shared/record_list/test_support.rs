//! Minimal schema used by the record_list unit tests

use super::filter::FilterDef;
use super::record::RecordSchema;
use crate::shared::metadata::{
    parse_date, parse_number_or_zero, EntityMetadataInfo, EntityUiMetadata, FieldMetadata,
    FieldValue,
};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub category: String,
    pub qty: f64,
    pub received_on: Option<NaiveDate>,
    /// "kosong" when qty <= 0, otherwise "ada"
    pub level: String,
}

#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub qty: Option<f64>,
}

pub fn item(name: &str, category: &str, qty: f64, received_on: Option<NaiveDate>) -> Item {
    Item {
        name: name.to_string(),
        category: category.to_string(),
        qty,
        received_on,
        level: String::new(),
    }
}

static ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "t000",
    collection_name: "item",
    ui: EntityUiMetadata {
        element_name: "Item",
        list_name: "Items",
        icon: None,
    },
};

static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("name", "Nama").required(),
    FieldMetadata::text("category", "Kategori").required(),
    FieldMetadata::number("qty", "Jumlah").min(0.0),
    FieldMetadata::date("received_on", "Tanggal"),
    FieldMetadata::text("level", "Level").derived(),
];

static FILTERS: &[FilterDef] = &[
    FilterDef::Text {
        label: "Cari",
        fields: &["name"],
        placeholder: "",
    },
    FilterDef::Select {
        label: "Kategori",
        field: "category",
        options: &["ATK", "IT"],
    },
    FilterDef::DateRange {
        label: "Tanggal",
        field: "received_on",
    },
];

impl RecordSchema for Item {
    type Patch = ItemPatch;

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
        item("", "", 0.0, None)
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "name" => FieldValue::text(&self.name),
            "category" => FieldValue::text(&self.category),
            "qty" => FieldValue::Number(self.qty),
            "received_on" => FieldValue::Date(self.received_on),
            "level" => FieldValue::text(&self.level),
            _ => FieldValue::text(""),
        }
    }

    fn set_field(&mut self, field: &str, raw: &str) {
        match field {
            "name" => self.name = raw.to_string(),
            "category" => self.category = raw.to_string(),
            "qty" => self.qty = parse_number_or_zero(raw),
            "received_on" => self.received_on = parse_date(raw),
            _ => {}
        }
    }

    fn apply_patch(&mut self, patch: &ItemPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(qty) = patch.qty {
            self.qty = qty;
        }
    }

    fn refresh_derived(&mut self) {
        self.level = if self.qty <= 0.0 { "kosong" } else { "ada" }.to_string();
    }
}
