use crate::shared::metadata::{
    parse_number_or_zero, EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldValue,
};
use crate::shared::record_list::{FilterDef, RecordSchema};
use crate::shared::seed::parse_seed;
use serde::{Deserialize, Serialize};

// ============================================================================
// Derived status
// ============================================================================

/// Stock level relative to the reorder minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StockStatus {
    Aman,
    Menipis,
    #[default]
    Habis,
}

impl StockStatus {
    pub const ALL: &'static [&'static str] = &["Aman", "Menipis", "Habis"];

    /// `Habis` at or below zero, `Menipis` up to the minimum, `Aman` above it
    pub fn from_levels(stock: f64, minimum: f64) -> Self {
        if stock <= 0.0 {
            Self::Habis
        } else if stock <= minimum {
            Self::Menipis
        } else {
            Self::Aman
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aman => "Aman",
            Self::Menipis => "Menipis",
            Self::Habis => "Habis",
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Inventory line (barang)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub code: String,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub stock: f64,
    pub minimum: f64,
    /// Derived from `stock` and `minimum`, never set directly
    #[serde(default)]
    pub status: StockStatus,
}

#[derive(Debug, Clone, Default)]
pub struct StockItemPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub stock: Option<f64>,
    pub minimum: Option<f64>,
}

pub const CATEGORIES: &[&str] = &["Alat Tulis", "Elektronik", "Kebersihan", "Konsumsi"];
pub const UNITS: &[&str] = &["pcs", "box", "rim", "liter", "pak"];

static ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a001",
    collection_name: "stock_item",
    ui: EntityUiMetadata {
        element_name: "Barang",
        list_name: "Stok Barang",
        icon: Some("inventory"),
    },
};

static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("code", "Kode")
        .required()
        .max_length(20)
        .placeholder("BRG-001"),
    FieldMetadata::text("name", "Nama Barang").required(),
    FieldMetadata::enumeration("category", "Kategori", CATEGORIES).required(),
    FieldMetadata::enumeration("unit", "Satuan", UNITS),
    FieldMetadata::number("stock", "Stok").min(0.0),
    FieldMetadata::number("minimum", "Stok Minimum").min(0.0),
    FieldMetadata::enumeration("status", "Status", StockStatus::ALL).derived(),
];

static FILTERS: &[FilterDef] = &[
    FilterDef::Text {
        label: "Cari",
        fields: &["code", "name"],
        placeholder: "Kode atau nama barang...",
    },
    FilterDef::Select {
        label: "Kategori",
        field: "category",
        options: CATEGORIES,
    },
    FilterDef::Select {
        label: "Status",
        field: "status",
        options: StockStatus::ALL,
    },
];

impl StockItem {
    pub fn new(code: &str, name: &str, category: &str, stock: f64, minimum: f64) -> Self {
        let mut item = Self {
            code: code.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            unit: "pcs".to_string(),
            stock,
            minimum,
            status: StockStatus::default(),
        };
        item.refresh_derived();
        item
    }

    pub fn seed() -> Vec<Self> {
        parse_seed(ENTITY.collection_name, include_str!("seed.json"))
    }
}

impl RecordSchema for StockItem {
    type Patch = StockItemPatch;

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
        Some("code")
    }

    fn empty() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            category: String::new(),
            unit: "pcs".to_string(),
            stock: 0.0,
            minimum: 0.0,
            status: StockStatus::default(),
        }
    }

    fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "code" => FieldValue::text(&self.code),
            "name" => FieldValue::text(&self.name),
            "category" => FieldValue::text(&self.category),
            "unit" => FieldValue::text(&self.unit),
            "stock" => FieldValue::Number(self.stock),
            "minimum" => FieldValue::Number(self.minimum),
            "status" => FieldValue::text(self.status.as_str()),
            _ => FieldValue::text(""),
        }
    }

    fn set_field(&mut self, field: &str, raw: &str) {
        match field {
            "code" => self.code = raw.to_string(),
            "name" => self.name = raw.to_string(),
            "category" => self.category = raw.to_string(),
            "unit" => self.unit = raw.to_string(),
            "stock" => self.stock = parse_number_or_zero(raw),
            "minimum" => self.minimum = parse_number_or_zero(raw),
            _ => {}
        }
    }

    fn apply_patch(&mut self, patch: &StockItemPatch) {
        if let Some(v) = &patch.code {
            self.code = v.clone();
        }
        if let Some(v) = &patch.name {
            self.name = v.clone();
        }
        if let Some(v) = &patch.category {
            self.category = v.clone();
        }
        if let Some(v) = &patch.unit {
            self.unit = v.clone();
        }
        if let Some(v) = patch.stock {
            self.stock = v;
        }
        if let Some(v) = patch.minimum {
            self.minimum = v;
        }
    }

    fn refresh_derived(&mut self) {
        self.status = StockStatus::from_levels(self.stock, self.minimum);
    }
}
