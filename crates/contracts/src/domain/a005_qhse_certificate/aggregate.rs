use crate::shared::metadata::{
    parse_date, EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldValue,
};
use crate::shared::record_list::{FilterDef, RecordSchema};
use crate::shared::seed::parse_seed;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const ISSUERS: &[&str] = &["Kemnaker", "PMI", "SGS", "SUCOFINDO", "TUV Rheinland"];

/// Validity of a certificate on a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Berlaku,
    SegeraBerakhir,
    Kedaluwarsa,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Berlaku => "Berlaku",
            Self::SegeraBerakhir => "Segera Berakhir",
            Self::Kedaluwarsa => "Kedaluwarsa",
        }
    }
}

/// QHSE certificate or licence
///
/// The alert level is not stored: it depends on the day the list is
/// looked at, so callers pass `today` explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QhseCertificate {
    pub certificate: String,
    pub holder: String,
    #[serde(default)]
    pub issuer: String,
    pub issued_on: Option<NaiveDate>,
    pub expires_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct QhseCertificatePatch {
    pub certificate: Option<String>,
    pub holder: Option<String>,
    pub issuer: Option<String>,
    pub issued_on: Option<Option<NaiveDate>>,
    pub expires_on: Option<Option<NaiveDate>>,
}

static ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a005",
    collection_name: "qhse_certificate",
    ui: EntityUiMetadata {
        element_name: "Sertifikat QHSE",
        list_name: "Sertifikat QHSE",
        icon: Some("shield"),
    },
};

static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("certificate", "Sertifikat").required(),
    FieldMetadata::text("holder", "Pemegang").required(),
    FieldMetadata::enumeration("issuer", "Penerbit", ISSUERS),
    FieldMetadata::date("issued_on", "Tanggal Terbit").required(),
    FieldMetadata::date("expires_on", "Berlaku Sampai").required(),
];

static FILTERS: &[FilterDef] = &[
    FilterDef::Text {
        label: "Cari",
        fields: &["certificate", "holder"],
        placeholder: "Sertifikat atau pemegang...",
    },
    FilterDef::Select {
        label: "Penerbit",
        field: "issuer",
        options: ISSUERS,
    },
    FilterDef::DateRange {
        label: "Berlaku Sampai",
        field: "expires_on",
    },
];

impl QhseCertificate {
    pub fn seed() -> Vec<Self> {
        parse_seed(ENTITY.collection_name, include_str!("seed.json"))
    }

    /// Days from `today` until expiry; negative once expired
    pub fn days_left(&self, today: NaiveDate) -> Option<i64> {
        self.expires_on.map(|d| (d - today).num_days())
    }

    /// `Kedaluwarsa` before `today`, `SegeraBerakhir` within `warning_days`,
    /// otherwise `Berlaku`. A missing expiry date never expires.
    pub fn alert_level(&self, today: NaiveDate, warning_days: i64) -> AlertLevel {
        match self.days_left(today) {
            Some(days) if days < 0 => AlertLevel::Kedaluwarsa,
            Some(days) if days <= warning_days => AlertLevel::SegeraBerakhir,
            _ => AlertLevel::Berlaku,
        }
    }
}

impl RecordSchema for QhseCertificate {
    type Patch = QhseCertificatePatch;

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
        Some("expires_on")
    }

    fn empty() -> Self {
        Self {
            certificate: String::new(),
            holder: String::new(),
            issuer: String::new(),
            issued_on: None,
            expires_on: None,
        }
    }

    fn label(&self) -> String {
        format!("{} - {}", self.certificate, self.holder)
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "certificate" => FieldValue::text(&self.certificate),
            "holder" => FieldValue::text(&self.holder),
            "issuer" => FieldValue::text(&self.issuer),
            "issued_on" => FieldValue::Date(self.issued_on),
            "expires_on" => FieldValue::Date(self.expires_on),
            _ => FieldValue::text(""),
        }
    }

    fn set_field(&mut self, field: &str, raw: &str) {
        match field {
            "certificate" => self.certificate = raw.to_string(),
            "holder" => self.holder = raw.to_string(),
            "issuer" => self.issuer = raw.to_string(),
            "issued_on" => self.issued_on = parse_date(raw),
            "expires_on" => self.expires_on = parse_date(raw),
            _ => {}
        }
    }

    fn apply_patch(&mut self, patch: &QhseCertificatePatch) {
        if let Some(v) = &patch.certificate {
            self.certificate = v.clone();
        }
        if let Some(v) = &patch.holder {
            self.holder = v.clone();
        }
        if let Some(v) = &patch.issuer {
            self.issuer = v.clone();
        }
        if let Some(v) = patch.issued_on {
            self.issued_on = v;
        }
        if let Some(v) = patch.expires_on {
            self.expires_on = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_list::{ListViewState, RecordListController};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn cert(expires_on: Option<NaiveDate>) -> QhseCertificate {
        QhseCertificate {
            certificate: "ISO 45001".to_string(),
            holder: "Plant".to_string(),
            issuer: "SGS".to_string(),
            issued_on: Some(d(2023, 1, 1)),
            expires_on,
        }
    }

    #[test]
    fn test_alert_levels() {
        let today = d(2024, 6, 1);
        assert_eq!(
            cert(Some(d(2024, 5, 31))).alert_level(today, 30),
            AlertLevel::Kedaluwarsa
        );
        assert_eq!(
            cert(Some(d(2024, 6, 1))).alert_level(today, 30),
            AlertLevel::SegeraBerakhir
        );
        assert_eq!(
            cert(Some(d(2024, 7, 1))).alert_level(today, 30),
            AlertLevel::SegeraBerakhir
        );
        assert_eq!(
            cert(Some(d(2024, 7, 2))).alert_level(today, 30),
            AlertLevel::Berlaku
        );
        assert_eq!(cert(None).alert_level(today, 30), AlertLevel::Berlaku);
    }

    #[test]
    fn test_alert_moves_with_today() {
        let c = cert(Some(d(2024, 12, 31)));
        assert_eq!(c.alert_level(d(2024, 1, 1), 30), AlertLevel::Berlaku);
        assert_eq!(c.alert_level(d(2024, 12, 15), 30), AlertLevel::SegeraBerakhir);
        assert_eq!(c.alert_level(d(2025, 1, 1), 30), AlertLevel::Kedaluwarsa);
        assert_eq!(c.days_left(d(2024, 12, 30)), Some(1));
    }

    #[test]
    fn test_expiry_range_filter() {
        let controller = RecordListController::<QhseCertificate>::default().with_records(vec![
            cert(Some(d(2024, 3, 1))),
            cert(Some(d(2024, 9, 1))),
            cert(None),
        ]);
        let mut state = ListViewState::for_schema::<QhseCertificate>(10);
        state.filters.set_date_to(2, Some(d(2024, 6, 30)));
        state.commit_filters();
        let view = controller.view(&state);
        assert_eq!(view.total, 1);
        assert_eq!(view.items[0].data.expires_on, Some(d(2024, 3, 1)));
    }

    #[test]
    fn test_seed() {
        let seed = QhseCertificate::seed();
        assert!(!seed.is_empty());
        assert!(seed.iter().all(|c| c.expires_on > c.issued_on));
    }
}
