//! Field-schema descriptor for dashboards
//!
//! Every dashboard declares its fields once as `'static` metadata. The
//! generic list, filter, form and export code reads the schema instead of
//! hard-coding a field set per page.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::metadata::FieldMetadata;
//!
//! const FIELDS: &[FieldMetadata] = &[
//!     FieldMetadata::text("name", "Nama Barang").required(),
//!     FieldMetadata::number("stock", "Stok").min(0.0),
//! ];
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::{parse_date, parse_number_or_zero, FieldKind, FieldValue};
pub use types::{EntityMetadataInfo, EntityUiMetadata, FieldMetadata};
pub use validation::ValidationRules;
