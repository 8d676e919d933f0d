pub mod aggregate;

pub use aggregate::{TaxRecord, TaxRecordPatch};
