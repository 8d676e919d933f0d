pub mod aggregate;

pub use aggregate::{StockItem, StockItemPatch, StockStatus};
