pub mod aggregate;

pub use aggregate::{AssetHandover, AssetHandoverPatch};
