pub mod config;
pub mod error;
pub mod export;
pub mod metadata;
pub mod record_list;
pub mod seed;
