pub mod badge;

pub use badge::{variant_class, Badge};
