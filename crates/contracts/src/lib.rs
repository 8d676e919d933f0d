//! Shared, renderer-free core of the back-office dashboards: the generic
//! record list and every dashboard schema.

pub mod domain;
pub mod shared;
