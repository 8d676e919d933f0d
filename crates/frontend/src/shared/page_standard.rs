//! Page category constants.
//!
//! Every dashboard page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_stock_item--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical summary view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// `"{entity_index}_{collection_name}--{category}"`
pub fn page_id(entity_index: &str, collection_name: &str, category: &str) -> String {
    format!("{}_{}--{}", entity_index, collection_name, category)
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}
