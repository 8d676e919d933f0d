use crate::shared::record_list::{RecordListPage, RecordListState};
use contracts::domain::a001_stock_item::StockItem;
use contracts::shared::config::DashboardConfig;
use leptos::prelude::*;

fn status_badge(field: &str, value: &str) -> Option<&'static str> {
    match (field, value) {
        ("status", "Aman") => Some("success"),
        ("status", "Menipis") => Some("warning"),
        ("status", "Habis") => Some("error"),
        _ => None,
    }
}

#[component]
pub fn StockItemList() -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let state = RecordListState::new(&config, StockItem::seed());

    view! { <RecordListPage state=state badge=status_badge /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge() {
        assert_eq!(status_badge("status", "Habis"), Some("error"));
        assert_eq!(status_badge("name", "Habis"), None);
    }
}
