//! Sidebar menu: one entry per dashboard, grouped by department

use super::global_context::{AppGlobalContext, Dashboard};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<Dashboard>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    let mut groups: Vec<MenuGroup> = Vec::new();
    for dashboard in Dashboard::ALL {
        match groups.iter_mut().find(|g| g.label == dashboard.group()) {
            Some(group) => group.items.push(dashboard),
            None => groups.push(MenuGroup {
                label: dashboard.group(),
                items: vec![dashboard],
            }),
        }
    }
    groups
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = AppGlobalContext::expect();

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="app-sidebar__group">
                            <div class="app-sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .into_iter()
                                .map(|dashboard| {
                                    let ui = &dashboard.entity().ui;
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.active.get() == dashboard
                                            on:click=move |_| ctx.open(dashboard)
                                        >
                                            {icon(ui.icon.unwrap_or("item"))}
                                            <span>{ui.list_name}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_keep_first_appearance_order() {
        let groups = get_menu_groups();
        let labels: Vec<&str> = groups.iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["Gudang & Aset", "Keuangan", "SDM", "QHSE"]);
        assert_eq!(
            groups[0].items,
            vec![Dashboard::StockItem, Dashboard::AssetHandover]
        );
        let total: usize = groups.iter().map(|g| g.items.len()).sum();
        assert_eq!(total, Dashboard::ALL.len());
    }
}
