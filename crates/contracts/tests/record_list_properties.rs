use contracts::domain::a001_stock_item::{StockItem, StockItemPatch};
use contracts::shared::record_list::{
    IdStrategy, InsertPosition, ListViewState, RecordId, RecordListController,
};
use proptest::prelude::*;

const NAMES: [&str; 4] = ["Toner Printer", "Kertas A4", "Pulpen", "Tisu"];
const CATEGORIES: [&str; 2] = ["Alat Tulis", "Elektronik"];

fn arb_item() -> impl Strategy<Value = StockItem> {
    (0..NAMES.len(), 0..CATEGORIES.len(), 0u32..20, 0u32..10).prop_map(
        |(name, category, stock, minimum)| {
            StockItem::new(
                &format!("BRG-{}", stock),
                NAMES[name],
                CATEGORIES[category],
                f64::from(stock),
                f64::from(minimum),
            )
        },
    )
}

fn arb_items() -> impl Strategy<Value = Vec<StockItem>> {
    prop::collection::vec(arb_item(), 0..40)
}

fn arb_insert_position() -> impl Strategy<Value = InsertPosition> {
    prop_oneof![Just(InsertPosition::Head), Just(InsertPosition::Tail)]
}

fn controller(items: Vec<StockItem>, position: InsertPosition) -> RecordListController<StockItem> {
    let mut controller = RecordListController::new(position, IdStrategy::Sequence);
    for item in items {
        controller.add(item);
    }
    controller
}

proptest! {
    #[test]
    fn view_never_exceeds_page_size(
        items in arb_items(),
        page_size in 1usize..12,
        page in 0usize..10,
        search in prop_oneof![Just(""), Just("toner"), Just("kertas")],
    ) {
        let controller = controller(items, InsertPosition::Head);
        let mut state = ListViewState::for_schema::<StockItem>(page_size);
        state.filters.set_text(0, search);
        state.commit_filters();
        state.set_page(page);

        let view = controller.view(&state);
        prop_assert!(view.items.len() <= page_size);
        prop_assert!(view.page >= 1 && view.page <= view.total_pages);
        prop_assert!(view.total_pages >= 1);
    }

    #[test]
    fn pages_partition_filtered_set(
        items in arb_items(),
        page_size in 1usize..8,
        category in prop_oneof![Just(""), Just("Alat Tulis"), Just("Elektronik")],
        position in arb_insert_position(),
    ) {
        let controller = controller(items, position);
        let mut state = ListViewState::for_schema::<StockItem>(page_size);
        state.filters.set_select(1, category);
        state.commit_filters();

        let expected: Vec<RecordId> = controller
            .filtered(&state.filters, &state.sort)
            .iter()
            .map(|r| r.id().clone())
            .collect();

        let total_pages = controller.view(&state).total_pages;
        let mut seen = Vec::new();
        for page in 1..=total_pages {
            state.set_page(page);
            let view = controller.view(&state);
            prop_assert_eq!(view.total, expected.len());
            seen.extend(view.items.iter().map(|r| r.id().clone()));
        }
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn remove_is_idempotent(items in arb_items(), pick in any::<prop::sample::Index>()) {
        let mut controller = controller(items, InsertPosition::Tail);
        prop_assume!(!controller.is_empty());
        let id = controller.records()[pick.index(controller.len())].id().clone();

        controller.remove(&id);
        let once: Vec<RecordId> = controller.records().iter().map(|r| r.id().clone()).collect();
        controller.remove(&id);
        let twice: Vec<RecordId> = controller.records().iter().map(|r| r.id().clone()).collect();

        prop_assert!(!once.contains(&id));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn update_round_trips(
        items in arb_items(),
        pick in any::<prop::sample::Index>(),
        name in "[A-Za-z ]{1,16}",
        stock in 0u32..50,
    ) {
        let mut controller = controller(items, InsertPosition::Head);
        prop_assume!(!controller.is_empty());
        let id = controller.records()[pick.index(controller.len())].id().clone();
        let before = controller.get(&id).cloned();

        let patch = StockItemPatch {
            name: Some(name.clone()),
            stock: Some(f64::from(stock)),
            ..Default::default()
        };
        controller.update(&id, &patch);

        let after = &controller.get(&id).unwrap().data;
        let before = before.unwrap().data;
        prop_assert_eq!(&after.name, &name);
        prop_assert_eq!(after.stock, f64::from(stock));
        prop_assert_eq!(&after.code, &before.code);
        prop_assert_eq!(&after.category, &before.category);
        prop_assert_eq!(after.minimum, before.minimum);
    }
}

#[test]
fn unknown_id_update_changes_nothing() {
    let mut controller = controller(StockItem::seed(), InsertPosition::Head);
    let before: Vec<_> = controller.records().to_vec();
    let result = controller.update(
        &RecordId::new("missing"),
        &StockItemPatch {
            name: Some("X".to_string()),
            ..Default::default()
        },
    );
    assert!(result.is_none());
    assert_eq!(controller.records(), before.as_slice());
}
