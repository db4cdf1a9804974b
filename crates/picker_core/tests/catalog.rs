use picker_core::{Catalog, Filter, Record};
use pretty_assertions::assert_eq;

fn record(name: &str, category: &str) -> Record {
    Record {
        name: name.to_string(),
        category: category.to_string(),
        ..Record::default()
    }
}

fn sample() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.load(vec![
        record("A", "Thai"),
        record("B", "Pizza"),
        record("C", "Thai"),
        record("D", ""),
        record("E", "Cafe"),
    ]);
    catalog
}

fn filtered_names(catalog: &Catalog) -> Vec<String> {
    catalog.filtered().map(|r| r.name.clone()).collect()
}

#[test]
fn load_exposes_everything() {
    let catalog = sample();
    assert_eq!(catalog.filtered_len(), 5);
    assert_eq!(filtered_names(&catalog), vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn filter_keeps_relative_order_and_does_not_mutate_all() {
    let mut catalog = sample();
    catalog.apply_filter(|r| r.category == "Thai");
    assert_eq!(filtered_names(&catalog), vec!["A", "C"]);
    assert_eq!(catalog.all().len(), 5);
}

#[test]
fn apply_filter_is_idempotent() {
    let mut catalog = sample();
    let filter = Filter::Category("Thai".to_string());
    catalog.apply_filter(|r| filter.matches(r));
    let first = filtered_names(&catalog);
    catalog.apply_filter(|r| filter.matches(r));
    assert_eq!(filtered_names(&catalog), first);
}

#[test]
fn always_true_filter_equals_clear() {
    let mut filtered = sample();
    filtered.apply_filter(|_| true);

    let mut cleared = sample();
    cleared.apply_filter(|r| r.category == "Pizza");
    cleared.clear_filter();

    assert_eq!(filtered, cleared);
}

#[test]
fn positions_refer_to_filtered_sequence() {
    let mut catalog = sample();
    catalog.apply_filter(|r| r.category == "Thai");
    assert_eq!(catalog.filtered_position("C"), Some(1));
    assert_eq!(catalog.filtered_position("B"), None);
    let id = catalog.filtered_id(1).unwrap();
    assert_eq!(catalog.record(id).unwrap().name, "C");
    assert_eq!(catalog.filtered_id(2), None);
}

#[test]
fn categories_are_distinct_sorted_and_non_empty() {
    assert_eq!(sample().categories(), vec!["Cafe", "Pizza", "Thai"]);
}

#[test]
fn empty_result_is_allowed() {
    let mut catalog = sample();
    catalog.apply_filter(|r| r.category == "Sushi");
    assert_eq!(catalog.filtered_len(), 0);
}
