use picker_core::{AddOutcome, ConfirmError, Record, SelectionError, SelectionSet, MAX_SELECTION};

fn record(name: &str) -> Record {
    Record {
        name: name.to_string(),
        ..Record::default()
    }
}

#[test]
fn duplicate_add_is_noop() {
    let mut selection = SelectionSet::new();
    assert_eq!(selection.add(record("A")), Ok(AddOutcome::Added));
    assert_eq!(selection.add(record("A")), Ok(AddOutcome::AlreadyPresent));
    assert_eq!(selection.len(), 1);
}

#[test]
fn fifth_distinct_record_is_rejected() {
    let mut selection = SelectionSet::new();
    for name in ["A", "B", "C", "D"] {
        selection.add(record(name)).unwrap();
    }
    assert!(selection.is_full());

    let err = selection.add(record("E")).unwrap_err();
    assert_eq!(err, SelectionError::CapacityExceeded { max: MAX_SELECTION });
    assert_eq!(err.to_string(), "You can only select up to 4 restaurants.");
    assert_eq!(selection.len(), 4);
}

#[test]
fn readding_present_record_to_full_set_is_not_an_error() {
    let mut selection = SelectionSet::new();
    for name in ["A", "B", "C", "D"] {
        selection.add(record(name)).unwrap();
    }
    assert_eq!(selection.add(record("B")), Ok(AddOutcome::AlreadyPresent));
}

#[test]
fn remove_missing_name_is_noop() {
    let mut selection = SelectionSet::new();
    selection.add(record("A")).unwrap();
    assert!(selection.remove("Z").is_none());
    assert_eq!(selection.len(), 1);

    assert_eq!(selection.remove("A").map(|r| r.name), Some("A".to_string()));
    assert!(selection.is_empty());
}

#[test]
fn order_is_insertion_order() {
    let mut selection = SelectionSet::new();
    for name in ["C", "A", "B"] {
        selection.add(record(name)).unwrap();
    }
    selection.remove("A");
    let names: Vec<_> = selection.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["C", "B"]);
}

#[test]
fn confirm_joins_names_or_rejects_empty() {
    let mut selection = SelectionSet::new();
    assert_eq!(selection.confirm(), Err(ConfirmError::Empty));
    assert_eq!(
        ConfirmError::Empty.to_string(),
        "Please select at least one restaurant."
    );

    selection.add(record("Noodle Bar")).unwrap();
    selection.add(record("Taqueria")).unwrap();
    assert_eq!(selection.confirm().unwrap(), "Noodle Bar, Taqueria");
}

#[test]
fn custom_capacity() {
    let mut selection = SelectionSet::with_capacity(1);
    selection.add(record("A")).unwrap();
    assert_eq!(
        selection.add(record("B")),
        Err(SelectionError::CapacityExceeded { max: 1 })
    );
}
