//! Tests for table structure, search and mutation through the public API

use quickcsv::cell::{record_from, Cell, Record};
use quickcsv::error::QuickCsvError;
use quickcsv::lookup::{LookupIndexValue, LookupValue};
use quickcsv::table::Table;

fn ages() -> Table {
    let mut table = Table::with_headers(&["name", "age"]);
    table.append_record(record_from(&["Alice", "25"]));
    table.append_record(record_from(&["Bob", "30"]));
    table
}

#[test]
fn test_upsert_replaces_then_appends() {
    let mut table = ages();

    table.overwrite_or_insert_record(record_from(&["Alice", "28"]), 0);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.get_record(0).unwrap(), record_from(&["Alice", "28"]));

    table.overwrite_or_insert_record(record_from(&["Carol", "22"]), 0);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.get_record(2).unwrap(), record_from(&["Carol", "22"]));
}

#[test]
fn test_upsert_uses_incoming_value_not_search_string() {
    let mut table = ages();
    // keyed on age: "30" already belongs to Bob, so Bob's row is replaced
    table.overwrite_or_insert_record(record_from(&["Robert", "30"]), 1);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.get_cell(1, 0).unwrap(), Cell::from("Robert"));
}

#[test]
fn test_resolve_column_index_without_headers() {
    let mut table = ages();
    table.disable_headers();
    assert_eq!(table.resolve_column_index("name"), None);
    // the header row is now data
    assert_eq!(table.get_cell(0, 0).unwrap(), Cell::from("name"));
}

#[test]
fn test_resolve_column_index_unknown_name() {
    let table = ages();
    assert!(table.has_headers());
    assert_eq!(table.resolve_column_index("height"), None);
    assert_eq!(table.resolve_column_index("Name"), None);
    assert_eq!(table.resolve_column_index("name"), Some(0));
}

#[test]
fn test_header_toggle_moves_data() {
    let mut table = Table::new(false);
    table.append_record(record_from(&["id", "value"]));
    table.append_record(record_from(&["1", "a"]));
    assert_eq!(table.row_count(), 2);

    table.enable_headers();
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.resolve_column_index("value"), Some(1));

    table.disable_headers();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.headers(), Vec::<String>::new());
    assert_eq!(table.get_record(0).unwrap(), record_from(&["id", "value"]));
}

#[test]
fn test_column_round_trip_restores_widths() {
    let mut table = ages();
    let headers = table.headers();
    let rows: Vec<Record> = table.iter().collect();

    table.add_column(Some("X"), "v").unwrap();
    assert!(table.iter().all(|r| r.len() == 3));
    table.remove_column("X").unwrap();

    assert_eq!(table.headers(), headers);
    assert_eq!(table.iter().collect::<Vec<_>>(), rows);
    assert_eq!(table.column_count(), 2);
}

#[test]
fn test_remove_record_at_row_count_is_out_of_range() {
    let mut table = ages();
    let row_count = table.row_count();
    assert!(matches!(
        table.remove_record(row_count),
        Err(QuickCsvError::IndexOutOfRange { index: 2, len: 2 })
    ));
    assert_eq!(table.row_count(), 2);
    assert!(table.remove_record(row_count - 1).is_ok());
}

#[test]
fn test_search_and_remove_by_criteria() {
    let mut table = ages();
    table.append_record(record_from(&["Carol", "30"]));

    let criteria = [LookupValue::new("30", "age"), LookupValue::new("Carol", "name")];
    assert_eq!(
        table.search_all(&criteria).unwrap(),
        Some(record_from(&["Carol", "30"]))
    );

    let index_criteria = [LookupIndexValue::new("30", 1)];
    assert_eq!(table.find_record_index_all(&index_criteria), Some(1));

    assert!(table.remove_record_if_exists(&LookupValue::new("30", "age")).unwrap());
    assert_eq!(table.find_record_index_all(&index_criteria), Some(1));
    assert_eq!(table.get_cell(1, 0).unwrap(), Cell::from("Carol"));
}

#[test]
fn test_unique_values_are_unique() {
    let mut table = Table::with_headers(&["team", "member"]);
    for (team, member) in [("red", "a"), ("blue", "b"), ("red", "c"), ("red", "d")] {
        table.append_record(record_from(&[team, member]));
    }
    let teams = table.get_unique_column_values("team", None).unwrap();
    assert_eq!(teams, record_from(&["red", "blue"]));
}

#[test]
fn test_set_column_names_does_not_touch_records() {
    let mut table = Table::new(false);
    table.append_record(record_from(&["1", "2", "3"]));
    table.set_column_names(&["a", "b"]);
    assert!(table.has_headers());
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.get_record(0).unwrap().len(), 3);
}

#[test]
fn test_iteration_is_restartable_and_detached() {
    let mut table = ages();
    let first_pass: Vec<Record> = table.iter().collect();
    let mut kept = table.iter().next().unwrap();
    kept[1] = Cell::from("99");

    table.reverse();
    let second_pass: Vec<Record> = (&table).into_iter().collect();
    assert_eq!(first_pass.len(), second_pass.len());
    assert_eq!(second_pass[1], record_from(&["Alice", "25"]));
    assert_eq!(table.get_cell(1, 1).unwrap(), Cell::from("25"));
}
