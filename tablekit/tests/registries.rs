use std::cmp::Ordering;
use std::sync::Arc;

use serde_json::Value;
use tablekit::column::{ColumnDefaults, default_column};
use tablekit::fns::{aggregation_fns, filter_fns, sorting_fns};
use tablekit::icons::default_icons;
use tablekit::localization::localization_en;
use tablekit::prelude::*;

#[test]
fn test_custom_sorting_fn_is_added_to_builtins() {
    let resolved = resolve_options(
        TableOptions::<Value>::new().sorting_fn("custom", |a, b| b.loose_cmp(a)),
    );

    for name in sorting_fns().keys() {
        assert!(resolved.sorting_fns.contains(name), "missing {}", name);
    }
    assert!(resolved.sorting_fns.contains("custom"));
    assert_eq!(resolved.sorting_fns.len(), sorting_fns().len() + 1);
}

#[test]
fn test_user_entry_replaces_builtin_of_same_name() {
    let resolved = resolve_options(
        TableOptions::<Value>::new()
            .filter_fn("contains", |_, _| false)
            .sorting_fn("basic", |_, _| Ordering::Equal),
    );

    let contains = resolved.filter_fn("contains").unwrap();
    assert!(!contains(&CellValue::from("abc"), &CellValue::from("b")));

    let basic = resolved.sorting_fn("basic").unwrap();
    assert_eq!(basic(&CellValue::from(1), &CellValue::from(2)), Ordering::Equal);

    // Built-ins themselves are untouched.
    let builtin = filter_fns();
    let contains = builtin.get("contains").unwrap();
    assert!(contains(&CellValue::from("abc"), &CellValue::from("b")));
}

#[test]
fn test_aggregation_fns_merge() {
    let resolved = resolve_options(
        TableOptions::<Value>::new().aggregation_fn("first", |values| {
            values.first().cloned().unwrap_or(CellValue::Null)
        }),
    );

    assert!(resolved.aggregation_fns.contains("sum"));
    let first = resolved.aggregation_fn("first").unwrap();
    let values = [CellValue::from("x"), CellValue::from("y")];
    assert_eq!(first(&values[..]), CellValue::from("x"));
    assert!(!aggregation_fns().contains("first"));
}

#[test]
fn test_icon_and_localization_overrides() {
    let resolved = resolve_options(
        TableOptions::<Value>::new()
            .icon("sortAscending", "^")
            .icon("sparkle", "*")
            .localize("search", "Find"),
    );

    assert_eq!(resolved.icon("sortAscending"), "^");
    assert_eq!(resolved.icon("sparkle"), "*");
    assert_eq!(resolved.icon("sortDescending"), "▼");
    assert_eq!(resolved.text("search"), "Find");
    assert_eq!(resolved.text("clearSort"), "Clear sort");
    assert_eq!(resolved.text("noSuchKey"), "noSuchKey");

    assert_eq!(
        default_icons().get("sortAscending").map(String::as_str),
        Some("▲")
    );
    assert!(!default_icons().contains("sparkle"));
    assert_eq!(
        localization_en().get("search").map(String::as_str),
        Some("Search")
    );
}

#[test]
fn test_localized_message_with_arguments() {
    let resolved = resolve_options(TableOptions::<Value>::new());

    assert_eq!(
        resolved.message("sortByColumnAsc", &[("column", "Age")]),
        "Sort by Age ascending"
    );
}

#[test]
fn test_no_user_entries_shares_builtin_tables() {
    let resolved = resolve_options(TableOptions::<Value>::new());

    assert!(Arc::ptr_eq(&resolved.icons, &default_icons()));
    assert!(Arc::ptr_eq(&resolved.localization, &localization_en()));
    assert!(Arc::ptr_eq(&resolved.filter_fns, &filter_fns()));
    assert!(Arc::ptr_eq(&resolved.default_column, &default_column()));
}

#[test]
fn test_default_column_overlay() {
    let resolved = resolve_options(
        TableOptions::<Value>::new()
            .default_column(ColumnDefaults::new().size(120).enable_sorting(false)),
    );

    assert_eq!(resolved.default_column.size, Some(120));
    assert_eq!(resolved.default_column.enable_sorting, Some(false));
    assert_eq!(resolved.default_column.min_size, Some(40));
    assert_eq!(resolved.default_column.max_size, Some(1000));
    assert_eq!(default_column().size, Some(180));
}

#[test]
fn test_column_defaults_for_column() {
    let resolved = resolve_options(TableOptions::<Value>::new());

    let data = ColumnDef::accessor("age", "Age").with_defaults(ColumnDefaults::new().size(60));
    let effective = resolved.column_defaults(&data);
    assert_eq!(effective.size, Some(60));
    assert_eq!(effective.min_size, Some(40));

    let mut actions = ColumnDef::new("Actions").id("mrt-row-actions");
    actions.defaults.column_def_type = Some(ColumnDefType::Display);
    let effective = resolved.column_defaults(&actions);
    assert_eq!(effective.enable_sorting, Some(false));
    assert_eq!(effective.size, None);
}

#[test]
fn test_registry_overlay_from_json() {
    let options: TableOptions<Value> = TableOptions::from_json(
        r#"{"icons": {"x": "X"}, "localization": {"cancel": "Abort"}, "data": [{}]}"#,
    )
    .unwrap();
    let resolved = resolve_options(options);

    assert_eq!(resolved.icon("x"), "X");
    assert_eq!(resolved.text("cancel"), "Abort");
    assert_eq!(resolved.icons.len(), default_icons().len());
}

#[test]
fn test_default_column_keeps_untyped_keys() {
    let options: TableOptions<Value> = TableOptions::from_json(
        r#"{"defaultColumn": {"minSize": 20, "grow": true, "sortingFn": "basic", "size": 70000}}"#,
    )
    .unwrap();
    let resolved = resolve_options(options);

    assert_eq!(resolved.default_column.min_size, Some(20));
    assert_eq!(resolved.default_column.size, Some(70000));
    assert_eq!(resolved.default_column.max_size, Some(1000));
    assert_eq!(resolved.default_column.extra.get("grow"), Some(&Value::Bool(true)));

    let json = resolved.to_json().unwrap();
    assert_eq!(json["defaultColumn"]["grow"], Value::Bool(true));
    assert_eq!(json["defaultColumn"]["sortingFn"], Value::from("basic"));
    assert_eq!(json["defaultColumn"]["filterVariant"], Value::from("text"));
}

#[test]
fn test_column_extra_keys_overlay_defaults() {
    let resolved = resolve_options(
        TableOptions::<Value>::new().default_column(
            ColumnDefaults::new()
                .extension("sortingFn", "basic")
                .extension("grow", true),
        ),
    );

    let column = ColumnDef::accessor("name", "Name").extension("sortingFn", "alphanumeric");
    let effective = resolved.column_defaults(&column);

    assert_eq!(effective.extra.get("sortingFn"), Some(&Value::from("alphanumeric")));
    assert_eq!(effective.extra.get("grow"), Some(&Value::Bool(true)));
    assert_eq!(
        resolved.default_column.extra.get("sortingFn"),
        Some(&Value::from("basic"))
    );
}
