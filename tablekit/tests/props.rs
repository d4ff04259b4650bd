use serde_json::{Value, json};
use tablekit::prelude::*;

fn props(value: Value) -> PropMap {
    match value {
        Value::Object(map) => map,
        _ => PropMap::new(),
    }
}

#[test]
fn test_static_and_computed_props() {
    let cx = ColumnContext {
        column_id: "age".to_string(),
        header: "Age".to_string(),
        is_group: false,
    };

    let fixed: Prop<PropMap, ColumnContext> = props(json!({"size": "small"})).into();
    assert!(!fixed.is_computed());
    assert_eq!(fixed.get(&cx)["size"], json!("small"));

    let computed = Prop::computed(|cx: &ColumnContext| props(json!({"title": cx.header})));
    assert!(computed.is_computed());
    assert_eq!(computed.get(&cx)["title"], json!("Age"));
}

#[test]
fn test_column_props_override_table_props() {
    let resolved = resolve_options(
        TableOptions::<Value>::new().column_actions_button_props(props(json!({
            "size": "small",
            "title": "Table actions",
        }))),
    );
    let column = ColumnDef::accessor("age", "Age")
        .column_actions_button_props(props(json!({"title": "Age actions"})));

    let merged = resolved.column_actions_button_props(&column);

    assert_eq!(merged["size"], json!("small"));
    assert_eq!(merged["title"], json!("Age actions"));
    assert_eq!(merged["icon"], json!("⋮"));
}

#[test]
fn test_computed_table_props_see_the_column() {
    let resolved = resolve_options(TableOptions::<Value>::new().column_actions_button_props(
        Prop::computed(|cx: &ColumnContext| {
            props(json!({"title": format!("Actions for {}", cx.column_id)}))
        }),
    ));

    let merged = resolved.column_actions_button_props(&ColumnDef::accessor("age", "Age"));
    assert_eq!(merged["title"], json!("Actions for age"));

    let group = ColumnDef::group("Name", vec![ColumnDef::accessor("first", "First")]);
    let merged = resolved.column_actions_button_props(&group);
    assert_eq!(merged["title"], json!("Actions for Name"));
}

#[test]
fn test_props_fall_back_to_localization_and_icons() {
    let resolved = resolve_options(
        TableOptions::<Value>::new()
            .localize("columnActions", "Acties")
            .icon("dotsVertical", "..."),
    );

    let merged = resolved.column_actions_button_props(&ColumnDef::accessor("age", "Age"));

    assert_eq!(merged["title"], json!("Acties"));
    assert_eq!(merged["icon"], json!("..."));
    assert_eq!(merged.len(), 2);
}

#[test]
fn test_merge_props_without_table_props() {
    let cx = ColumnContext::for_column(&ColumnDef::new("Notes").id("notes"));
    let column: Prop<PropMap, ColumnContext> = props(json!({"disabled": true})).into();

    let merged = tablekit::prop::merge_props(None, Some(&column), &cx);
    assert_eq!(merged["disabled"], json!(true));
    assert_eq!(cx.column_id, "notes");

    let merged = tablekit::prop::merge_props::<ColumnContext>(None, None, &cx);
    assert!(merged.is_empty());
}
