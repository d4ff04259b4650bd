use std::cmp::Ordering;

use tablekit::fns::{aggregation, filter, sorting};
use tablekit::prelude::*;

fn cells(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::from(*v)).collect()
}

#[test]
fn test_fuzzy_filter() {
    let name = CellValue::from("Ada Lovelace");

    assert!(filter::fuzzy(&name, &CellValue::from("adlv")));
    assert!(filter::fuzzy(&name, &CellValue::from("LOVE")));
    assert!(!filter::fuzzy(&name, &CellValue::from("xyz")));
    assert!(filter::fuzzy(&name, &CellValue::from("  ")));

    let exact = filter::fuzzy_score(&name, &CellValue::from("lovelace")).unwrap();
    let loose = filter::fuzzy_score(&name, &CellValue::from("lvc")).unwrap();
    assert!(exact > loose);
}

#[test]
fn test_text_filters() {
    let city = CellValue::from("Amsterdam");

    assert!(filter::contains(&city, &CellValue::from("STER")));
    assert!(!filter::contains_sensitive(&city, &CellValue::from("STER")));
    assert!(filter::starts_with(&city, &CellValue::from("ams")));
    assert!(filter::ends_with(&city, &CellValue::from("DAM")));
    assert!(filter::equals_string(&city, &CellValue::from(" amsterdam")));
    assert!(filter::not_equals(&city, &CellValue::from("Paris")));
}

#[test]
fn test_strict_and_weak_equality() {
    let city = CellValue::from("Amsterdam");
    assert!(filter::equals(&city, &CellValue::from("Amsterdam")));
    assert!(!filter::equals(&city, &CellValue::from("amsterdam")));
    assert!(!filter::weak_equals(&city, &CellValue::from("amsterdam")));

    let one = CellValue::from(1);
    assert!(filter::equals(&one, &CellValue::from(1.0)));
    assert!(!filter::equals(&one, &CellValue::from("1")));
    assert!(filter::not_equals(&one, &CellValue::from("1")));
    assert!(filter::weak_equals(&one, &CellValue::from("1")));
    assert!(filter::weak_equals(&one, &CellValue::from(" 1.0 ")));
    assert!(!filter::weak_equals(&one, &CellValue::from(2)));

    let equals_string = tablekit::fns::filter_fns();
    let equals_string = equals_string.get("equalsString").unwrap();
    assert!(equals_string(&one, &CellValue::from("1")));
}

#[test]
fn test_empty_filters() {
    assert!(filter::empty(&CellValue::Null, &CellValue::Null));
    assert!(filter::empty(&CellValue::from("   "), &CellValue::Null));
    assert!(filter::not_empty(&CellValue::from(0), &CellValue::Null));
}

#[test]
fn test_comparison_filters() {
    let age = CellValue::from(36);

    assert!(filter::greater_than(&age, &CellValue::from("30")));
    assert!(filter::greater_than_or_equal_to(&age, &CellValue::from(36)));
    assert!(filter::less_than(&age, &CellValue::from(40.5)));
    assert!(!filter::less_than_or_equal_to(&age, &CellValue::from(35)));
}

#[test]
fn test_between_filters() {
    let range = CellValue::from(vec![10, 20]);

    assert!(filter::between(&CellValue::from(15), &range));
    assert!(!filter::between(&CellValue::from(10), &range));
    assert!(filter::between_inclusive(&CellValue::from(10), &range));
    assert!(filter::between_inclusive(&CellValue::from(20), &range));
    assert!(!filter::between_inclusive(&CellValue::from(21), &range));

    // A blank bound leaves that side open.
    let open = CellValue::List(vec![CellValue::from(""), CellValue::from(20)]);
    assert!(filter::between(&CellValue::from(-100), &open));
    assert!(!filter::between(&CellValue::from(25), &open));
}

#[test]
fn test_in_number_range() {
    let range = CellValue::from(vec![1.5, 3.0]);

    assert!(filter::in_number_range(&CellValue::from("2"), &range));
    assert!(filter::in_number_range(&CellValue::from(3), &range));
    assert!(!filter::in_number_range(&CellValue::from(4), &range));
    assert!(!filter::in_number_range(&CellValue::from("two"), &range));
}

#[test]
fn test_array_filters() {
    let tags = CellValue::List(cells(&["rust", "cli", "tui"]));

    assert!(filter::arr_includes(&tags, &CellValue::from("cli")));
    assert!(!filter::arr_includes(&tags, &CellValue::from("web")));
    assert!(filter::arr_includes_all(&tags, &CellValue::List(cells(&["rust", "tui"]))));
    assert!(!filter::arr_includes_all(&tags, &CellValue::List(cells(&["rust", "web"]))));
    assert!(filter::arr_includes_some(&tags, &CellValue::List(cells(&["web", "tui"]))));
}

#[test]
fn test_aggregations() {
    let values = vec![
        CellValue::from(4),
        CellValue::from("1"),
        CellValue::from(2.5),
        CellValue::from("n/a"),
        CellValue::from(4),
    ];

    assert_eq!(aggregation::count(&values), CellValue::Int(5));
    assert_eq!(aggregation::sum(&values), CellValue::Float(11.5));
    assert_eq!(aggregation::min(&values), CellValue::Int(1));
    assert_eq!(aggregation::max(&values), CellValue::Int(4));
    assert_eq!(
        aggregation::extent(&values),
        CellValue::List(vec![CellValue::Int(1), CellValue::Int(4)])
    );
    assert_eq!(aggregation::mean(&values), CellValue::Float(2.875));
    assert_eq!(aggregation::median(&values), CellValue::Float(3.25));
    assert_eq!(aggregation::unique_count(&values), CellValue::Int(4));
}

#[test]
fn test_aggregations_without_numbers() {
    let values = cells(&["a", "b"]);

    assert_eq!(aggregation::sum(&values), CellValue::Int(0));
    assert_eq!(aggregation::mean(&values), CellValue::Null);
    assert_eq!(aggregation::median(&values), CellValue::Null);
    assert_eq!(aggregation::extent(&values), CellValue::Null);
}

#[test]
fn test_alphanumeric_sorting() {
    let mut rows = cells(&["row10", "Row2", "row1", "alpha"]);
    rows.sort_by(sorting::alphanumeric);

    assert_eq!(rows, cells(&["alpha", "row1", "Row2", "row10"]));
}

#[test]
fn test_case_sensitive_sorting() {
    assert_eq!(
        sorting::alphanumeric_case_sensitive(&CellValue::from("B"), &CellValue::from("a")),
        Ordering::Less
    );
    assert_eq!(
        sorting::text(&CellValue::from("B"), &CellValue::from("a")),
        Ordering::Greater
    );
}

#[test]
fn test_basic_and_datetime_sorting() {
    assert_eq!(
        sorting::basic(&CellValue::from(9), &CellValue::from("10")),
        Ordering::Less
    );
    assert_eq!(
        sorting::basic(&CellValue::Null, &CellValue::from(0)),
        Ordering::Less
    );

    let earlier = CellValue::from("2024-01-01T00:00:00Z");
    let later = CellValue::from("2024-06-01T12:00:00+02:00");
    assert_eq!(sorting::datetime(&earlier, &later), Ordering::Less);
}

#[test]
fn test_basic_sorting_of_mixed_values() {
    let mut values = vec![
        CellValue::from("banana"),
        CellValue::from(10),
        CellValue::from("1a"),
        CellValue::Null,
        CellValue::from("9"),
        CellValue::Float(f64::NAN),
        CellValue::from("2024-03-01T00:00:00Z"),
        CellValue::from(true),
        CellValue::from(-2.5),
        CellValue::from("Apple"),
    ];
    for i in 0..200 {
        values.push(CellValue::from(i % 7));
        values.push(CellValue::from(format!("{}x", i % 5)));
    }
    values.sort_by(sorting::basic);

    assert_eq!(values[0], CellValue::Null);
    assert_eq!(values[1], CellValue::from(-2.5));
    for pair in values.windows(2) {
        assert_ne!(sorting::basic(&pair[0], &pair[1]), Ordering::Greater);
    }

    let nan = values
        .iter()
        .position(|v| matches!(v, CellValue::Float(n) if n.is_nan()))
        .unwrap();
    let date = values
        .iter()
        .position(|v| *v == CellValue::from("2024-03-01T00:00:00Z"))
        .unwrap();
    let text = values.iter().position(|v| *v == CellValue::from("1a")).unwrap();
    assert!(nan < date);
    assert!(date < text);
}

#[test]
fn test_builtin_registries_are_complete() {
    let sorting = tablekit::fns::sorting_fns();
    for name in [
        "alphanumeric",
        "alphanumericCaseSensitive",
        "basic",
        "datetime",
        "fuzzy",
        "text",
        "textCaseSensitive",
    ] {
        assert!(sorting.contains(name), "missing sorting fn {}", name);
    }

    let filters = tablekit::fns::filter_fns();
    for name in ["fuzzy", "contains", "between", "betweenInclusive", "inNumberRange"] {
        assert!(filters.contains(name), "missing filter fn {}", name);
    }

    let aggregations = tablekit::fns::aggregation_fns();
    for name in ["count", "mean", "median", "sum", "uniqueCount"] {
        assert!(aggregations.contains(name), "missing aggregation fn {}", name);
    }
}
