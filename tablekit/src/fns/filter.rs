//! Built-in filter functions.
//!
//! Every filter takes the row's cell value and the filter value the user
//! entered. Text comparisons ignore case and surrounding whitespace unless
//! the name says otherwise. Range filters take a two-element list; a blank
//! bound is treated as open.

use std::cmp::Ordering;
use std::sync::{Arc, LazyLock};

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::value::CellValue;

use super::{FilterFn, FilterFns};

static FILTER_FNS: LazyLock<Arc<FilterFns>> = LazyLock::new(|| {
    let entries = [
        ("arrIncludes", Arc::new(arr_includes) as FilterFn),
        ("arrIncludesAll", Arc::new(arr_includes_all) as FilterFn),
        ("arrIncludesSome", Arc::new(arr_includes_some) as FilterFn),
        ("between", Arc::new(between) as FilterFn),
        ("betweenInclusive", Arc::new(between_inclusive) as FilterFn),
        ("contains", Arc::new(contains) as FilterFn),
        ("empty", Arc::new(empty) as FilterFn),
        ("endsWith", Arc::new(ends_with) as FilterFn),
        ("equals", Arc::new(equals) as FilterFn),
        ("equalsString", Arc::new(equals_string) as FilterFn),
        ("fuzzy", Arc::new(fuzzy) as FilterFn),
        ("greaterThan", Arc::new(greater_than) as FilterFn),
        ("greaterThanOrEqualTo", Arc::new(greater_than_or_equal_to) as FilterFn),
        ("inNumberRange", Arc::new(in_number_range) as FilterFn),
        ("includesString", Arc::new(contains) as FilterFn),
        ("includesStringSensitive", Arc::new(contains_sensitive) as FilterFn),
        ("lessThan", Arc::new(less_than) as FilterFn),
        ("lessThanOrEqualTo", Arc::new(less_than_or_equal_to) as FilterFn),
        ("notEmpty", Arc::new(not_empty) as FilterFn),
        ("notEquals", Arc::new(not_equals) as FilterFn),
        ("startsWith", Arc::new(starts_with) as FilterFn),
        ("weakEquals", Arc::new(weak_equals) as FilterFn),
    ];
    Arc::new(entries.into_iter().collect())
});

/// The built-in filter functions.
pub fn filter_fns() -> Arc<FilterFns> {
    Arc::clone(&FILTER_FNS)
}

/// Fuzzy match of the filter text against the cell text, via nucleo-matcher.
///
/// An empty filter matches everything.
pub fn fuzzy(value: &CellValue, filter: &CellValue) -> bool {
    fuzzy_score(value, filter).is_some()
}

/// Score of a fuzzy match (higher is better), or `None` when it doesn't match.
pub fn fuzzy_score(value: &CellValue, filter: &CellValue) -> Option<u32> {
    let query = filter.to_string();
    if query.trim().is_empty() {
        return Some(0);
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        &query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let text = value.to_string();
    let mut buf = Vec::new();
    let haystack = Utf32Str::new(&text, &mut buf);
    pattern.score(haystack, &mut matcher)
}

/// Case-insensitive substring match.
pub fn contains(value: &CellValue, filter: &CellValue) -> bool {
    value.normalized_text().contains(&filter.normalized_text())
}

/// Case-sensitive substring match.
pub fn contains_sensitive(value: &CellValue, filter: &CellValue) -> bool {
    value.to_string().contains(&filter.to_string())
}

pub fn starts_with(value: &CellValue, filter: &CellValue) -> bool {
    value.normalized_text().starts_with(&filter.normalized_text())
}

pub fn ends_with(value: &CellValue, filter: &CellValue) -> bool {
    value.normalized_text().ends_with(&filter.normalized_text())
}

/// Strict equality: same kind and same value. Integers and floats compare
/// numerically, so `1` equals `1.0`, but `"1"` does not.
pub fn equals(value: &CellValue, filter: &CellValue) -> bool {
    match (value, filter) {
        (CellValue::Int(_) | CellValue::Float(_), CellValue::Int(_) | CellValue::Float(_)) => {
            value.as_f64() == filter.as_f64()
        }
        _ => value == filter,
    }
}

/// Case-insensitive text equality.
pub fn equals_string(value: &CellValue, filter: &CellValue) -> bool {
    value.normalized_text() == filter.normalized_text()
}

pub fn not_equals(value: &CellValue, filter: &CellValue) -> bool {
    !equals(value, filter)
}

/// Loose equality: numerically when both sides read as numbers, otherwise
/// by displayed text with case. `"1"` equals `1`.
pub fn weak_equals(value: &CellValue, filter: &CellValue) -> bool {
    match (value.as_f64(), filter.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => value.to_string() == filter.to_string(),
    }
}

pub fn empty(value: &CellValue, _filter: &CellValue) -> bool {
    value.is_empty()
}

pub fn not_empty(value: &CellValue, _filter: &CellValue) -> bool {
    !value.is_empty()
}

pub fn greater_than(value: &CellValue, filter: &CellValue) -> bool {
    value.loose_cmp(filter) == Ordering::Greater
}

pub fn greater_than_or_equal_to(value: &CellValue, filter: &CellValue) -> bool {
    value.loose_cmp(filter) != Ordering::Less
}

pub fn less_than(value: &CellValue, filter: &CellValue) -> bool {
    value.loose_cmp(filter) == Ordering::Less
}

pub fn less_than_or_equal_to(value: &CellValue, filter: &CellValue) -> bool {
    value.loose_cmp(filter) != Ordering::Greater
}

fn bounds(filter: &CellValue) -> (Option<&CellValue>, Option<&CellValue>) {
    let items = filter.as_list();
    (open_bound(items.first()), open_bound(items.get(1)))
}

fn open_bound(bound: Option<&CellValue>) -> Option<&CellValue> {
    bound.filter(|b| !b.is_empty())
}

/// Strictly between the two bounds.
pub fn between(value: &CellValue, filter: &CellValue) -> bool {
    let (lo, hi) = bounds(filter);
    lo.is_none_or(|lo| greater_than(value, lo)) && hi.is_none_or(|hi| less_than(value, hi))
}

/// Between the two bounds, bounds included.
pub fn between_inclusive(value: &CellValue, filter: &CellValue) -> bool {
    let (lo, hi) = bounds(filter);
    lo.is_none_or(|lo| greater_than_or_equal_to(value, lo))
        && hi.is_none_or(|hi| less_than_or_equal_to(value, hi))
}

/// Numeric range check, bounds included. Non-numeric cells never match.
pub fn in_number_range(value: &CellValue, filter: &CellValue) -> bool {
    let Some(n) = value.as_f64() else {
        return false;
    };
    let (lo, hi) = bounds(filter);
    lo.and_then(CellValue::as_f64).is_none_or(|lo| n >= lo)
        && hi.and_then(CellValue::as_f64).is_none_or(|hi| n <= hi)
}

/// The cell's list holds the filter value.
pub fn arr_includes(value: &CellValue, filter: &CellValue) -> bool {
    value.as_list().contains(filter)
}

/// The cell's list holds every filter value.
pub fn arr_includes_all(value: &CellValue, filter: &CellValue) -> bool {
    let items = value.as_list();
    filter.as_list().iter().all(|f| items.contains(f))
}

/// The cell's list holds at least one filter value.
pub fn arr_includes_some(value: &CellValue, filter: &CellValue) -> bool {
    let items = value.as_list();
    filter.as_list().iter().any(|f| items.contains(f))
}
