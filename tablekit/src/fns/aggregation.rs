//! Built-in aggregation functions.

use std::cmp::Ordering;
use std::sync::{Arc, LazyLock};

use crate::value::CellValue;

use super::{AggregationFn, AggregationFns};

static AGGREGATION_FNS: LazyLock<Arc<AggregationFns>> = LazyLock::new(|| {
    let entries = [
        ("count", Arc::new(count) as AggregationFn),
        ("extent", Arc::new(extent) as AggregationFn),
        ("max", Arc::new(max) as AggregationFn),
        ("mean", Arc::new(mean) as AggregationFn),
        ("median", Arc::new(median) as AggregationFn),
        ("min", Arc::new(min) as AggregationFn),
        ("sum", Arc::new(sum) as AggregationFn),
        ("unique", Arc::new(unique) as AggregationFn),
        ("uniqueCount", Arc::new(unique_count) as AggregationFn),
    ];
    Arc::new(entries.into_iter().collect())
});

/// The built-in aggregation functions.
pub fn aggregation_fns() -> Arc<AggregationFns> {
    Arc::clone(&AGGREGATION_FNS)
}

fn numbers(values: &[CellValue]) -> Vec<f64> {
    values.iter().filter_map(CellValue::as_f64).collect()
}

fn number(n: f64) -> CellValue {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        CellValue::Int(n as i64)
    } else {
        CellValue::Float(n)
    }
}

/// Number of values.
pub fn count(values: &[CellValue]) -> CellValue {
    CellValue::Int(values.len() as i64)
}

/// Sum of the numeric values.
pub fn sum(values: &[CellValue]) -> CellValue {
    number(numbers(values).iter().sum())
}

/// Smallest numeric value, or null when there are none.
pub fn min(values: &[CellValue]) -> CellValue {
    numbers(values)
        .into_iter()
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .map_or(CellValue::Null, number)
}

/// Largest numeric value, or null when there are none.
pub fn max(values: &[CellValue]) -> CellValue {
    numbers(values)
        .into_iter()
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .map_or(CellValue::Null, number)
}

/// `[min, max]` of the numeric values, or null when there are none.
pub fn extent(values: &[CellValue]) -> CellValue {
    match (min(values), max(values)) {
        (CellValue::Null, _) | (_, CellValue::Null) => CellValue::Null,
        (lo, hi) => CellValue::List(vec![lo, hi]),
    }
}

/// Arithmetic mean of the numeric values.
pub fn mean(values: &[CellValue]) -> CellValue {
    let nums = numbers(values);
    if nums.is_empty() {
        return CellValue::Null;
    }
    CellValue::Float(nums.iter().sum::<f64>() / nums.len() as f64)
}

/// Median of the numeric values.
pub fn median(values: &[CellValue]) -> CellValue {
    let mut nums = numbers(values);
    if nums.is_empty() {
        return CellValue::Null;
    }
    nums.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mid = nums.len() / 2;
    if nums.len() % 2 == 0 {
        CellValue::Float((nums[mid - 1] + nums[mid]) / 2.0)
    } else {
        CellValue::Float(nums[mid])
    }
}

/// Distinct values in first-seen order.
pub fn unique(values: &[CellValue]) -> CellValue {
    let mut seen: Vec<CellValue> = Vec::new();
    for value in values {
        if !seen.contains(value) {
            seen.push(value.clone());
        }
    }
    CellValue::List(seen)
}

/// Number of distinct values.
pub fn unique_count(values: &[CellValue]) -> CellValue {
    match unique(values) {
        CellValue::List(items) => CellValue::Int(items.len() as i64),
        _ => CellValue::Int(0),
    }
}
