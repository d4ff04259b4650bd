//! Built-in aggregation, filter and sorting function registries.
//!
//! Each registry maps a function name to a shared closure. Tables refer to
//! functions by name (`"fuzzy"`, `"between"`, ...) and callers add their own
//! through the matching `TableOptions` field.

pub mod aggregation;
pub mod filter;
pub mod sorting;

use std::cmp::Ordering;
use std::sync::Arc;

use crate::registry::Registry;
use crate::value::CellValue;

pub use aggregation::aggregation_fns;
pub use filter::filter_fns;
pub use sorting::sorting_fns;

/// Combines the values of a column into one value for a grouped row.
pub type AggregationFn = Arc<dyn Fn(&[CellValue]) -> CellValue + Send + Sync>;

/// Decides whether a row's cell value passes a filter value.
pub type FilterFn = Arc<dyn Fn(&CellValue, &CellValue) -> bool + Send + Sync>;

/// Orders two cell values.
pub type SortingFn = Arc<dyn Fn(&CellValue, &CellValue) -> Ordering + Send + Sync>;

pub type AggregationFns = Registry<AggregationFn>;
pub type FilterFns = Registry<FilterFn>;
pub type SortingFns = Registry<SortingFn>;
