//! Props that are either fixed or computed from render context.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::column::ColumnDef;

/// A bag of render props passed through to a widget.
pub type PropMap = Map<String, Value>;

/// A prop value that is either given up front or computed per render.
///
/// Consumers call [`Prop::get`] with the current context instead of checking
/// what kind of prop they hold.
pub enum Prop<T, C> {
    /// A fixed value.
    Static(T),
    /// A value computed from the render context.
    Computed(Arc<dyn Fn(&C) -> T + Send + Sync>),
}

impl<T, C> Prop<T, C> {
    /// Wrap a closure as a computed prop.
    pub fn computed(f: impl Fn(&C) -> T + Send + Sync + 'static) -> Self {
        Prop::Computed(Arc::new(f))
    }

    /// Whether this prop is computed per render.
    pub fn is_computed(&self) -> bool {
        matches!(self, Prop::Computed(_))
    }
}

impl<T: Clone, C> Prop<T, C> {
    /// Produce the prop value for `cx`.
    pub fn get(&self, cx: &C) -> T {
        match self {
            Prop::Static(value) => value.clone(),
            Prop::Computed(f) => f(cx),
        }
    }
}

impl<T: Clone, C> Clone for Prop<T, C> {
    fn clone(&self) -> Self {
        match self {
            Prop::Static(value) => Prop::Static(value.clone()),
            Prop::Computed(f) => Prop::Computed(Arc::clone(f)),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Prop<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prop::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Prop::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl<T, C> From<T> for Prop<T, C> {
    fn from(value: T) -> Self {
        Prop::Static(value)
    }
}

/// Context handed to column-level computed props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnContext {
    /// The column's id.
    pub column_id: String,
    /// The column's header text.
    pub header: String,
    /// Whether the column groups other columns.
    pub is_group: bool,
}

impl ColumnContext {
    /// Build the context for a column.
    pub fn for_column(column: &ColumnDef) -> Self {
        Self {
            column_id: column.column_id().to_string(),
            header: column.header.clone(),
            is_group: column.is_group(),
        }
    }
}

/// Resolve table-level and column-level props and merge them.
///
/// Column-level entries replace table-level entries with the same key.
pub fn merge_props<C>(
    table: Option<&Prop<PropMap, C>>,
    column: Option<&Prop<PropMap, C>>,
    cx: &C,
) -> PropMap {
    let mut merged = table.map(|prop| prop.get(cx)).unwrap_or_default();
    if let Some(column) = column {
        merged.extend(column.get(cx));
    }
    merged
}
