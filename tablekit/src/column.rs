//! Column definitions and column-level defaults.

use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::prop::{ColumnContext, Prop, PropMap};

option_enum! {
    /// Kind of column.
    pub enum ColumnDefType {
        /// Backed by a field of the row data.
        Data => "data",
        /// Generated by the table (row actions, selection, row numbers).
        Display => "display",
        /// Groups child columns under one header.
        Group => "group",
    }
}

option_enum! {
    /// Input used to filter a column.
    pub enum FilterVariant {
        Autocomplete => "autocomplete",
        Checkbox => "checkbox",
        Date => "date",
        DateRange => "date-range",
        MultiSelect => "multi-select",
        Range => "range",
        RangeSlider => "range-slider",
        Select => "select",
        Text => "text",
    }
}

/// Column-level settings that can be defaulted table-wide.
///
/// Every field is optional; [`overlay`](Self::overlay) layers one set of
/// defaults over another field by field. Keys without a typed field (such as
/// `sortingFn` or `grow`) are kept in [`extra`](Self::extra) and overlaid by
/// key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_def_type: Option<ColumnDefType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_variant: Option<FilterVariant>,
    /// Width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_click_to_copy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_column_actions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_column_dragging: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_column_filter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_column_ordering: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_editing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_global_filter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_grouping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_hiding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_resizing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_sorting: Option<bool>,
    /// Column keys without a typed field, kept as given.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ColumnDefaults {
    /// Create an empty set of defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer `user` over these defaults. Fields set in `user` win.
    pub fn overlay(&self, user: &ColumnDefaults) -> ColumnDefaults {
        ColumnDefaults {
            column_def_type: user
                .column_def_type
                .clone()
                .or_else(|| self.column_def_type.clone()),
            filter_variant: user
                .filter_variant
                .clone()
                .or_else(|| self.filter_variant.clone()),
            size: user.size.or(self.size),
            min_size: user.min_size.or(self.min_size),
            max_size: user.max_size.or(self.max_size),
            enable_click_to_copy: user.enable_click_to_copy.or(self.enable_click_to_copy),
            enable_column_actions: user.enable_column_actions.or(self.enable_column_actions),
            enable_column_dragging: user.enable_column_dragging.or(self.enable_column_dragging),
            enable_column_filter: user.enable_column_filter.or(self.enable_column_filter),
            enable_column_ordering: user.enable_column_ordering.or(self.enable_column_ordering),
            enable_editing: user.enable_editing.or(self.enable_editing),
            enable_global_filter: user.enable_global_filter.or(self.enable_global_filter),
            enable_grouping: user.enable_grouping.or(self.enable_grouping),
            enable_hiding: user.enable_hiding.or(self.enable_hiding),
            enable_resizing: user.enable_resizing.or(self.enable_resizing),
            enable_sorting: user.enable_sorting.or(self.enable_sorting),
            extra: {
                let mut extra = self.extra.clone();
                extra.extend(user.extra.clone());
                extra
            },
        }
    }

    /// Set the column width.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the minimum column width.
    pub fn min_size(mut self, size: u32) -> Self {
        self.min_size = Some(size);
        self
    }

    /// Set the maximum column width.
    pub fn max_size(mut self, size: u32) -> Self {
        self.max_size = Some(size);
        self
    }

    /// Set the filter input.
    pub fn filter_variant(mut self, variant: FilterVariant) -> Self {
        self.filter_variant = Some(variant);
        self
    }

    /// Enable or disable sorting for the column.
    pub fn enable_sorting(mut self, enabled: bool) -> Self {
        self.enable_sorting = Some(enabled);
        self
    }

    /// Enable or disable the column filter.
    pub fn enable_column_filter(mut self, enabled: bool) -> Self {
        self.enable_column_filter = Some(enabled);
        self
    }

    /// Enable or disable hiding the column.
    pub fn enable_hiding(mut self, enabled: bool) -> Self {
        self.enable_hiding = Some(enabled);
        self
    }

    /// Set a column key that has no typed field.
    pub fn extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Enable or disable editing cells of the column.
    pub fn enable_editing(mut self, enabled: bool) -> Self {
        self.enable_editing = Some(enabled);
        self
    }
}

static DEFAULT_COLUMN: LazyLock<Arc<ColumnDefaults>> = LazyLock::new(|| {
    Arc::new(ColumnDefaults {
        filter_variant: Some(FilterVariant::Text),
        max_size: Some(1000),
        min_size: Some(40),
        size: Some(180),
        ..Default::default()
    })
});

static DEFAULT_DISPLAY_COLUMN: LazyLock<Arc<ColumnDefaults>> = LazyLock::new(|| {
    Arc::new(ColumnDefaults {
        column_def_type: Some(ColumnDefType::Display),
        enable_click_to_copy: Some(false),
        enable_column_actions: Some(false),
        enable_column_dragging: Some(false),
        enable_column_filter: Some(false),
        enable_column_ordering: Some(false),
        enable_editing: Some(false),
        enable_global_filter: Some(false),
        enable_grouping: Some(false),
        enable_hiding: Some(false),
        enable_resizing: Some(false),
        enable_sorting: Some(false),
        ..Default::default()
    })
});

/// Built-in defaults applied to every data column.
pub fn default_column() -> Arc<ColumnDefaults> {
    Arc::clone(&DEFAULT_COLUMN)
}

/// Built-in defaults applied to generated display columns.
pub fn default_display_column() -> Arc<ColumnDefaults> {
    Arc::clone(&DEFAULT_DISPLAY_COLUMN)
}

/// A column definition.
///
/// Columns form a tree: a column with child `columns` is a header group and
/// the leaves are the columns that actually hold cells.
///
/// # Example
///
/// ```
/// use tablekit::column::ColumnDef;
///
/// let columns = vec![
///     ColumnDef::group("Name", vec![
///         ColumnDef::accessor("firstName", "First Name"),
///         ColumnDef::accessor("lastName", "Last Name"),
///     ]),
///     ColumnDef::accessor("age", "Age"),
/// ];
/// assert_eq!(columns[0].leaf_columns().len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub header: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessor_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Child columns of a header group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ColumnDef>,
    /// Per-column settings, layered over the table's column defaults.
    ///
    /// Unknown column keys (`sortingFn`, `aggregationFn`, ...) land in its
    /// `extra` map and are written back out on serialization.
    #[serde(flatten)]
    pub defaults: ColumnDefaults,
    /// Props for this column's actions button, merged over the table-level props.
    #[serde(skip)]
    pub column_actions_button_props: Option<Prop<PropMap, ColumnContext>>,
}

impl ColumnDef {
    /// Create a column with just a header.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Default::default()
        }
    }

    /// Create a data column reading `key` from each row.
    pub fn accessor(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            accessor_key: Some(key.into()),
            header: header.into(),
            ..Default::default()
        }
    }

    /// Create a header group.
    pub fn group(header: impl Into<String>, columns: Vec<ColumnDef>) -> Self {
        Self {
            header: header.into(),
            columns,
            ..Default::default()
        }
    }

    /// Set an explicit column id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the footer text.
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Set per-column settings.
    pub fn with_defaults(mut self, defaults: ColumnDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Set a column key that has no typed field, such as `sortingFn`.
    pub fn extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.extra.insert(key.into(), value.into());
        self
    }

    /// A column key that has no typed field.
    pub fn get_extension(&self, key: &str) -> Option<&Value> {
        self.defaults.extra.get(key)
    }

    /// Set the column actions button props.
    pub fn column_actions_button_props(
        mut self,
        props: impl Into<Prop<PropMap, ColumnContext>>,
    ) -> Self {
        self.column_actions_button_props = Some(props.into());
        self
    }

    /// The id used to address this column.
    ///
    /// Falls back to the accessor key, then to the header text.
    pub fn column_id(&self) -> &str {
        self.id
            .as_deref()
            .or(self.accessor_key.as_deref())
            .unwrap_or(&self.header)
    }

    /// Whether this column groups other columns.
    pub fn is_group(&self) -> bool {
        !self.columns.is_empty()
    }

    /// Leaf columns under this column, depth-first, left to right.
    ///
    /// A column without children is its own only leaf.
    pub fn leaf_columns(&self) -> Vec<&ColumnDef> {
        if self.columns.is_empty() {
            return vec![self];
        }
        self.columns.iter().flat_map(ColumnDef::leaf_columns).collect()
    }

    /// Number of header rows this column spans (1 for a leaf).
    pub fn depth(&self) -> usize {
        1 + self.columns.iter().map(ColumnDef::depth).max().unwrap_or(0)
    }

    /// This column's settings layered over the table-wide `defaults`.
    pub fn resolved_defaults(&self, defaults: &ColumnDefaults) -> ColumnDefaults {
        defaults.overlay(&self.defaults)
    }
}
