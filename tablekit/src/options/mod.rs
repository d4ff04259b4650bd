//! Table options: what callers pass in and what the resolver hands back.
//!
//! [`TableOptions`] is the partially-specified input. Every field is
//! optional. [`ResolvedTableOptions`] is the output of
//! [`resolve_options`](crate::resolve::resolve_options): defaults applied,
//! registries merged, derived flags set.

mod enums;

pub use enums::*;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::column::{ColumnDef, ColumnDefType, ColumnDefaults};
use crate::error::OptionsError;
use crate::fns::{AggregationFn, AggregationFns, FilterFn, FilterFns, SortingFn, SortingFns};
use crate::icons::Icons;
use crate::localization::{Localization, format_message};
use crate::prop::{ColumnContext, Prop, PropMap, merge_props};
use crate::registry::serialize_names;
use crate::value::CellValue;

/// Generates `Option`-setting builder methods.
macro_rules! setters {
    ($($(#[$meta:meta])* $name:ident: $ty:ty;)+) => {
        $(
            $(#[$meta])*
            pub fn $name(mut self, value: $ty) -> Self {
                self.$name = Some(value);
                self
            }
        )+
    };
}

// =============================================================================
// TableOptions
// =============================================================================

/// Partially-specified table configuration.
///
/// Build it in code with the builder methods, or load it from JSON with
/// [`from_json`](Self::from_json). Keys the table doesn't recognize are kept
/// in [`extensions`](Self::extensions) and passed through untouched.
///
/// # Example
///
/// ```
/// use tablekit::prelude::*;
///
/// let options = TableOptions::new()
///     .data(vec![serde_json::json!({"name": "Ada"})])
///     .columns(vec![ColumnDef::accessor("name", "Name")])
///     .enable_row_virtualization(true);
///
/// let resolved = resolve_options(options);
/// assert_eq!(resolved.layout_mode, LayoutMode::Grid);
/// assert!(resolved.enable_sticky_header);
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(
    rename_all = "camelCase",
    default,
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct TableOptions<T> {
    // Registries
    #[serde(skip)]
    pub aggregation_fns: Option<Arc<AggregationFns>>,
    #[serde(skip)]
    pub filter_fns: Option<Arc<FilterFns>>,
    #[serde(skip)]
    pub sorting_fns: Option<Arc<SortingFns>>,
    pub icons: Option<Icons>,
    pub localization: Option<Localization>,
    pub default_column: Option<ColumnDefaults>,
    pub default_display_column: Option<ColumnDefaults>,

    // Defaulted flags
    pub auto_reset_expanded: Option<bool>,
    pub enable_bottom_toolbar: Option<bool>,
    pub enable_column_actions: Option<bool>,
    pub enable_column_filters: Option<bool>,
    pub enable_column_ordering: Option<bool>,
    pub enable_column_resizing: Option<bool>,
    pub enable_density_toggle: Option<bool>,
    pub enable_expand_all: Option<bool>,
    pub enable_expanding: Option<bool>,
    pub enable_filter_match_highlighting: Option<bool>,
    pub enable_filters: Option<bool>,
    pub enable_full_screen_toggle: Option<bool>,
    pub enable_global_filter: Option<bool>,
    pub enable_global_filter_ranked_results: Option<bool>,
    pub enable_grouping: Option<bool>,
    pub enable_hiding: Option<bool>,
    pub enable_multi_row_selection: Option<bool>,
    pub enable_multi_sort: Option<bool>,
    pub enable_pagination: Option<bool>,
    pub enable_pinning: Option<bool>,
    pub enable_row_selection: Option<bool>,
    pub enable_select_all: Option<bool>,
    pub enable_sorting: Option<bool>,
    pub enable_sticky_header: Option<bool>,
    pub enable_table_footer: Option<bool>,
    pub enable_table_head: Option<bool>,
    pub enable_toolbar_internal_actions: Option<bool>,
    pub enable_top_toolbar: Option<bool>,

    // Manual mode flags
    pub manual_filtering: Option<bool>,
    pub manual_grouping: Option<bool>,
    pub manual_pagination: Option<bool>,
    pub manual_sorting: Option<bool>,

    // Enumerations
    pub column_filter_display_mode: Option<ColumnFilterDisplayMode>,
    pub column_resize_mode: Option<ColumnResizeMode>,
    pub create_display_mode: Option<CreateDisplayMode>,
    pub edit_display_mode: Option<EditDisplayMode>,
    pub layout_mode: Option<LayoutMode>,
    pub pagination_display_mode: Option<PaginationDisplayMode>,
    pub position_actions_column: Option<ColumnPosition>,
    pub position_expand_column: Option<ColumnPosition>,
    pub position_global_filter: Option<GlobalFilterPosition>,
    pub position_pagination: Option<ToolbarPosition>,
    pub position_toolbar_alert_banner: Option<ToolbarPosition>,
    pub position_toolbar_drop_zone: Option<ToolbarPosition>,
    pub row_number_mode: Option<RowNumberMode>,
    pub select_all_mode: Option<SelectAllMode>,

    // Passed through without defaults
    pub data: Option<Vec<T>>,
    pub columns: Vec<ColumnDef>,
    pub enable_click_to_copy: Option<bool>,
    pub enable_column_dragging: Option<bool>,
    pub enable_column_filter_modes: Option<bool>,
    pub enable_column_virtualization: Option<bool>,
    pub enable_editing: Option<bool>,
    pub enable_faceted_values: Option<bool>,
    pub enable_row_actions: Option<bool>,
    pub enable_row_dragging: Option<bool>,
    pub enable_row_numbers: Option<bool>,
    pub enable_row_ordering: Option<bool>,
    pub enable_row_virtualization: Option<bool>,
    pub enable_sticky_footer: Option<bool>,
    pub initial_page_size: Option<usize>,
    pub row_id_key: Option<String>,
    #[serde(skip)]
    pub column_actions_button_props: Option<Prop<PropMap, ColumnContext>>,

    /// Unrecognized keys, passed through as given.
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl<T> Default for TableOptions<T> {
    fn default() -> Self {
        Self {
            aggregation_fns: None,
            filter_fns: None,
            sorting_fns: None,
            icons: None,
            localization: None,
            default_column: None,
            default_display_column: None,
            auto_reset_expanded: None,
            enable_bottom_toolbar: None,
            enable_column_actions: None,
            enable_column_filters: None,
            enable_column_ordering: None,
            enable_column_resizing: None,
            enable_density_toggle: None,
            enable_expand_all: None,
            enable_expanding: None,
            enable_filter_match_highlighting: None,
            enable_filters: None,
            enable_full_screen_toggle: None,
            enable_global_filter: None,
            enable_global_filter_ranked_results: None,
            enable_grouping: None,
            enable_hiding: None,
            enable_multi_row_selection: None,
            enable_multi_sort: None,
            enable_pagination: None,
            enable_pinning: None,
            enable_row_selection: None,
            enable_select_all: None,
            enable_sorting: None,
            enable_sticky_header: None,
            enable_table_footer: None,
            enable_table_head: None,
            enable_toolbar_internal_actions: None,
            enable_top_toolbar: None,
            manual_filtering: None,
            manual_grouping: None,
            manual_pagination: None,
            manual_sorting: None,
            column_filter_display_mode: None,
            column_resize_mode: None,
            create_display_mode: None,
            edit_display_mode: None,
            layout_mode: None,
            pagination_display_mode: None,
            position_actions_column: None,
            position_expand_column: None,
            position_global_filter: None,
            position_pagination: None,
            position_toolbar_alert_banner: None,
            position_toolbar_drop_zone: None,
            row_number_mode: None,
            select_all_mode: None,
            data: None,
            columns: Vec::new(),
            enable_click_to_copy: None,
            enable_column_dragging: None,
            enable_column_filter_modes: None,
            enable_column_virtualization: None,
            enable_editing: None,
            enable_faceted_values: None,
            enable_row_actions: None,
            enable_row_dragging: None,
            enable_row_numbers: None,
            enable_row_ordering: None,
            enable_row_virtualization: None,
            enable_sticky_footer: None,
            initial_page_size: None,
            row_id_key: None,
            column_actions_button_props: None,
            extensions: Map::new(),
        }
    }
}

impl<T: DeserializeOwned> TableOptions<T> {
    /// Parse options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse options from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, OptionsError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Load options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

impl<T> TableOptions<T> {
    /// Create options with nothing specified.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row data.
    pub fn data(mut self, data: Vec<T>) -> Self {
        self.data = Some(data);
        self
    }

    /// Set the column definitions.
    pub fn columns(mut self, columns: Vec<ColumnDef>) -> Self {
        self.columns = columns;
        self
    }

    /// Override one icon glyph.
    pub fn icon(mut self, name: impl Into<String>, glyph: impl Into<String>) -> Self {
        self.icons
            .get_or_insert_with(Icons::new)
            .insert(name, glyph.into());
        self
    }

    /// Override one localized message.
    pub fn localize(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.localization
            .get_or_insert_with(Localization::new)
            .insert(key, text.into());
        self
    }

    /// Add or replace an aggregation function.
    pub fn aggregation_fn(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&[CellValue]) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        let registry = self.aggregation_fns.get_or_insert_with(Default::default);
        Arc::make_mut(registry).insert(name, Arc::new(f) as AggregationFn);
        self
    }

    /// Add or replace a filter function.
    pub fn filter_fn(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&CellValue, &CellValue) -> bool + Send + Sync + 'static,
    ) -> Self {
        let registry = self.filter_fns.get_or_insert_with(Default::default);
        Arc::make_mut(registry).insert(name, Arc::new(f) as FilterFn);
        self
    }

    /// Add or replace a sorting function.
    pub fn sorting_fn(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&CellValue, &CellValue) -> std::cmp::Ordering + Send + Sync + 'static,
    ) -> Self {
        let registry = self.sorting_fns.get_or_insert_with(Default::default);
        Arc::make_mut(registry).insert(name, Arc::new(f) as SortingFn);
        self
    }

    /// Set a key the table doesn't know about. It is passed through as given.
    ///
    /// The key is not matched against typed options: `extension("enableSorting",
    /// false)` does not disable sorting, it only overrides the key in
    /// [`ResolvedTableOptions::to_json`].
    pub fn extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    /// Set table-level column actions button props.
    pub fn column_actions_button_props(
        mut self,
        props: impl Into<Prop<PropMap, ColumnContext>>,
    ) -> Self {
        self.column_actions_button_props = Some(props.into());
        self
    }

    setters! {
        /// Share a set of user aggregation functions across renders.
        aggregation_fns: Arc<AggregationFns>;
        /// Share a set of user filter functions across renders.
        filter_fns: Arc<FilterFns>;
        /// Share a set of user sorting functions across renders.
        sorting_fns: Arc<SortingFns>;
        icons: Icons;
        localization: Localization;
        default_column: ColumnDefaults;
        default_display_column: ColumnDefaults;

        auto_reset_expanded: bool;
        enable_bottom_toolbar: bool;
        enable_column_actions: bool;
        enable_column_filters: bool;
        enable_column_ordering: bool;
        enable_column_resizing: bool;
        enable_density_toggle: bool;
        enable_expand_all: bool;
        enable_expanding: bool;
        enable_filter_match_highlighting: bool;
        enable_filters: bool;
        enable_full_screen_toggle: bool;
        enable_global_filter: bool;
        enable_global_filter_ranked_results: bool;
        enable_grouping: bool;
        enable_hiding: bool;
        enable_multi_row_selection: bool;
        enable_multi_sort: bool;
        enable_pagination: bool;
        enable_pinning: bool;
        enable_row_selection: bool;
        enable_select_all: bool;
        enable_sorting: bool;
        enable_sticky_header: bool;
        enable_table_footer: bool;
        enable_table_head: bool;
        enable_toolbar_internal_actions: bool;
        enable_top_toolbar: bool;

        manual_filtering: bool;
        manual_grouping: bool;
        manual_pagination: bool;
        manual_sorting: bool;

        column_filter_display_mode: ColumnFilterDisplayMode;
        column_resize_mode: ColumnResizeMode;
        create_display_mode: CreateDisplayMode;
        edit_display_mode: EditDisplayMode;
        layout_mode: LayoutMode;
        pagination_display_mode: PaginationDisplayMode;
        position_actions_column: ColumnPosition;
        position_expand_column: ColumnPosition;
        position_global_filter: GlobalFilterPosition;
        position_pagination: ToolbarPosition;
        position_toolbar_alert_banner: ToolbarPosition;
        position_toolbar_drop_zone: ToolbarPosition;
        row_number_mode: RowNumberMode;
        select_all_mode: SelectAllMode;

        enable_click_to_copy: bool;
        enable_column_dragging: bool;
        enable_column_filter_modes: bool;
        enable_column_virtualization: bool;
        enable_editing: bool;
        enable_faceted_values: bool;
        enable_row_actions: bool;
        enable_row_dragging: bool;
        enable_row_numbers: bool;
        enable_row_ordering: bool;
        enable_row_virtualization: bool;
        enable_sticky_footer: bool;
        initial_page_size: usize;
        row_id_key: String;
    }
}

// =============================================================================
// ResolvedTableOptions
// =============================================================================

/// Fully-resolved table configuration.
///
/// Every defaulted option holds a concrete value. Registries are shared
/// behind `Arc`; a memoizing [`OptionsResolver`](crate::resolve::OptionsResolver)
/// hands back the same `Arc` while the user's registry input is unchanged.
///
/// Extensions never feed the typed fields. An extension named like a typed
/// option (say `enableSorting`) leaves the typed field at its resolved value
/// but replaces that key in [`to_json`](Self::to_json), so the two views
/// disagree for such keys. Set typed options through their own fields.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTableOptions<T> {
    #[serde(serialize_with = "serialize_names")]
    pub aggregation_fns: Arc<AggregationFns>,
    #[serde(serialize_with = "serialize_names")]
    pub filter_fns: Arc<FilterFns>,
    #[serde(serialize_with = "serialize_names")]
    pub sorting_fns: Arc<SortingFns>,
    pub icons: Arc<Icons>,
    pub localization: Arc<Localization>,
    pub default_column: Arc<ColumnDefaults>,
    pub default_display_column: Arc<ColumnDefaults>,

    pub auto_reset_expanded: bool,
    pub enable_bottom_toolbar: bool,
    pub enable_column_actions: bool,
    pub enable_column_filters: bool,
    pub enable_column_ordering: bool,
    pub enable_column_resizing: bool,
    pub enable_density_toggle: bool,
    pub enable_expand_all: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_expanding: Option<bool>,
    pub enable_filter_match_highlighting: bool,
    pub enable_filters: bool,
    pub enable_full_screen_toggle: bool,
    pub enable_global_filter: bool,
    pub enable_global_filter_ranked_results: bool,
    pub enable_grouping: bool,
    pub enable_hiding: bool,
    pub enable_multi_row_selection: bool,
    pub enable_multi_sort: bool,
    pub enable_pagination: bool,
    pub enable_pinning: bool,
    pub enable_row_selection: bool,
    pub enable_select_all: bool,
    pub enable_sorting: bool,
    pub enable_sticky_header: bool,
    pub enable_table_footer: bool,
    pub enable_table_head: bool,
    pub enable_toolbar_internal_actions: bool,
    pub enable_top_toolbar: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_filtering: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_grouping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_pagination: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_sorting: Option<bool>,

    pub column_filter_display_mode: ColumnFilterDisplayMode,
    pub column_resize_mode: ColumnResizeMode,
    pub create_display_mode: CreateDisplayMode,
    pub edit_display_mode: EditDisplayMode,
    pub layout_mode: LayoutMode,
    pub pagination_display_mode: PaginationDisplayMode,
    pub position_actions_column: ColumnPosition,
    pub position_expand_column: ColumnPosition,
    pub position_global_filter: GlobalFilterPosition,
    pub position_pagination: ToolbarPosition,
    pub position_toolbar_alert_banner: ToolbarPosition,
    pub position_toolbar_drop_zone: ToolbarPosition,
    pub row_number_mode: RowNumberMode,
    pub select_all_mode: SelectAllMode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<T>>,
    pub columns: Vec<ColumnDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_click_to_copy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_column_dragging: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_column_filter_modes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_column_virtualization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_editing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_faceted_values: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_row_actions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_row_dragging: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_row_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_row_ordering: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_row_virtualization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_sticky_footer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_page_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_id_key: Option<String>,
    #[serde(skip)]
    pub column_actions_button_props: Option<Prop<PropMap, ColumnContext>>,

    /// Unrecognized input keys, unchanged.
    #[serde(skip)]
    pub extensions: Map<String, Value>,
}

impl<T> ResolvedTableOptions<T> {
    /// Localized message for `key`, or the key itself when there is none.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.localization.get(key).map_or(key, String::as_str)
    }

    /// Localized message for `key` with `{placeholder}` arguments filled in.
    pub fn message(&self, key: &str, args: &[(&str, &str)]) -> String {
        format_message(self.text(key), args)
    }

    /// Glyph for the named icon, or an empty string when there is none.
    pub fn icon(&self, name: &str) -> &str {
        self.icons.get(name).map_or("", String::as_str)
    }

    pub fn aggregation_fn(&self, name: &str) -> Option<&AggregationFn> {
        self.aggregation_fns.get(name)
    }

    pub fn filter_fn(&self, name: &str) -> Option<&FilterFn> {
        self.filter_fns.get(name)
    }

    pub fn sorting_fn(&self, name: &str) -> Option<&SortingFn> {
        self.sorting_fns.get(name)
    }

    /// A passed-through extension value.
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    /// Effective settings for `column`.
    ///
    /// Display columns start from the display column defaults, all others
    /// from the data column defaults; the column's own settings win.
    pub fn column_defaults(&self, column: &ColumnDef) -> ColumnDefaults {
        let base = match column.defaults.column_def_type {
            Some(ColumnDefType::Display) => &self.default_display_column,
            _ => &self.default_column,
        };
        column.resolved_defaults(base)
    }

    /// Props for a column's actions button.
    ///
    /// Table-level props are resolved first and the column's own props are
    /// merged over them. A `title` falls back to the localized
    /// `columnActions` message and an `icon` to the `dotsVertical` glyph.
    pub fn column_actions_button_props(&self, column: &ColumnDef) -> PropMap {
        let cx = ColumnContext::for_column(column);
        let mut props = merge_props(
            self.column_actions_button_props.as_ref(),
            column.column_actions_button_props.as_ref(),
            &cx,
        );
        props
            .entry("title")
            .or_insert_with(|| Value::from(self.text("columnActions")));
        props
            .entry("icon")
            .or_insert_with(|| Value::from(self.icon("dotsVertical")));
        props
    }
}

impl<T: Serialize> ResolvedTableOptions<T> {
    /// JSON view of the resolved options.
    ///
    /// Function registries appear as lists of names. Extensions are written
    /// last, so an extension key replaces a resolved key of the same name.
    pub fn to_json(&self) -> Result<Value, OptionsError> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut value {
            map.extend(self.extensions.clone());
        }
        Ok(value)
    }
}
