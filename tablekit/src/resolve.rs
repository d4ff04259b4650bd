//! Resolving table options.
//!
//! [`resolve_options`] turns a partial [`TableOptions`] into a
//! [`ResolvedTableOptions`]. It never fails and never validates: unknown enum
//! strings and unknown keys go through as given.
//!
//! Resolution happens in three steps:
//!
//! 1. Absent options get their defaults.
//! 2. Registries (icons, localization, column defaults and the
//!    aggregation/filter/sorting functions) are the built-in table overlaid
//!    with the caller's entries.
//! 3. Derived flags are applied in order:
//!    - row or column virtualization forces the grid layout,
//!    - row virtualization forces a sticky header,
//!    - disabled pagination implies manual pagination unless the caller said
//!      otherwise,
//!    - missing or empty data forces every manual mode on.
//!
//! [`OptionsResolver`] does the same work but remembers its registry merges,
//! so a table re-resolving its options on every render gets the same `Arc`s
//! back while the caller's registries are unchanged.

use std::sync::Arc;

use log::{debug, trace};

use crate::column::{self, ColumnDefaults};
use crate::fns::{self, AggregationFns, FilterFns, SortingFns};
use crate::icons::{Icons, default_icons};
use crate::localization::{Localization, localization_en};
use crate::options::{
    ColumnFilterDisplayMode, ColumnPosition, ColumnResizeMode, CreateDisplayMode, EditDisplayMode,
    GlobalFilterPosition, LayoutMode, PaginationDisplayMode, ResolvedTableOptions, RowNumberMode,
    SelectAllMode, TableOptions, ToolbarPosition,
};
use crate::registry::Registry;

/// Resolve options without memoization.
pub fn resolve_options<T>(options: TableOptions<T>) -> ResolvedTableOptions<T> {
    OptionsResolver::new().resolve(options)
}

// =============================================================================
// Memoization
// =============================================================================

/// Compares `Arc`s by address.
struct ByAddress<T>(Arc<T>);

impl<T> PartialEq for ByAddress<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Remembers the last input and the value computed from it.
struct Memo<K, V> {
    name: &'static str,
    slot: Option<(K, Arc<V>)>,
}

impl<K: PartialEq, V> Memo<K, V> {
    fn new(name: &'static str) -> Self {
        Self { name, slot: None }
    }

    fn get(&mut self, key: K, compute: impl FnOnce(&K) -> Arc<V>) -> Arc<V> {
        if let Some((cached, value)) = &self.slot {
            if *cached == key {
                trace!("{}: reusing merged registry", self.name);
                return Arc::clone(value);
            }
        }
        trace!("{}: merging registry", self.name);
        let value = compute(&key);
        self.slot = Some((key, Arc::clone(&value)));
        value
    }
}

/// Overlay `user` on `builtin`, sharing `builtin` when there is nothing to add.
fn overlay<V: Clone>(builtin: Arc<Registry<V>>, user: Option<&Registry<V>>) -> Arc<Registry<V>> {
    match user {
        Some(user) if !user.is_empty() => Arc::new(builtin.overlay(user)),
        _ => builtin,
    }
}

fn overlay_columns(
    builtin: Arc<ColumnDefaults>,
    user: Option<&ColumnDefaults>,
) -> Arc<ColumnDefaults> {
    match user {
        Some(user) if *user != ColumnDefaults::default() => Arc::new(builtin.overlay(user)),
        _ => builtin,
    }
}

// =============================================================================
// OptionsResolver
// =============================================================================

/// Resolves options and caches registry merges between calls.
///
/// Keep one resolver per table. Icons, localization and column defaults are
/// cached by content; function registries by `Arc` identity, so share the
/// same `Arc` across renders to hit the cache.
pub struct OptionsResolver {
    icons: Memo<Option<Icons>, Icons>,
    localization: Memo<Option<Localization>, Localization>,
    default_column: Memo<Option<ColumnDefaults>, ColumnDefaults>,
    default_display_column: Memo<Option<ColumnDefaults>, ColumnDefaults>,
    aggregation_fns: Memo<Option<ByAddress<AggregationFns>>, AggregationFns>,
    filter_fns: Memo<Option<ByAddress<FilterFns>>, FilterFns>,
    sorting_fns: Memo<Option<ByAddress<SortingFns>>, SortingFns>,
}

impl Default for OptionsResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsResolver {
    /// Create a resolver with empty caches.
    pub fn new() -> Self {
        Self {
            icons: Memo::new("icons"),
            localization: Memo::new("localization"),
            default_column: Memo::new("defaultColumn"),
            default_display_column: Memo::new("defaultDisplayColumn"),
            aggregation_fns: Memo::new("aggregationFns"),
            filter_fns: Memo::new("filterFns"),
            sorting_fns: Memo::new("sortingFns"),
        }
    }

    /// Resolve `options`.
    pub fn resolve<T>(&mut self, options: TableOptions<T>) -> ResolvedTableOptions<T> {
        let TableOptions {
            aggregation_fns,
            filter_fns,
            sorting_fns,
            icons,
            localization,
            default_column,
            default_display_column,
            auto_reset_expanded,
            enable_bottom_toolbar,
            enable_column_actions,
            enable_column_filters,
            enable_column_ordering,
            enable_column_resizing,
            enable_density_toggle,
            enable_expand_all,
            enable_expanding,
            enable_filter_match_highlighting,
            enable_filters,
            enable_full_screen_toggle,
            enable_global_filter,
            enable_global_filter_ranked_results,
            enable_grouping,
            enable_hiding,
            enable_multi_row_selection,
            enable_multi_sort,
            enable_pagination,
            enable_pinning,
            enable_row_selection,
            enable_select_all,
            enable_sorting,
            enable_sticky_header,
            enable_table_footer,
            enable_table_head,
            enable_toolbar_internal_actions,
            enable_top_toolbar,
            mut manual_filtering,
            mut manual_grouping,
            mut manual_pagination,
            mut manual_sorting,
            column_filter_display_mode,
            column_resize_mode,
            create_display_mode,
            edit_display_mode,
            layout_mode,
            pagination_display_mode,
            position_actions_column,
            position_expand_column,
            position_global_filter,
            position_pagination,
            position_toolbar_alert_banner,
            position_toolbar_drop_zone,
            row_number_mode,
            select_all_mode,
            data,
            columns,
            enable_click_to_copy,
            enable_column_dragging,
            enable_column_filter_modes,
            enable_column_virtualization,
            enable_editing,
            enable_faceted_values,
            enable_row_actions,
            enable_row_dragging,
            enable_row_numbers,
            enable_row_ordering,
            enable_row_virtualization,
            enable_sticky_footer,
            initial_page_size,
            row_id_key,
            column_actions_button_props,
            extensions,
        } = options;

        let icons = self
            .icons
            .get(icons, |user| overlay(default_icons(), user.as_ref()));
        let localization = self
            .localization
            .get(localization, |user| overlay(localization_en(), user.as_ref()));
        let default_column = self.default_column.get(default_column, |user| {
            overlay_columns(column::default_column(), user.as_ref())
        });
        let default_display_column = self
            .default_display_column
            .get(default_display_column, |user| {
                overlay_columns(column::default_display_column(), user.as_ref())
            });
        let aggregation_fns = self
            .aggregation_fns
            .get(aggregation_fns.map(ByAddress), |user| {
                overlay(fns::aggregation_fns(), user.as_ref().map(|u| u.0.as_ref()))
            });
        let filter_fns = self.filter_fns.get(filter_fns.map(ByAddress), |user| {
            overlay(fns::filter_fns(), user.as_ref().map(|u| u.0.as_ref()))
        });
        let sorting_fns = self.sorting_fns.get(sorting_fns.map(ByAddress), |user| {
            overlay(fns::sorting_fns(), user.as_ref().map(|u| u.0.as_ref()))
        });

        let row_virtualization = enable_row_virtualization == Some(true);
        let column_virtualization = enable_column_virtualization == Some(true);

        let mut layout_mode = layout_mode.unwrap_or_default();
        if row_virtualization || column_virtualization {
            if layout_mode != LayoutMode::Grid {
                debug!("virtualization enabled, forcing grid layout (was {})", layout_mode);
            }
            layout_mode = LayoutMode::Grid;
        }

        let mut enable_sticky_header = enable_sticky_header.unwrap_or(false);
        if row_virtualization {
            debug!("row virtualization enabled, forcing sticky header");
            enable_sticky_header = true;
        }

        let enable_pagination = enable_pagination.unwrap_or(true);
        if !enable_pagination && manual_pagination.is_none() {
            debug!("pagination disabled, defaulting to manual pagination");
            manual_pagination = Some(true);
        }

        // Without rows there is nothing to process client-side.
        if data.as_ref().is_none_or(Vec::is_empty) {
            debug!("no data, forcing manual filtering, grouping, pagination and sorting");
            manual_filtering = Some(true);
            manual_grouping = Some(true);
            manual_pagination = Some(true);
            manual_sorting = Some(true);
        }

        ResolvedTableOptions {
            aggregation_fns,
            filter_fns,
            sorting_fns,
            icons,
            localization,
            default_column,
            default_display_column,
            auto_reset_expanded: auto_reset_expanded.unwrap_or(false),
            enable_bottom_toolbar: enable_bottom_toolbar.unwrap_or(true),
            enable_column_actions: enable_column_actions.unwrap_or(true),
            enable_column_filters: enable_column_filters.unwrap_or(true),
            enable_column_ordering: enable_column_ordering.unwrap_or(false),
            enable_column_resizing: enable_column_resizing.unwrap_or(false),
            enable_density_toggle: enable_density_toggle.unwrap_or(true),
            enable_expand_all: enable_expand_all.unwrap_or(true),
            enable_expanding,
            enable_filter_match_highlighting: enable_filter_match_highlighting.unwrap_or(true),
            enable_filters: enable_filters.unwrap_or(true),
            enable_full_screen_toggle: enable_full_screen_toggle.unwrap_or(true),
            enable_global_filter: enable_global_filter.unwrap_or(true),
            enable_global_filter_ranked_results: enable_global_filter_ranked_results
                .unwrap_or(true),
            enable_grouping: enable_grouping.unwrap_or(false),
            enable_hiding: enable_hiding.unwrap_or(true),
            enable_multi_row_selection: enable_multi_row_selection.unwrap_or(true),
            enable_multi_sort: enable_multi_sort.unwrap_or(true),
            enable_pagination,
            enable_pinning: enable_pinning.unwrap_or(false),
            enable_row_selection: enable_row_selection.unwrap_or(false),
            enable_select_all: enable_select_all.unwrap_or(true),
            enable_sorting: enable_sorting.unwrap_or(true),
            enable_sticky_header,
            enable_table_footer: enable_table_footer.unwrap_or(true),
            enable_table_head: enable_table_head.unwrap_or(true),
            enable_toolbar_internal_actions: enable_toolbar_internal_actions.unwrap_or(true),
            enable_top_toolbar: enable_top_toolbar.unwrap_or(true),
            manual_filtering,
            manual_grouping,
            manual_pagination,
            manual_sorting,
            column_filter_display_mode: column_filter_display_mode
                .unwrap_or(ColumnFilterDisplayMode::Subheader),
            column_resize_mode: column_resize_mode.unwrap_or(ColumnResizeMode::OnChange),
            create_display_mode: create_display_mode.unwrap_or(CreateDisplayMode::Modal),
            edit_display_mode: edit_display_mode.unwrap_or(EditDisplayMode::Modal),
            layout_mode,
            pagination_display_mode: pagination_display_mode
                .unwrap_or(PaginationDisplayMode::Default),
            position_actions_column: position_actions_column.unwrap_or(ColumnPosition::First),
            position_expand_column: position_expand_column.unwrap_or(ColumnPosition::First),
            position_global_filter: position_global_filter.unwrap_or(GlobalFilterPosition::Right),
            position_pagination: position_pagination.unwrap_or(ToolbarPosition::Bottom),
            position_toolbar_alert_banner: position_toolbar_alert_banner
                .unwrap_or(ToolbarPosition::Top),
            position_toolbar_drop_zone: position_toolbar_drop_zone.unwrap_or(ToolbarPosition::Top),
            row_number_mode: row_number_mode.unwrap_or(RowNumberMode::Static),
            select_all_mode: select_all_mode.unwrap_or(SelectAllMode::Page),
            data,
            columns,
            enable_click_to_copy,
            enable_column_dragging,
            enable_column_filter_modes,
            enable_column_virtualization,
            enable_editing,
            enable_faceted_values,
            enable_row_actions,
            enable_row_dragging,
            enable_row_numbers,
            enable_row_ordering,
            enable_row_virtualization,
            enable_sticky_footer,
            initial_page_size,
            row_id_key,
            column_actions_button_props,
            extensions,
        }
    }
}
