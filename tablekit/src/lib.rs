//! Configuration layer for a data-table widget.
//!
//! Callers describe a table with [`TableOptions`](options::TableOptions),
//! leaving out whatever they don't care about, and
//! [`resolve_options`](resolve::resolve_options) fills in the rest.

#[macro_use]
mod macros;

pub mod column;
pub mod error;
pub mod fns;
pub mod icons;
pub mod localization;
pub mod options;
pub mod prop;
pub mod registry;
pub mod resolve;
pub mod value;

pub use error::OptionsError;
pub use options::{ResolvedTableOptions, TableOptions};
pub use resolve::{OptionsResolver, resolve_options};

pub mod prelude {
    pub use crate::column::{ColumnDef, ColumnDefType, ColumnDefaults, FilterVariant};
    pub use crate::error::OptionsError;
    pub use crate::fns::{AggregationFn, FilterFn, SortingFn};
    pub use crate::options::{
        ColumnFilterDisplayMode, ColumnPosition, ColumnResizeMode, CreateDisplayMode,
        EditDisplayMode, GlobalFilterPosition, LayoutMode, PaginationDisplayMode,
        ResolvedTableOptions, RowNumberMode, SelectAllMode, TableOptions, ToolbarPosition,
    };
    pub use crate::prop::{ColumnContext, Prop, PropMap};
    pub use crate::registry::Registry;
    pub use crate::resolve::{OptionsResolver, resolve_options};
    pub use crate::value::CellValue;
}
