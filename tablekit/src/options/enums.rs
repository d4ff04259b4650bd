//! Enumerated table options.
//!
//! Unknown strings are accepted into each enum's `Other` variant; it is up to
//! the consuming widget to decide what to do with them.

option_enum! {
    /// Where column filter inputs are shown.
    #[derive(Default)]
    pub enum ColumnFilterDisplayMode {
        /// In a row below the column headers.
        #[default]
        Subheader => "subheader",
        /// In a popover opened from the header.
        Popover => "popover",
        /// Rendered by the caller.
        Custom => "custom",
    }
}

option_enum! {
    /// When column widths are updated during a resize drag.
    #[derive(Default)]
    pub enum ColumnResizeMode {
        /// Continuously while dragging.
        #[default]
        OnChange => "onChange",
        /// Once, when the drag ends.
        OnEnd => "onEnd",
    }
}

option_enum! {
    /// How the create-row form is shown.
    #[derive(Default)]
    pub enum CreateDisplayMode {
        #[default]
        Modal => "modal",
        Row => "row",
        Custom => "custom",
    }
}

option_enum! {
    /// How row editing is shown.
    #[derive(Default)]
    pub enum EditDisplayMode {
        #[default]
        Modal => "modal",
        Row => "row",
        Cell => "cell",
        Table => "table",
        Custom => "custom",
    }
}

option_enum! {
    /// Table layout strategy.
    #[derive(Default)]
    pub enum LayoutMode {
        /// Native table semantics.
        #[default]
        Semantic => "semantic",
        /// Fixed grid; required for virtualization.
        Grid => "grid",
    }
}

option_enum! {
    /// Pagination control style.
    #[derive(Default)]
    pub enum PaginationDisplayMode {
        #[default]
        Default => "default",
        Pages => "pages",
        Custom => "custom",
    }
}

option_enum! {
    /// Position of a generated column (actions, expand).
    #[derive(Default)]
    pub enum ColumnPosition {
        #[default]
        First => "first",
        Last => "last",
    }
}

option_enum! {
    /// Position of the global filter input in the top toolbar.
    #[derive(Default)]
    pub enum GlobalFilterPosition {
        Left => "left",
        #[default]
        Right => "right",
        None => "none",
    }
}

option_enum! {
    /// Position of a toolbar element relative to the table.
    pub enum ToolbarPosition {
        Bottom => "bottom",
        Top => "top",
        Both => "both",
        None => "none",
    }
}

option_enum! {
    /// How row numbers are computed.
    #[derive(Default)]
    pub enum RowNumberMode {
        /// From the row's index in the source data.
        Original => "original",
        /// From the row's position on screen.
        #[default]
        Static => "static",
    }
}

option_enum! {
    /// What "select all" selects.
    #[derive(Default)]
    pub enum SelectAllMode {
        All => "all",
        #[default]
        Page => "page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_values() {
        assert_eq!(LayoutMode::from("grid"), LayoutMode::Grid);
        assert_eq!(
            LayoutMode::from("flex"),
            LayoutMode::Other("flex".to_string())
        );
        assert!(!LayoutMode::from("flex").is_known());
        assert_eq!(ColumnResizeMode::OnEnd.as_str(), "onEnd");
    }

    #[test]
    fn test_deserialize_is_permissive() {
        let mode: ToolbarPosition = serde_json::from_str("\"sideways\"").unwrap();
        assert_eq!(mode, ToolbarPosition::Other("sideways".to_string()));

        let mode: ToolbarPosition = serde_json::from_str("7").unwrap();
        assert_eq!(mode, ToolbarPosition::Other("7".to_string()));

        let json = serde_json::to_string(&ToolbarPosition::Both).unwrap();
        assert_eq!(json, "\"both\"");
    }
}
