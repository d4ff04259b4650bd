//! Built-in icon table.
//!
//! Icons are glyphs keyed by name. Callers override individual
//! glyphs through [`TableOptions::icons`](crate::options::TableOptions::icons);
//! every name not overridden keeps its built-in glyph.

use std::sync::{Arc, LazyLock};

use crate::registry::Registry;

/// Icon name to glyph.
pub type Icons = Registry<String>;

const DEFAULT_ICONS: &[(&str, &str)] = &[
    ("arrowAutofitContent", "↔"),
    ("arrowsSort", "⇅"),
    ("boxMultiple", "⧉"),
    ("chevronDown", "▾"),
    ("chevronLeft", "‹"),
    ("chevronRight", "›"),
    ("chevronsDown", "⏬"),
    ("chevronLeftPipe", "⇤"),
    ("chevronRightPipe", "⇥"),
    ("circleX", "⊗"),
    ("clearAll", "⌫"),
    ("columns", "▥"),
    ("densityLarge", "☰"),
    ("densityMedium", "≡"),
    ("densitySmall", "≣"),
    ("deviceFloppy", "💾"),
    ("dots", "…"),
    ("dotsVertical", "⋮"),
    ("edit", "✎"),
    ("eyeOff", "◌"),
    ("filter", "⧩"),
    ("filterOff", "⧨"),
    ("gripHorizontal", "⠿"),
    ("maximize", "⛶"),
    ("minimize", "▣"),
    ("pinned", "📌"),
    ("pinnedOff", "⚲"),
    ("search", "⌕"),
    ("searchOff", "⊘"),
    ("sortAscending", "▲"),
    ("sortDescending", "▼"),
    ("x", "✕"),
];

static ICONS: LazyLock<Arc<Icons>> = LazyLock::new(|| {
    Arc::new(
        DEFAULT_ICONS
            .iter()
            .map(|(name, glyph)| (*name, glyph.to_string()))
            .collect(),
    )
});

/// The built-in icon table.
///
/// Every call returns the same shared table.
pub fn default_icons() -> Arc<Icons> {
    Arc::clone(&ICONS)
}
