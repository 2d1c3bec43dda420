//! Widgets that draw the page surfaces.

/// Recipe cards and the scrolling card grid.
pub mod cards;
/// Log pane backed by `tui-logger`.
pub mod logs;
/// Facet menu list with match highlighting.
pub mod menu;
/// Query prompt with placeholder and key hints.
pub mod prompt;
/// Scrollbar shared by the menu and the grid.
pub mod scrollbar;
/// Facet tab bar.
pub mod tabs;

pub use cards::{CARD_HEIGHT, GridContext, render_card, render_grid};
pub use logs::render_logs;
pub use menu::{MenuContext, highlight_matches, render_menu};
pub use prompt::{InputContext, render_input};
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
pub use tabs::{FacetTab, render_tabs};
