//! Ratatui-backed page surfaces.
//!
//! The controller writes menu entries and card rows into these structs; the
//! components in [`crate::components`] draw them.

use larder_core::{FacetKind, GridSurface, MenuSurface, PageHost, RecipeCard};
use ratatui::widgets::ListState;

/// Entries of one facet menu plus its selection.
#[derive(Debug, Clone, Default)]
pub struct MenuList {
	pub(crate) entries: Vec<String>,
	pub(crate) state: ListState,
}

impl MenuList {
	#[must_use]
	pub fn entries(&self) -> &[String] {
		&self.entries
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entry under the cursor, if any.
	#[must_use]
	pub fn selected(&self) -> Option<&str> {
		self.state
			.selected()
			.and_then(|index| self.entries.get(index))
			.map(String::as_str)
	}

	pub fn select_previous(&mut self) {
		if let Some(selected) = self.state.selected()
			&& selected > 0
		{
			self.state.select(Some(selected - 1));
		}
	}

	pub fn select_next(&mut self) {
		if let Some(selected) = self.state.selected()
			&& selected + 1 < self.entries.len()
		{
			self.state.select(Some(selected + 1));
		}
	}
}

impl MenuSurface for MenuList {
	fn clear_entries(&mut self) {
		self.entries.clear();
		self.state = ListState::default();
	}

	fn append_entry(&mut self, label: &str) {
		self.entries.push(label.to_string());
		if self.state.selected().is_none() {
			self.state.select(Some(0));
		}
	}
}

/// Card rows and the index of the first visible row.
#[derive(Debug, Clone, Default)]
pub struct CardGrid {
	rows: Vec<Vec<RecipeCard>>,
	scroll: usize,
	/// Rows that fit on screen, as measured by the last draw.
	pub(crate) viewport_rows: usize,
}

impl CardGrid {
	#[must_use]
	pub fn rows(&self) -> &[Vec<RecipeCard>] {
		&self.rows
	}

	#[must_use]
	pub fn scroll(&self) -> usize {
		self.scroll
	}

	/// Number of rows that can be skipped while still filling the viewport.
	#[must_use]
	pub fn max_scroll(&self) -> usize {
		self.rows.len().saturating_sub(self.viewport_rows.max(1))
	}

	pub fn scroll_up(&mut self, rows: usize) {
		self.scroll = self.scroll.saturating_sub(rows);
	}

	pub fn scroll_down(&mut self, rows: usize) {
		self.scroll = self.scroll.saturating_add(rows).min(self.max_scroll());
	}

	/// Rows scrolled by one page key.
	#[must_use]
	pub fn page_len(&self) -> usize {
		self.viewport_rows.max(1)
	}
}

impl GridSurface for CardGrid {
	fn clear_rows(&mut self) {
		self.rows.clear();
		self.scroll = 0;
	}

	fn append_row(&mut self, row: Vec<RecipeCard>) {
		self.rows.push(row);
	}
}

/// Every surface of the terminal page.
#[derive(Debug, Clone, Default)]
pub struct TuiPage {
	menus: [MenuList; 3],
	grid: CardGrid,
	subscribed: [bool; 3],
}

impl TuiPage {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn menu_list(&self, kind: FacetKind) -> &MenuList {
		&self.menus[kind.index()]
	}

	pub fn menu_list_mut(&mut self, kind: FacetKind) -> &mut MenuList {
		&mut self.menus[kind.index()]
	}

	#[must_use]
	pub fn card_grid(&self) -> &CardGrid {
		&self.grid
	}

	pub fn card_grid_mut(&mut self) -> &mut CardGrid {
		&mut self.grid
	}

	/// Whether the query input for `kind` forwards its edits.
	#[must_use]
	pub fn is_subscribed(&self, kind: FacetKind) -> bool {
		self.subscribed[kind.index()]
	}
}

impl PageHost for TuiPage {
	fn menu(&mut self, kind: FacetKind) -> Option<&mut dyn MenuSurface> {
		Some(&mut self.menus[kind.index()])
	}

	fn grid(&mut self) -> Option<&mut dyn GridSurface> {
		Some(&mut self.grid)
	}

	fn subscribe(&mut self, kind: FacetKind) -> bool {
		self.subscribed[kind.index()] = true;
		true
	}
}

#[cfg(test)]
mod tests {
	use larder_core::{CardOptions, RecipeCatalog, render_items};

	use super::*;

	#[test]
	fn rerendering_a_menu_resets_its_selection() {
		let mut menu = MenuList::default();
		render_items(&["Oven", "Blender", "apple"], &mut menu);
		assert_eq!(menu.selected(), Some("apple"));

		menu.select_next();
		menu.select_next();
		menu.select_next();
		assert_eq!(menu.selected(), Some("Oven"));

		render_items(&["Oven"], &mut menu);
		assert_eq!(menu.selected(), Some("Oven"));

		render_items::<&str, _>(&[], &mut menu);
		assert_eq!(menu.selected(), None);
		menu.select_previous();
		assert_eq!(menu.selected(), None);
	}

	#[test]
	fn grid_scroll_is_clamped_to_the_last_page() {
		let controller = larder_core::PageController::new(
			RecipeCatalog::bundled().expect("sample dataset parses"),
			CardOptions::default(),
		);
		let mut page = TuiPage::new();
		controller.mount(&mut page).expect("terminal page has every surface");

		let grid = page.card_grid_mut();
		assert_eq!(grid.rows().len(), 4);
		grid.viewport_rows = 2;
		grid.scroll_down(10);
		assert_eq!(grid.scroll(), 2);
		grid.scroll_up(1);
		assert_eq!(grid.scroll(), 1);
		assert!(FacetKind::ALL.iter().all(|kind| page.is_subscribed(*kind)));
	}
}
