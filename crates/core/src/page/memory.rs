use super::PageHost;
use crate::cards::{GridSurface, RecipeCard};
use crate::facets::FacetKind;
use crate::menu::{MenuEntries, MenuSurface};

impl GridSurface for Vec<Vec<RecipeCard>> {
	fn clear_rows(&mut self) {
		self.clear();
	}

	fn append_row(&mut self, row: Vec<RecipeCard>) {
		self.push(row);
	}
}

/// Page host that keeps every container in memory.
///
/// Containers can be removed with the `without_*` builders to exercise the
/// missing-target paths.
#[derive(Debug, Clone)]
pub struct MemoryPage {
	menus: [Option<MenuEntries>; 3],
	grid: Option<Vec<Vec<RecipeCard>>>,
	search_inputs: [bool; 3],
	subscriptions: Vec<FacetKind>,
}

impl Default for MemoryPage {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryPage {
	/// A page with a grid, three menus and three search inputs.
	#[must_use]
	pub fn new() -> Self {
		Self {
			menus: [
				Some(MenuEntries::new()),
				Some(MenuEntries::new()),
				Some(MenuEntries::new()),
			],
			grid: Some(Vec::new()),
			search_inputs: [true; 3],
			subscriptions: Vec::new(),
		}
	}

	#[must_use]
	pub fn without_grid(mut self) -> Self {
		self.grid = None;
		self
	}

	#[must_use]
	pub fn without_menu(mut self, kind: FacetKind) -> Self {
		self.menus[kind.index()] = None;
		self
	}

	#[must_use]
	pub fn without_search_input(mut self, kind: FacetKind) -> Self {
		self.search_inputs[kind.index()] = false;
		self
	}

	/// Entries currently shown in the menu for `kind`.
	#[must_use]
	pub fn menu_entries(&self, kind: FacetKind) -> Option<&[String]> {
		self.menus[kind.index()].as_ref().map(MenuEntries::entries)
	}

	/// Rows currently laid out on the grid.
	#[must_use]
	pub fn grid_rows(&self) -> Option<&[Vec<RecipeCard>]> {
		self.grid.as_deref()
	}

	/// Facets whose search input was subscribed, in subscription order.
	#[must_use]
	pub fn subscriptions(&self) -> &[FacetKind] {
		&self.subscriptions
	}
}

impl PageHost for MemoryPage {
	fn menu(&mut self, kind: FacetKind) -> Option<&mut dyn MenuSurface> {
		self.menus[kind.index()]
			.as_mut()
			.map(|menu| menu as &mut dyn MenuSurface)
	}

	fn grid(&mut self) -> Option<&mut dyn GridSurface> {
		self.grid.as_mut().map(|grid| grid as &mut dyn GridSurface)
	}

	fn subscribe(&mut self, kind: FacetKind) -> bool {
		if !self.search_inputs[kind.index()] {
			return false;
		}
		if !self.subscriptions.contains(&kind) {
			self.subscriptions.push(kind);
		}
		true
	}
}
