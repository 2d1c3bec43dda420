//! Page controller.
//!
//! [`PageController`] owns the catalog and the facet lists extracted from it
//! at construction. Hosts expose their containers through [`PageHost`]; the
//! controller renders the initial page onto them and re-renders one facet menu
//! per search input event, always filtering the retained full list.

mod memory;

use log::{debug, error, info, warn};

use crate::cards::{CardOptions, GridSurface, display_recipes};
use crate::error::PageError;
use crate::facets::{FacetKind, FacetSet, extract_facets};
use crate::menu::{MenuSurface, filter_and_render, render_items};
use crate::recipes::RecipeCatalog;

pub use memory::MemoryPage;

const GRID_TARGET: &str = "card grid";

/// Containers a front-end provides to the page.
pub trait PageHost {
	/// Menu container for `kind`, if the host has one.
	fn menu(&mut self, kind: FacetKind) -> Option<&mut dyn MenuSurface>;

	/// Container for the recipe card grid, if the host has one.
	fn grid(&mut self) -> Option<&mut dyn GridSurface>;

	/// Register for search input on `kind`.
	///
	/// Returns `false` when the host has no search input for that facet. After
	/// a successful subscription the host forwards every change of the input
	/// text to [`PageController::on_search_input`].
	fn subscribe(&mut self, kind: FacetKind) -> bool;
}

/// Owns the facet lists for the lifetime of a page.
#[derive(Debug, Clone)]
pub struct PageController {
	catalog: RecipeCatalog,
	facets: FacetSet,
	cards: CardOptions,
}

impl PageController {
	/// Extract the facets of `catalog` once and keep them for filtering.
	#[must_use]
	pub fn new(catalog: RecipeCatalog, cards: CardOptions) -> Self {
		let facets = extract_facets(catalog.recipes());
		info!(
			"extracted {} ingredients, {} appliances, {} utensils from {} recipes",
			facets.ingredients.len(),
			facets.appliances.len(),
			facets.utensils.len(),
			catalog.len()
		);
		Self {
			catalog,
			facets,
			cards,
		}
	}

	#[must_use]
	pub fn catalog(&self) -> &RecipeCatalog {
		&self.catalog
	}

	#[must_use]
	pub fn facets(&self) -> &FacetSet {
		&self.facets
	}

	#[must_use]
	pub fn card_options(&self) -> &CardOptions {
		&self.cards
	}

	/// Render the card grid and all three menus, and subscribe to search input.
	///
	/// A missing container only skips its own part of the page. The first
	/// missing container is reported once everything else has been rendered.
	pub fn mount<H>(&self, host: &mut H) -> Result<(), PageError>
	where
		H: PageHost + ?Sized,
	{
		let mut missing = None;

		if self.catalog.is_empty() {
			info!("recipe catalog is empty");
		}

		match host.grid() {
			Some(grid) => display_recipes(self.catalog.recipes(), grid, &self.cards),
			None => {
				error!("{GRID_TARGET} not found; recipe cards were not rendered");
				missing.get_or_insert(PageError::MissingTarget {
					target: GRID_TARGET,
				});
			}
		}

		for kind in FacetKind::ALL {
			if !host.subscribe(kind) {
				warn!("no search input for {}", kind.id());
				missing.get_or_insert(PageError::MissingTarget {
					target: search_target(kind),
				});
			}

			match host.menu(kind) {
				Some(menu) => render_items(self.facets.values(kind), menu),
				None => {
					error!("{} not found", menu_target(kind));
					missing.get_or_insert(PageError::MissingTarget {
						target: menu_target(kind),
					});
				}
			}
		}

		match missing {
			Some(err) => Err(err),
			None => Ok(()),
		}
	}

	/// Re-render the menu for `kind` against `query`.
	pub fn on_search_input<H>(
		&self,
		kind: FacetKind,
		query: &str,
		host: &mut H,
	) -> Result<(), PageError>
	where
		H: PageHost + ?Sized,
	{
		let menu = host.menu(kind).ok_or(PageError::MissingTarget {
			target: menu_target(kind),
		})?;
		debug!("filtering {} with {query:?}", kind.id());
		filter_and_render(query, self.facets.values(kind), menu);
		Ok(())
	}
}

fn menu_target(kind: FacetKind) -> &'static str {
	match kind {
		FacetKind::Ingredients => "ingredients menu",
		FacetKind::Appliances => "appliances menu",
		FacetKind::Utensils => "utensils menu",
	}
}

fn search_target(kind: FacetKind) -> &'static str {
	match kind {
		FacetKind::Ingredients => "ingredients search input",
		FacetKind::Appliances => "appliances search input",
		FacetKind::Utensils => "utensils search input",
	}
}
