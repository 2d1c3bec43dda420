//! Core crate for the `larder` recipe browser.
//!
//! The crate owns the recipe data model, the facet extractor that derives the
//! ingredient, appliance and utensil value lists, the dropdown filter that
//! re-renders a menu for a search query, and the card renderer that lays the
//! catalog out in fixed-size rows. Rendering goes through the small surface
//! traits in [`menu`], [`cards`] and [`page`] so front-ends only have to supply
//! the containers.

pub mod cards;
pub mod error;
pub mod facets;
pub mod menu;
pub mod outcome;
pub mod page;
pub mod recipes;

pub use cards::{CARDS_PER_ROW, CardOptions, GridSurface, IngredientLine, RecipeCard};
pub use error::{CatalogError, PageError};
pub use facets::{FacetKind, FacetSet, extract_facets, filter_values, sorted_unique};
pub use menu::{MenuEntries, MenuSurface, filter_and_render, render_items};
pub use outcome::PageOutcome;
pub use page::{MemoryPage, PageController, PageHost};
pub use recipes::{Ingredient, Recipe, RecipeCatalog};
