use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use super::Recipe;
use crate::error::CatalogError;

const SAMPLE_DATASET: &str = include_str!("../../data/recipes.json");

/// Accepted dataset layouts: a bare array or an object with a `recipes` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
	List(Vec<Recipe>),
	Wrapped { recipes: Vec<Recipe> },
}

impl Document {
	fn into_recipes(self) -> Vec<Recipe> {
		match self {
			Self::List(recipes) | Self::Wrapped { recipes } => recipes,
		}
	}
}

/// Immutable, fully materialised collection of recipes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeCatalog {
	recipes: Vec<Recipe>,
}

impl RecipeCatalog {
	/// Wrap an already loaded list of recipes.
	#[must_use]
	pub fn new(recipes: Vec<Recipe>) -> Self {
		Self { recipes }
	}

	/// Load the sample dataset bundled with the crate.
	pub fn bundled() -> Result<Self, CatalogError> {
		Self::from_json(SAMPLE_DATASET)
	}

	/// Parse a catalog from a JSON document.
	pub fn from_json(json: &str) -> Result<Self, CatalogError> {
		let document: Document =
			serde_json::from_str(json).map_err(|source| CatalogError::Parse {
				origin: None,
				source,
			})?;
		Ok(Self::new(document.into_recipes()))
	}

	/// Read and parse a catalog from a JSON file on disk.
	pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
		let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let document: Document =
			serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
				origin: Some(path.to_path_buf()),
				source,
			})?;
		let catalog = Self::new(document.into_recipes());
		info!(
			"loaded {} recipes from {}",
			catalog.len(),
			path.display()
		);
		Ok(catalog)
	}

	#[must_use]
	pub fn recipes(&self) -> &[Recipe] {
		&self.recipes
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.recipes.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.recipes.is_empty()
	}
}
