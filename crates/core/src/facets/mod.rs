//! Facet extraction.
//!
//! A facet is one of the three filterable recipe attributes. [`extract_facets`]
//! scans the catalog once and returns the distinct values for each of them in
//! first-seen order; presentation order is applied later by the menu renderer.

mod filter;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::recipes::Recipe;

pub use filter::{filter_values, sorted_unique};

/// The filterable recipe attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetKind {
	Ingredients,
	Appliances,
	Utensils,
}

impl FacetKind {
	/// All facets in display order.
	pub const ALL: [FacetKind; 3] = [Self::Ingredients, Self::Appliances, Self::Utensils];

	/// Stable identifier used in configuration and output.
	#[must_use]
	pub fn id(self) -> &'static str {
		match self {
			Self::Ingredients => "ingredients",
			Self::Appliances => "appliances",
			Self::Utensils => "utensils",
		}
	}

	/// Human readable label for tabs and headings.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Ingredients => "Ingredients",
			Self::Appliances => "Appliances",
			Self::Utensils => "Utensils",
		}
	}

	/// Position of the facet within [`FacetKind::ALL`].
	#[must_use]
	pub fn index(self) -> usize {
		match self {
			Self::Ingredients => 0,
			Self::Appliances => 1,
			Self::Utensils => 2,
		}
	}

	/// Parse an identifier, accepting singular forms and any case.
	#[must_use]
	pub fn from_id(value: &str) -> Option<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"ingredients" | "ingredient" => Some(Self::Ingredients),
			"appliances" | "appliance" => Some(Self::Appliances),
			"utensils" | "utensil" | "ustensils" => Some(Self::Utensils),
			_ => None,
		}
	}

	#[must_use]
	pub fn next(self) -> Self {
		Self::ALL[(self.index() + 1) % Self::ALL.len()]
	}

	#[must_use]
	pub fn previous(self) -> Self {
		Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
	}
}

/// Distinct facet values collected from a recipe collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSet {
	pub ingredients: Vec<String>,
	pub appliances: Vec<String>,
	pub utensils: Vec<String>,
}

impl FacetSet {
	/// Full value list for one facet.
	#[must_use]
	pub fn values(&self, kind: FacetKind) -> &[String] {
		match kind {
			FacetKind::Ingredients => &self.ingredients,
			FacetKind::Appliances => &self.appliances,
			FacetKind::Utensils => &self.utensils,
		}
	}
}

/// Collect the distinct ingredient, appliance and utensil names.
///
/// Empty or absent names are skipped. Membership uses exact string equality,
/// so values differing only by case are kept as separate entries.
#[must_use]
pub fn extract_facets(recipes: &[Recipe]) -> FacetSet {
	let mut ingredients = IndexSet::new();
	let mut appliances = IndexSet::new();
	let mut utensils = IndexSet::new();

	for recipe in recipes {
		for name in recipe.ingredients.iter().filter_map(|entry| entry.name()) {
			insert_new(&mut ingredients, name);
		}

		if let Some(appliance) = recipe.appliance() {
			insert_new(&mut appliances, appliance);
		}

		for utensil in &recipe.utensils {
			insert_new(&mut utensils, utensil);
		}
	}

	FacetSet {
		ingredients: ingredients.into_iter().collect(),
		appliances: appliances.into_iter().collect(),
		utensils: utensils.into_iter().collect(),
	}
}

fn insert_new(values: &mut IndexSet<String>, value: &str) {
	if !values.contains(value) {
		values.insert(value.to_string());
	}
}
