//! Recipe data model.
//!
//! Records are deserialised straight from the dataset and never mutated
//! afterwards. Optional fields stay optional here; consumers skip absent or
//! empty values instead of treating them as errors.

mod catalog;

use serde::{Deserialize, Serialize};

pub use catalog::RecipeCatalog;

/// A single recipe as it appears in the dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
	pub id: Option<u32>,
	pub name: String,
	pub servings: Option<u32>,
	pub description: String,
	/// Preparation time in minutes.
	pub time: u32,
	/// Image file name, relative to the configured image base.
	pub image: String,
	pub appliance: Option<String>,
	pub ingredients: Vec<Ingredient>,
	#[serde(alias = "ustensils")]
	pub utensils: Vec<String>,
}

/// One ingredient entry of a recipe.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ingredient {
	#[serde(rename = "ingredient")]
	pub name: Option<String>,
	pub quantity: Option<f64>,
	pub unit: Option<String>,
}

impl Ingredient {
	/// Build an ingredient with just a name.
	#[must_use]
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			..Self::default()
		}
	}

	/// Attach a quantity and optional unit.
	#[must_use]
	pub fn with_quantity(mut self, quantity: f64, unit: Option<&str>) -> Self {
		self.quantity = Some(quantity);
		self.unit = unit.map(str::to_string);
		self
	}

	/// Return the ingredient name when it is present and non-empty.
	#[must_use]
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref().filter(|name| !name.is_empty())
	}

	/// Format the amount as `"quantity unit"`, or just the quantity when no
	/// unit is given. Returns `None` without a quantity.
	#[must_use]
	pub fn amount(&self) -> Option<String> {
		let quantity = self.quantity?;
		match self.unit.as_deref().map(str::trim).filter(|unit| !unit.is_empty()) {
			Some(unit) => Some(format!("{quantity} {unit}")),
			None => Some(quantity.to_string()),
		}
	}
}

impl Recipe {
	/// Return the appliance when it is present and non-empty.
	#[must_use]
	pub fn appliance(&self) -> Option<&str> {
		self.appliance.as_deref().filter(|name| !name.is_empty())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dataset_field_names_deserialize() {
		let recipe: Recipe = serde_json::from_str(
			r#"{
				"id": 1,
				"image": "Recette01.jpg",
				"name": "Limonade de Coco",
				"servings": 1,
				"ingredients": [
					{ "ingredient": "Lait de coco", "quantity": 400, "unit": "ml" },
					{ "ingredient": "Jus de citron", "quantity": 2 },
					{ "ingredient": "Glaçons" }
				],
				"time": 10,
				"description": "Mettre les glaçons à votre goût dans le blender.",
				"appliance": "Blender",
				"ustensils": ["cuillère à Soupe", "verres", "presse citron"]
			}"#,
		)
		.expect("recipe parses");

		assert_eq!(recipe.id, Some(1));
		assert_eq!(recipe.appliance(), Some("Blender"));
		assert_eq!(recipe.utensils.len(), 3);
		assert_eq!(recipe.ingredients[0].name(), Some("Lait de coco"));
		assert_eq!(recipe.ingredients[2].quantity, None);
	}

	#[test]
	fn amount_formats_quantity_and_unit() {
		let milk = Ingredient::named("Lait").with_quantity(400.0, Some("ml"));
		let lemons = Ingredient::named("Citron").with_quantity(2.0, None);
		let half = Ingredient::named("Beurre").with_quantity(0.5, Some("  "));

		assert_eq!(milk.amount().as_deref(), Some("400 ml"));
		assert_eq!(lemons.amount().as_deref(), Some("2"));
		assert_eq!(half.amount().as_deref(), Some("0.5"));
		assert_eq!(Ingredient::named("Sel").amount(), None);
	}

	#[test]
	fn empty_names_are_treated_as_absent() {
		let blank = Ingredient::named("");
		assert_eq!(blank.name(), None);

		let recipe = Recipe {
			appliance: Some(String::new()),
			..Recipe::default()
		};
		assert_eq!(recipe.appliance(), None);
	}
}
