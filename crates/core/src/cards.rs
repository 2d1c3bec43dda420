//! Recipe cards and the fixed-width card grid.

use serde::Serialize;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::recipes::Recipe;

/// Number of cards placed on each grid row.
pub const CARDS_PER_ROW: usize = 3;

/// Heading shown above the recipe description.
pub const DESCRIPTION_LABEL: &str = "RECETTE";

/// Heading shown above the ingredient list.
pub const INGREDIENTS_LABEL: &str = "INGREDIENTS";

pub const DEFAULT_IMAGE_BASE: &str = "./assets/visuals/recipe-pic";
pub const DEFAULT_DESCRIPTION_WIDTH: usize = 160;

const ELLIPSIS: &str = "…";

/// Presentation knobs for card construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardOptions {
	/// Directory prefix joined with each recipe's image name.
	pub image_base: String,
	/// Maximum display width of the description before it is truncated.
	pub description_width: usize,
}

impl Default for CardOptions {
	fn default() -> Self {
		Self {
			image_base: DEFAULT_IMAGE_BASE.to_string(),
			description_width: DEFAULT_DESCRIPTION_WIDTH,
		}
	}
}

/// One ingredient row on a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientLine {
	pub name: String,
	/// `"quantity unit"` when the ingredient carries a quantity.
	pub amount: Option<String>,
}

/// Everything needed to draw one recipe card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeCard {
	pub time_label: String,
	pub image_path: String,
	pub title: String,
	pub description_label: &'static str,
	pub description: String,
	pub ingredients_label: &'static str,
	pub ingredients: Vec<IngredientLine>,
}

impl RecipeCard {
	/// Build the card for `recipe`.
	#[must_use]
	pub fn from_recipe(recipe: &Recipe, options: &CardOptions) -> Self {
		let ingredients = recipe
			.ingredients
			.iter()
			.map(|ingredient| IngredientLine {
				name: ingredient.name.clone().unwrap_or_default(),
				amount: ingredient.amount(),
			})
			.collect();

		Self {
			time_label: format!("{} min", recipe.time),
			image_path: image_path(&options.image_base, &recipe.image),
			title: recipe.name.clone(),
			description_label: DESCRIPTION_LABEL,
			description: truncate_description(&recipe.description, options.description_width),
			ingredients_label: INGREDIENTS_LABEL,
			ingredients,
		}
	}
}

/// Receives rows of cards.
pub trait GridSurface {
	/// Remove every row.
	fn clear_rows(&mut self);

	/// Append one row of at most [`CARDS_PER_ROW`] cards.
	fn append_row(&mut self, row: Vec<RecipeCard>);
}

/// Split cards into rows of [`CARDS_PER_ROW`], keeping a trailing partial row.
#[must_use]
pub fn chunk_rows(cards: Vec<RecipeCard>) -> Vec<Vec<RecipeCard>> {
	let mut rows = Vec::with_capacity(cards.len().div_ceil(CARDS_PER_ROW));
	let mut row = Vec::with_capacity(CARDS_PER_ROW);
	for card in cards {
		row.push(card);
		if row.len() == CARDS_PER_ROW {
			rows.push(std::mem::replace(&mut row, Vec::with_capacity(CARDS_PER_ROW)));
		}
	}
	if !row.is_empty() {
		rows.push(row);
	}
	rows
}

/// Build every card and lay them out on `grid`, replacing its rows.
pub fn display_recipes<G>(recipes: &[Recipe], grid: &mut G, options: &CardOptions)
where
	G: GridSurface + ?Sized,
{
	let cards = recipes
		.iter()
		.map(|recipe| RecipeCard::from_recipe(recipe, options))
		.collect();

	grid.clear_rows();
	for row in chunk_rows(cards) {
		grid.append_row(row);
	}
}

fn image_path(base: &str, image: &str) -> String {
	let base = base.trim_end_matches('/');
	if base.is_empty() {
		return image.to_string();
	}
	format!("{base}/{image}")
}

fn truncate_description(text: &str, max_width: usize) -> String {
	let text = text.trim();
	if text.width() <= max_width {
		return text.to_string();
	}
	let budget = max_width.saturating_sub(ELLIPSIS.width());
	let (head, _) = text.unicode_truncate(budget);
	format!("{}{ELLIPSIS}", head.trim_end())
}
