//! Dropdown menu rendering.
//!
//! A menu is always rebuilt from scratch: the renderer clears the surface and
//! appends one entry per value. Nothing is patched incrementally, so calling
//! [`render_items`] twice with the same input leaves the same entries behind.

use crate::facets::{filter_values, sorted_unique};

/// Container that holds the selectable entries of one dropdown menu.
pub trait MenuSurface {
	/// Remove every entry.
	fn clear_entries(&mut self);

	/// Append one selectable entry showing `label` verbatim.
	fn append_entry(&mut self, label: &str);
}

/// Sort, de-duplicate and materialise `values` into `menu`.
pub fn render_items<S, M>(values: &[S], menu: &mut M)
where
	S: AsRef<str>,
	M: MenuSurface + ?Sized,
{
	let entries = sorted_unique(values);
	menu.clear_entries();
	for entry in &entries {
		menu.append_entry(entry);
	}
}

/// Filter `values` by `query` and render the matches into `menu`.
///
/// `values` must be the full facet list; filtering a previously filtered list
/// would compound queries across keystrokes.
pub fn filter_and_render<S, M>(query: &str, values: &[S], menu: &mut M)
where
	S: AsRef<str>,
	M: MenuSurface + ?Sized,
{
	let kept = filter_values(query, values);
	render_items(&kept, menu);
}

/// In-memory menu that records its entries in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuEntries {
	entries: Vec<String>,
}

impl MenuEntries {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

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
}

impl MenuSurface for MenuEntries {
	fn clear_entries(&mut self) {
		self.entries.clear();
	}

	fn append_entry(&mut self, label: &str) {
		self.entries.push(label.to_string());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn duplicate_matches_render_once() {
		let mut menu = MenuEntries::new();
		filter_and_render("to", &["Tomato", "egg", "Tomato", "Basil"], &mut menu);
		assert_eq!(menu.entries(), ["Tomato"]);
	}

	#[test]
	fn empty_query_renders_full_sorted_list() {
		let values = ["Blender", "apple", "Oven"];
		let mut filtered = MenuEntries::new();
		let mut plain = MenuEntries::new();

		filter_and_render("", &values, &mut filtered);
		render_items(&values, &mut plain);

		assert_eq!(filtered.entries(), ["apple", "Blender", "Oven"]);
		assert_eq!(filtered, plain);
	}

	#[test]
	fn rendering_replaces_previous_entries() {
		let mut menu = MenuEntries::new();
		render_items(&["Four", "Blender"], &mut menu);
		render_items(&["Four", "Blender"], &mut menu);
		assert_eq!(menu.entries(), ["Blender", "Four"]);

		render_items::<&str, _>(&[], &mut menu);
		assert!(menu.is_empty());
	}

	#[test]
	fn filters_do_not_compound() {
		let values = ["Sucre", "Sucre vanillé", "Sel", "Beurre"];
		let mut menu = MenuEntries::new();

		filter_and_render("sucre v", &values, &mut menu);
		assert_eq!(menu.entries(), ["Sucre vanillé"]);

		filter_and_render("s", &values, &mut menu);
		assert_eq!(menu.entries(), ["Sel", "Sucre", "Sucre vanillé"]);

		filter_and_render("", &values, &mut menu);
		assert_eq!(menu.len(), values.len());
	}

	#[test]
	fn works_through_trait_objects() {
		let mut menu = MenuEntries::new();
		let surface: &mut dyn MenuSurface = &mut menu;
		filter_and_render("E", &["oeuf", "Pomme", "riz"], surface);
		assert_eq!(menu.entries(), ["oeuf", "Pomme"]);
	}
}
