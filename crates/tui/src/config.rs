use larder_core::FacetKind;

/// Text shown around the menus and the card grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Verb used in the query placeholder, e.g. "Search" gives "Search ingredients".
	pub filter_label: String,
	/// Title of the block around the card grid.
	pub grid_title: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			filter_label: "Search".to_string(),
			grid_title: "Recipes".to_string(),
		}
	}
}

impl UiLabels {
	#[must_use]
	pub fn placeholder(&self, kind: FacetKind) -> String {
		format!("{} {}", self.filter_label, kind.id())
	}

	/// Message drawn in a menu that has no entry left.
	#[must_use]
	pub fn empty_menu(&self, kind: FacetKind) -> String {
		format!("No matching {}", kind.id())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn placeholder_uses_the_filter_label() {
		let labels = UiLabels {
			filter_label: "Rechercher".into(),
			..UiLabels::default()
		};
		assert_eq!(labels.placeholder(FacetKind::Utensils), "Rechercher utensils");
		assert_eq!(
			UiLabels::default().empty_menu(FacetKind::Appliances),
			"No matching appliances"
		);
	}
}
