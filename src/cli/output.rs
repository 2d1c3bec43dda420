use anyhow::Result;
use larder_core::{FacetKind, MemoryPage, PageOutcome, RecipeCard};
use larder_tui::style::ThemeListing;
use serde::Serialize;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &PageOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

fn format_outcome_plain(outcome: &PageOutcome) -> String {
	if !outcome.accepted {
		return format!(
			"Browsing cancelled ({} query: '{}')",
			outcome.facet.id(),
			outcome.query
		);
	}
	match &outcome.selection {
		Some(value) => format!("{}: {value}", outcome.facet.id()),
		None => "No selection".to_string(),
	}
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &PageOutcome) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(outcome)?);
	Ok(())
}

/// One facet menu as left by a headless run.
#[derive(Debug, Serialize)]
pub(crate) struct MenuReport {
	pub(crate) facet: FacetKind,
	pub(crate) query: String,
	pub(crate) entries: Vec<String>,
}

/// Everything a headless run rendered.
#[derive(Debug, Serialize)]
pub(crate) struct HeadlessReport {
	pub(crate) menus: Vec<MenuReport>,
	pub(crate) rows: Vec<Vec<RecipeCard>>,
}

impl HeadlessReport {
	/// Capture the surfaces of `page` after the queries were applied.
	pub(crate) fn capture(page: &MemoryPage, queries: &[(FacetKind, String)]) -> Self {
		let query_for = |kind: FacetKind| {
			queries
				.iter()
				.find(|(facet, _)| *facet == kind)
				.map(|(_, query)| query.clone())
				.unwrap_or_default()
		};
		let menus = FacetKind::ALL
			.into_iter()
			.map(|kind| MenuReport {
				facet: kind,
				query: query_for(kind),
				entries: page.menu_entries(kind).map(<[_]>::to_vec).unwrap_or_default(),
			})
			.collect();

		Self {
			menus,
			rows: page.grid_rows().map(<[_]>::to_vec).unwrap_or_default(),
		}
	}
}

pub(crate) fn print_report_plain(report: &HeadlessReport) {
	print!("{}", format_report_plain(report));
}

fn format_report_plain(report: &HeadlessReport) -> String {
	let mut out = String::new();
	for menu in &report.menus {
		if menu.query.is_empty() {
			out.push_str(&format!("{} ({})\n", menu.facet.label(), menu.entries.len()));
		} else {
			out.push_str(&format!(
				"{} ({}) matching '{}'\n",
				menu.facet.label(),
				menu.entries.len(),
				menu.query
			));
		}
		for entry in &menu.entries {
			out.push_str(&format!("  {entry}\n"));
		}
	}

	for (index, row) in report.rows.iter().enumerate() {
		out.push_str(&format!("Row {}\n", index + 1));
		for card in row {
			out.push_str(&format!("  {} [{}] {}\n", card.title, card.time_label, card.image_path));
		}
	}
	out
}

pub(crate) fn print_report_json(report: &HeadlessReport) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(report)?);
	Ok(())
}

/// Print one line per bundled theme for `--list-themes`.
pub(crate) fn print_themes(themes: &[ThemeListing]) {
	print!("{}", format_themes(themes));
}

fn format_themes(themes: &[ThemeListing]) -> String {
	themes.iter().map(|theme| format!("{theme}\n")).collect()
}

#[cfg(test)]
mod tests {
	use larder_core::{CardOptions, Ingredient, PageController, Recipe, RecipeCatalog};
	use serde_json::Value;

	use super::*;

	fn page() -> MemoryPage {
		let catalog = RecipeCatalog::new(vec![Recipe {
			name: "Tarte".into(),
			time: 45,
			image: "tarte.jpg".into(),
			appliance: Some("Four".into()),
			ingredients: vec![Ingredient::named("Tomate"), Ingredient::named("Oeuf")],
			..Recipe::default()
		}]);
		let controller = PageController::new(
			catalog,
			CardOptions {
				image_base: "img".into(),
				..CardOptions::default()
			},
		);
		let mut page = MemoryPage::new();
		controller.mount(&mut page).unwrap();
		controller
			.on_search_input(FacetKind::Ingredients, "tom", &mut page)
			.unwrap();
		page
	}

	#[test]
	fn plain_outcome_names_the_facet() {
		let outcome = PageOutcome {
			accepted: true,
			facet: FacetKind::Appliances,
			query: String::new(),
			selection: Some("Four".into()),
		};
		assert_eq!(format_outcome_plain(&outcome), "appliances: Four");

		let cancelled = PageOutcome::cancelled(FacetKind::Utensils, "lou");
		assert_eq!(
			format_outcome_plain(&cancelled),
			"Browsing cancelled (utensils query: 'lou')"
		);
	}

	#[test]
	fn outcome_json_uses_facet_ids() {
		let outcome = PageOutcome::cancelled(FacetKind::Ingredients, "to");
		let value: Value = serde_json::to_value(&outcome).unwrap();
		assert_eq!(value["facet"], "ingredients");
		assert_eq!(value["selection"], Value::Null);
	}

	#[test]
	fn plain_report_lists_menus_then_rows() {
		let report = HeadlessReport::capture(
			&page(),
			&[(FacetKind::Ingredients, "tom".to_string())],
		);
		assert_eq!(
			format_report_plain(&report),
			"Ingredients (1) matching 'tom'\n  Tomate\n\
			 Appliances (1)\n  Four\n\
			 Utensils (0)\n\
			 Row 1\n  Tarte [45 min] img/tarte.jpg\n"
		);
	}

	#[test]
	fn theme_list_marks_the_default_and_aliases() {
		let listed = format_themes(&larder_tui::style::listings());
		assert_eq!(
			listed,
			"light aliases: day\n\
			 slate (default) aliases: dark\n\
			 solarized aliases: solarized-dark\n"
		);
	}

	#[test]
	fn json_report_carries_cards() {
		let report = HeadlessReport::capture(&page(), &[]);
		let value: Value = serde_json::to_value(&report).unwrap();
		assert_eq!(value["menus"][0]["entries"][0], "Tomate");
		assert_eq!(value["rows"][0][0]["title"], "Tarte");
		assert_eq!(value["rows"][0][0]["description_label"], "RECETTE");
	}
}
