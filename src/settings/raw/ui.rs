use larder_core::FacetKind;
use larder_tui::UiLabels;
use serde::Deserialize;

use crate::cli::CliArgs;
use crate::settings::resolved::{ConfigError, ConfigSources};
use crate::settings::util::clean_label;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) start_facet: Option<String>,
	pub(super) ingredient_query: Option<String>,
	pub(super) appliance_query: Option<String>,
	pub(super) utensil_query: Option<String>,
	pub(super) filter_label: Option<String>,
	pub(super) grid_title: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) theme: Option<String>,
	pub(super) start_facet: FacetKind,
	pub(super) queries: Vec<(FacetKind, String)>,
	pub(super) labels: UiLabels,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(facet) = cli.facet {
			self.start_facet = Some(facet.as_str().to_string());
		}
		if let Some(query) = cli.ingredient_query.clone() {
			self.ingredient_query = Some(query);
		}
		if let Some(query) = cli.appliance_query.clone() {
			self.appliance_query = Some(query);
		}
		if let Some(query) = cli.utensil_query.clone() {
			self.utensil_query = Some(query);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<UiResolution, ConfigError> {
		let start_facet = match self.start_facet {
			Some(name) => FacetKind::from_id(&name).ok_or_else(|| {
				ConfigError::unknown_name(
					"ui.start_facet",
					name,
					sources.source_for_start_facet(),
					FacetKind::ALL.map(FacetKind::id),
				)
			})?,
			None => FacetKind::Ingredients,
		};

		// Queries are matched verbatim, so whitespace is kept.
		let queries = [
			(FacetKind::Ingredients, self.ingredient_query),
			(FacetKind::Appliances, self.appliance_query),
			(FacetKind::Utensils, self.utensil_query),
		]
		.into_iter()
		.filter_map(|(kind, query)| query.filter(|q| !q.is_empty()).map(|q| (kind, q)))
		.collect();

		let mut labels = UiLabels::default();
		if let Some(label) = clean_label(self.filter_label) {
			labels.filter_label = label;
		}
		if let Some(title) = clean_label(self.grid_title) {
			labels.grid_title = title;
		}

		Ok(UiResolution {
			theme: clean_label(self.theme),
			start_facet,
			queries,
			labels,
		})
	}
}
