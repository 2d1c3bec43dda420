use super::{DatasetSource, ResolvedConfig};

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", summary_text(config));
}

fn summary_text(config: &ResolvedConfig) -> String {
	let mut lines = vec!["Effective configuration:".to_string()];
	match &config.dataset {
		DatasetSource::Bundled => lines.push("  Dataset: (bundled sample)".into()),
		DatasetSource::File(path) => lines.push(format!("  Dataset: {}", path.display())),
	}
	lines.push(format!("  Image base: {}", config.cards.image_base));
	lines.push(format!(
		"  Description width: {}",
		config.cards.description_width
	));
	lines.push(format!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	));
	lines.push(format!("  Start facet: {}", config.start_facet.id()));
	if config.queries.is_empty() {
		lines.push("  Initial queries: (none)".into());
	}
	for (kind, query) in &config.queries {
		lines.push(format!("  Initial {} query: {query:?}", kind.id()));
	}
	lines.push(format!("  Filter label: {}", config.labels.filter_label));
	lines.push(format!("  Grid title: {}", config.labels.grid_title));
	lines.push(format!("  Log level: {}", config.log_level));

	let mut text = lines.join("\n");
	text.push('\n');
	text
}

#[cfg(test)]
mod tests {
	use larder_core::{CardOptions, FacetKind};
	use larder_tui::UiLabels;
	use log::LevelFilter;

	use super::*;

	#[test]
	fn summary_lists_queries_and_dataset() {
		let config = ResolvedConfig {
			dataset: DatasetSource::File("/srv/recipes.json".into()),
			cards: CardOptions::default(),
			theme: Some("light".into()),
			start_facet: FacetKind::Utensils,
			queries: vec![(FacetKind::Appliances, "four".into())],
			labels: UiLabels::default(),
			log_level: LevelFilter::Warn,
		};

		let text = summary_text(&config);
		assert!(text.contains("  Dataset: /srv/recipes.json\n"));
		assert!(text.contains("  UI theme: light\n"));
		assert!(text.contains("  Start facet: utensils\n"));
		assert!(text.contains("  Initial appliances query: \"four\"\n"));
		assert!(text.contains("  Log level: WARN\n"));
	}
}
