use clap::Parser;
use larder_core::FacetKind;

use super::RawConfig;
use crate::cli::CliArgs;
use crate::settings::resolved::ConfigSources;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"larder",
		"--data",
		"/tmp/recipes.json",
		"--image-base",
		"img",
		"--description-width",
		"90",
		"--facet",
		"appliances",
		"--appliance-query",
		"four",
		"--theme",
		"light",
		"--log-level",
		"warn",
	]);

	let mut config = RawConfig::default();
	config.ui.theme = Some("slate".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.data.path, cli.data);
	assert_eq!(config.data.image_base.as_deref(), Some("img"));
	assert_eq!(config.cards.description_width, Some(90));
	assert_eq!(config.ui.start_facet.as_deref(), Some("appliances"));
	assert_eq!(config.ui.appliance_query.as_deref(), Some("four"));
	assert_eq!(config.ui.theme.as_deref(), Some("light"));
	assert_eq!(config.logging.level.as_deref(), Some("warn"));
}

#[test]
fn unknown_start_facet_reports_its_source() {
	let mut config = RawConfig::default();
	config.ui.start_facet = Some("spices".into());

	let err = config
		.ui
		.finalize(&ConfigSources::default())
		.err()
		.expect("unknown facet is rejected");
	let message = err.to_string();
	assert!(message.contains("ui.start_facet"));
	assert!(message.contains("`spices`"), "{message}");
	assert!(message.contains("ingredients, appliances, utensils"), "{message}");
}

#[test]
fn empty_queries_are_dropped_but_whitespace_is_kept() {
	let mut config = RawConfig::default();
	config.ui.ingredient_query = Some(String::new());
	config.ui.utensil_query = Some(" à ".into());

	let ui = config.ui.finalize(&ConfigSources::default()).unwrap();
	assert_eq!(ui.queries, vec![(FacetKind::Utensils, " à ".to_string())]);
	assert_eq!(ui.start_facet, FacetKind::Ingredients);
}

#[test]
fn unknown_log_level_is_rejected() {
	let mut config = RawConfig::default();
	config.logging.level = Some("loud".into());
	let err = config
		.logging
		.finalize(&ConfigSources::default())
		.unwrap_err();
	assert_eq!(err.key(), "logging.level");
	assert!(err.to_string().ends_with("off, error, warn, info, debug, trace"));
}
