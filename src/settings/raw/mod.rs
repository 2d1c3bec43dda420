use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, validation};

mod cards;
mod data;
mod logging;
mod ui;

use cards::CardsSection;
use data::DataSection;
use logging::LoggingSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	data: DataSection,
	cards: CardsSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.data.apply_cli_overrides(cli);
		self.cards.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			description_width: detect_source(
				cli.description_width.is_some(),
				self.cards.description_width.is_some(),
				"LARDER__CARDS__DESCRIPTION_WIDTH",
				"--description-width",
				"cards.description_width",
			),
			start_facet: detect_source(
				cli.facet.is_some(),
				self.ui.start_facet.is_some(),
				"LARDER__UI__START_FACET",
				"--facet",
				"ui.start_facet",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"LARDER__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"LARDER__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let dataset = self.data.dataset();
		let cards = self.cards.finalize(self.data.image_base);
		let ui = self.ui.finalize(&sources).map_err(Error::new)?;
		let log_level = self.logging.finalize(&sources).map_err(Error::new)?;

		let config = ResolvedConfig {
			dataset,
			cards,
			theme: ui.theme,
			start_facet: ui.start_facet,
			queries: ui.queries,
			labels: ui.labels,
			log_level,
		};

		validation::validate(&config, &sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
