use log::LevelFilter;
use serde::Deserialize;

use crate::cli::CliArgs;
use crate::settings::resolved::{ConfigError, ConfigSources};
use crate::settings::util::{LEVEL_NAMES, parse_level};

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level {
			self.level = Some(level.as_str().to_string());
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<LevelFilter, ConfigError> {
		let Some(name) = self.level else {
			return Ok(DEFAULT_LEVEL);
		};
		parse_level(&name).ok_or_else(|| {
			ConfigError::unknown_name(
				"logging.level",
				name,
				sources.source_for_log_level(),
				LEVEL_NAMES,
			)
		})
	}
}
