use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(crate) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.cards.description_width == 0 {
		return Err(ConfigError::OutOfRange {
			key: "cards.description_width",
			value: "0".to_string(),
			origin: sources.source_for_description_width(),
			reason: "must be greater than zero",
		});
	}

	if let Some(name) = &config.theme
		&& larder_tui::style::by_name(name).is_none()
	{
		return Err(ConfigError::unknown_name(
			"ui.theme",
			name.clone(),
			sources.source_for_theme(),
			larder_tui::style::names(),
		));
	}

	Ok(())
}
