use larder_core::CardOptions;
use serde::Deserialize;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CardsSection {
	pub(super) description_width: Option<usize>,
}

impl CardsSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(width) = cli.description_width {
			self.description_width = Some(width);
		}
	}

	/// Fill the card options, keeping defaults for unset values. The image base
	/// lives in `[data]` but only matters to cards.
	pub(super) fn finalize(self, image_base: Option<String>) -> CardOptions {
		let defaults = CardOptions::default();
		CardOptions {
			image_base: image_base.unwrap_or(defaults.image_base),
			description_width: self.description_width.unwrap_or(defaults.description_width),
		}
	}
}
