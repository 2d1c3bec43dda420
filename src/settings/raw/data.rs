use std::path::PathBuf;

use log::debug;
use serde::Deserialize;

use crate::app_dirs;
use crate::cli::CliArgs;
use crate::settings::resolved::DatasetSource;

const DEFAULT_DATASET_FILE: &str = "recipes.json";

/// Where recipes come from, as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DataSection {
	pub(super) path: Option<PathBuf>,
	pub(super) image_base: Option<String>,
}

impl DataSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data.clone() {
			self.path = Some(path);
		}
		if let Some(base) = cli.image_base.clone() {
			self.image_base = Some(base);
		}
	}

	/// An explicit path wins, then `recipes.json` in the data directory, then
	/// the bundled sample.
	pub(super) fn dataset(&self) -> DatasetSource {
		if let Some(path) = &self.path {
			return DatasetSource::File(path.clone());
		}

		if let Ok(dir) = app_dirs::get_data_dir() {
			let candidate = dir.join(DEFAULT_DATASET_FILE);
			if candidate.is_file() {
				debug!("using dataset from {}", candidate.display());
				return DatasetSource::File(candidate);
			}
		}
		DatasetSource::Bundled
	}
}
