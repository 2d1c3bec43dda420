use std::path::PathBuf;

use larder_core::{CardOptions, FacetKind};
use larder_tui::UiLabels;
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
pub(super) mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where the recipe catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
	/// The sample catalog compiled into the binary.
	Bundled,
	File(PathBuf),
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub dataset: DatasetSource,
	pub cards: CardOptions,
	pub theme: Option<String>,
	pub start_facet: FacetKind,
	/// Non-empty initial queries, in facet order.
	pub queries: Vec<(FacetKind, String)>,
	pub labels: UiLabels,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
