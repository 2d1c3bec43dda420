use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use log::debug;

use crate::app_dirs;
use crate::cli::CliArgs;

const ENV_PREFIX: &str = "larder";

/// Names looked up in the working directory, lowest precedence first.
const LOCAL_FILE_NAMES: [&str; 2] = [".larder.toml", "larder.toml"];

/// One configuration file, in the order it is merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ConfigLayer {
	/// Discovered location; skipped when absent.
	Discovered(PathBuf),
	/// Named with `--config`; must exist.
	Explicit(PathBuf),
}

impl ConfigLayer {
	fn path(&self) -> &Path {
		match self {
			Self::Discovered(path) | Self::Explicit(path) => path,
		}
	}

	fn is_required(&self) -> bool {
		matches!(self, Self::Explicit(_))
	}
}

/// Merge the file layers, then `LARDER__SECTION__KEY` variables on top.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();
	for layer in config_layers(cli) {
		debug!("config layer: {layer:?}");
		builder = builder.add_source(File::from(layer.path()).required(layer.is_required()));
	}

	builder
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator("__")
				.try_parsing(true),
		)
		.build()
		.context("failed to read configuration")
}

/// Every file layer for this invocation, lowest precedence first.
pub(super) fn config_layers(cli: &CliArgs) -> Vec<ConfigLayer> {
	let discovered = if cli.no_config {
		Vec::new()
	} else {
		discovered_files()
	};

	discovered
		.into_iter()
		.map(ConfigLayer::Discovered)
		.chain(cli.config.iter().cloned().map(ConfigLayer::Explicit))
		.collect()
}

/// `<config dir>/config.toml`, then the working-directory files.
fn discovered_files() -> Vec<PathBuf> {
	let config_dir = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = env::current_dir()
		.ok()
		.into_iter()
		.flat_map(|cwd| LOCAL_FILE_NAMES.map(|name| cwd.join(name)));

	config_dir.into_iter().chain(local).collect()
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	fn cli(args: &[&str]) -> CliArgs {
		CliArgs::parse_from(std::iter::once("larder").chain(args.iter().copied()))
	}

	#[test]
	fn discovered_files_come_before_explicit_ones() {
		let layers = config_layers(&cli(&["--config", "a.toml", "--config", "b.toml"]));

		let explicit: Vec<&ConfigLayer> = layers
			.iter()
			.skip_while(|layer| matches!(layer, ConfigLayer::Discovered(_)))
			.collect();
		assert_eq!(
			explicit,
			[
				&ConfigLayer::Explicit("a.toml".into()),
				&ConfigLayer::Explicit("b.toml".into()),
			]
		);
		assert!(layers.iter().any(|layer| layer.path().ends_with(".larder.toml")));
		assert!(layers.iter().any(|layer| layer.path().ends_with("larder.toml")));
	}

	#[test]
	fn no_config_keeps_only_explicit_files() {
		let layers = config_layers(&cli(&["--no-config", "--config", "only.toml"]));
		assert_eq!(layers, [ConfigLayer::Explicit("only.toml".into())]);
	}
}
