use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{FacetArg, LogLevelArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `larder` binary.
#[derive(Parser, Debug)]
#[command(
	name = "larder",
	version,
	long_version = long_version(),
	about = "Browse recipes and filter them by ingredient, appliance and utensil",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "LARDER_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "data",
		value_name = "FILE",
		help = "Recipe dataset in JSON (default: <data dir>/recipes.json, else the bundled sample)"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		long = "image-base",
		value_name = "PATH",
		help = "Directory prefix for recipe images (default: ./assets/visuals/recipe-pic)"
	)]
	pub(crate) image_base: Option<String>,
	#[arg(
		short = 'w',
		long = "description-width",
		value_name = "COLUMNS",
		help = "Truncate card descriptions to this display width (default: 160)"
	)]
	pub(crate) description_width: Option<usize>,
	#[arg(
		short = 'f',
		long = "facet",
		value_enum,
		help = "Facet shown first (default: ingredients)"
	)]
	pub(crate) facet: Option<FacetArg>,
	#[arg(
		short = 'i',
		long = "ingredient-query",
		value_name = "QUERY",
		help = "Initial ingredient search (default: empty)"
	)]
	pub(crate) ingredient_query: Option<String>,
	#[arg(
		short = 'a',
		long = "appliance-query",
		value_name = "QUERY",
		help = "Initial appliance search (default: empty)"
	)]
	pub(crate) appliance_query: Option<String>,
	#[arg(
		short = 'u',
		long = "utensil-query",
		value_name = "QUERY",
		help = "Initial utensil search (default: empty)"
	)]
	pub(crate) utensil_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name or alias (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long,
		help = "Print the filtered menus and card rows instead of opening the terminal UI (default: disabled)"
	)]
	pub(crate) headless: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Lowest level shown in the log pane (default: info)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
}
