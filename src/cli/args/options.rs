use clap::ValueEnum;
use larder_core::FacetKind;

/// Facets selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum FacetArg {
	Ingredients,
	Appliances,
	Utensils,
}

impl FacetArg {
	/// Return the identifier consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		FacetKind::from(self).id()
	}
}

impl From<FacetArg> for FacetKind {
	fn from(value: FacetArg) -> Self {
		match value {
			FacetArg::Ingredients => FacetKind::Ingredients,
			FacetArg::Appliances => FacetKind::Appliances,
			FacetArg::Utensils => FacetKind::Utensils,
		}
	}
}

/// Log levels accepted by `--log-level`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevelArg {
	Off,
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

impl LogLevelArg {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			Self::Off => "off",
			Self::Error => "error",
			Self::Warn => "warn",
			Self::Info => "info",
			Self::Debug => "debug",
			Self::Trace => "trace",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
