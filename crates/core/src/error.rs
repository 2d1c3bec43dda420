use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a recipe catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The dataset file could not be read.
	#[error("failed to read recipe dataset {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The dataset was read but is not a valid recipe document.
	#[error("failed to parse recipe dataset{}", origin_suffix(.origin))]
	Parse {
		origin: Option<PathBuf>,
		#[source]
		source: serde_json::Error,
	},
}

fn origin_suffix(origin: &Option<PathBuf>) -> String {
	match origin {
		Some(path) => format!(" {}", path.display()),
		None => String::new(),
	}
}

/// Errors reported while mounting the page onto a host.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
	/// The host does not provide a surface the page needs.
	#[error("render target '{target}' is missing")]
	MissingTarget { target: &'static str },
}
