//! Themes compiled into the binary from `themes/*.toml`.

mod loader;

use std::sync::OnceLock;

use anyhow::Result;
use include_dir::{Dir, include_dir};
use log::{debug, error};

use crate::style::theme::types::{BundledTheme, Theme};

static THEME_FILES: Dir<'static> =
	include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/builtins/themes");

const FALLBACK_NAME: &str = "fallback";

/// Bundled themes, parsed on first use.
pub(super) fn bundled() -> &'static [BundledTheme] {
	static BUNDLED: OnceLock<Vec<BundledTheme>> = OnceLock::new();
	BUNDLED.get_or_init(|| or_fallback(loader::load_themes(&THEME_FILES)))
}

/// The theme flagged `default = true`, else the first bundled one.
#[must_use]
pub fn default_theme() -> Theme {
	pick_default(bundled())
}

/// A broken theme file must not keep the browser from starting, so the load
/// error is logged and the terminal palette takes over.
fn or_fallback(loaded: Result<Vec<BundledTheme>>) -> Vec<BundledTheme> {
	match loaded {
		Ok(themes) => {
			debug!("loaded {} bundled themes", themes.len());
			themes
		}
		Err(err) => {
			error!("bundled themes are unusable, using terminal colours: {err:#}");
			vec![BundledTheme {
				name: FALLBACK_NAME.to_string(),
				aliases: Vec::new(),
				is_default: true,
				theme: Theme::fallback(),
			}]
		}
	}
}

fn pick_default(themes: &[BundledTheme]) -> Theme {
	themes
		.iter()
		.find(|entry| entry.is_default)
		.or_else(|| themes.first())
		.map_or_else(Theme::fallback, |entry| entry.theme)
}

#[cfg(test)]
mod tests {
	use anyhow::anyhow;

	use super::*;

	#[test]
	fn load_failure_leaves_a_single_fallback_theme() {
		let themes = or_fallback(Err(anyhow!("theme file is not valid TOML")));
		assert_eq!(themes.len(), 1);
		assert_eq!(themes[0].name, "fallback");
		assert_eq!(pick_default(&themes), Theme::fallback());
	}

	#[test]
	fn first_theme_is_the_default_when_none_is_flagged() {
		let mut light = Theme::fallback();
		light.prompt = light.header;
		let themes = vec![
			BundledTheme {
				name: "light".into(),
				aliases: Vec::new(),
				is_default: false,
				theme: light,
			},
			BundledTheme {
				name: "slate".into(),
				aliases: Vec::new(),
				is_default: false,
				theme: Theme::fallback(),
			},
		];
		assert_eq!(pick_default(&themes), light);
		assert_eq!(pick_default(&[]), Theme::fallback());
	}

	#[test]
	fn shipped_theme_files_load_cleanly() {
		let themes = loader::load_themes(&THEME_FILES).expect("bundled themes parse");
		assert!(themes.iter().any(|entry| entry.is_default));
	}
}
