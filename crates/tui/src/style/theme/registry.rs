use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use log::warn;

use super::builtins;
use super::types::{BundledTheme, Theme, ThemeListing};

#[derive(Debug)]
struct ThemeEntry {
	display_name: String,
	theme: Theme,
	aliases: Vec<String>,
	is_default: bool,
}

#[derive(Debug, Default)]
struct ThemeRegistry {
	canonical: BTreeMap<String, ThemeEntry>,
	aliases: HashMap<String, String>,
}

impl ThemeRegistry {
	fn register(&mut self, bundled: &BundledTheme) {
		let normalized = normalize_name(&bundled.name);

		let mut kept = Vec::new();
		for alias in &bundled.aliases {
			let alias_normalized = normalize_name(alias);
			if alias_normalized == normalized {
				continue;
			}
			match self.aliases.get(&alias_normalized) {
				Some(existing) if existing != &normalized => {
					warn!("theme alias `{alias}` already points at `{existing}`");
				}
				_ => {
					self.aliases.insert(alias_normalized, normalized.clone());
					kept.push(alias.clone());
				}
			}
		}
		kept.sort_unstable_by_key(|alias| alias.to_ascii_lowercase());

		self.canonical.insert(
			normalized,
			ThemeEntry {
				display_name: bundled.name.clone(),
				theme: bundled.theme,
				aliases: kept,
				is_default: bundled.is_default,
			},
		);
	}

	fn get(&self, name: &str) -> Option<Theme> {
		let normalized = normalize_name(name);

		if let Some(entry) = self.canonical.get(&normalized) {
			return Some(entry.theme);
		}

		let target = self.aliases.get(&normalized)?;
		self.canonical.get(target).map(|entry| entry.theme)
	}
}

fn registry() -> &'static ThemeRegistry {
	static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();
	REGISTRY.get_or_init(|| {
		let mut registry = ThemeRegistry::default();
		for bundled in builtins::bundled() {
			registry.register(bundled);
		}
		registry
	})
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Look up a theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registry().get(name)
}

/// Canonical theme names in alphabetical order.
#[must_use]
pub fn names() -> Vec<String> {
	registry()
		.canonical
		.values()
		.map(|entry| entry.display_name.clone())
		.collect()
}

/// Every theme with its aliases, in the same order as [`names`].
#[must_use]
pub fn listings() -> Vec<ThemeListing> {
	registry()
		.canonical
		.values()
		.map(|entry| ThemeListing {
			name: entry.display_name.clone(),
			aliases: entry.aliases.clone(),
			is_default: entry.is_default,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_themes_are_listed_alphabetically() {
		assert_eq!(names(), vec!["light", "slate", "solarized"]);
	}

	#[test]
	fn lookup_accepts_aliases_and_any_case() {
		assert_eq!(by_name("SLATE"), by_name("dark"));
		assert!(by_name(" Solarized-Dark ").is_some());
		assert!(by_name("missing").is_none());
	}

	#[test]
	fn default_theme_is_the_flagged_one() {
		assert_eq!(Some(crate::style::default_theme()), by_name("slate"));
	}

	#[test]
	fn listings_carry_aliases_and_the_default_flag() {
		let listings = listings();
		let light = listings
			.iter()
			.find(|listing| listing.name == "light")
			.expect("light theme is bundled");
		assert_eq!(light.aliases, vec!["day"]);
		assert!(!light.is_default);

		let defaults: Vec<&str> = listings
			.iter()
			.filter(|listing| listing.is_default)
			.map(|listing| listing.name.as_str())
			.collect();
		assert_eq!(defaults, ["slate"]);
	}

	#[test]
	fn conflicting_alias_stays_with_the_first_theme() {
		let mut registry = ThemeRegistry::default();
		let theme = |name: &str, alias: &str| BundledTheme {
			name: name.into(),
			aliases: vec![alias.into()],
			is_default: false,
			theme: Theme::fallback(),
		};
		registry.register(&theme("night", "dark"));
		registry.register(&theme("slate", "Dark"));

		assert_eq!(registry.aliases.get("dark").map(String::as_str), Some("night"));
		assert!(registry.canonical["slate"].aliases.is_empty());
	}
}
