use std::fmt;

use ratatui::style::{Color, Modifier, Style};

/// Styles for each element of the recipe browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Block titles and the active facet tab.
	pub header: Style,
	/// Selected menu entry.
	pub row_highlight: Style,
	/// Facet label in front of the query input.
	pub prompt: Style,
	/// Placeholders and "no match" messages.
	pub empty: Style,
	/// Part of a menu entry matched by the query.
	pub highlight: Style,
	/// Recipe titles and cooking times on cards.
	pub accent: Style,
}

impl Theme {
	/// Terminal-palette colours, used when the bundled theme files cannot be
	/// loaded.
	#[must_use]
	pub fn fallback() -> Self {
		Self {
			header: Style::new().fg(Color::White).bg(Color::Black),
			row_highlight: Style::new().fg(Color::Yellow).bg(Color::DarkGray),
			prompt: Style::new().fg(Color::Cyan),
			empty: Style::new().fg(Color::DarkGray),
			highlight: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
			accent: Style::new().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
		}
	}

	/// Style of a facet tab title. Inactive tabs take the header colour on the
	/// selection background so the bar reads as one strip.
	#[must_use]
	pub fn facet_tab(&self, active: bool) -> Style {
		if active {
			return self.header;
		}
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.bg(self.row_highlight.bg.unwrap_or(Color::Reset))
	}

	/// Background applied to the whole active tab cell.
	#[must_use]
	pub fn facet_tab_fill(&self) -> Style {
		Style::new().bg(self.header.bg.unwrap_or(Color::Reset))
	}
}

/// A theme read from one of the bundled `themes/*.toml` files.
#[derive(Debug, Clone)]
pub(crate) struct BundledTheme {
	pub(crate) name: String,
	pub(crate) aliases: Vec<String>,
	pub(crate) is_default: bool,
	pub(crate) theme: Theme,
}

/// How a theme is presented by `--list-themes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeListing {
	pub name: String,
	pub aliases: Vec<String>,
	pub is_default: bool,
}

impl fmt::Display for ThemeListing {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)?;
		if self.is_default {
			f.write_str(" (default)")?;
		}
		if !self.aliases.is_empty() {
			write!(f, " aliases: {}", self.aliases.join(", "))?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn listing_shows_default_flag_and_aliases() {
		let listing = ThemeListing {
			name: "slate".into(),
			aliases: vec!["dark".into()],
			is_default: true,
		};
		assert_eq!(listing.to_string(), "slate (default) aliases: dark");

		let plain = ThemeListing {
			name: "solarized".into(),
			aliases: Vec::new(),
			is_default: false,
		};
		assert_eq!(plain.to_string(), "solarized");
	}

	#[test]
	fn inactive_tabs_use_the_selection_background() {
		let theme = Theme::fallback();
		assert_eq!(theme.facet_tab(true), theme.header);
		assert_eq!(theme.facet_tab(false).bg, Some(Color::DarkGray));
		assert_eq!(theme.facet_tab(false).fg, Some(Color::White));
	}
}
