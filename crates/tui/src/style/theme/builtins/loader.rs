use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{BundledTheme, Theme};

/// One `themes/*.toml` file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: StyleTable,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleTable {
	header: StyleEntry,
	row_highlight: StyleEntry,
	prompt: StyleEntry,
	empty: StyleEntry,
	highlight: StyleEntry,
	#[serde(default)]
	accent: Option<StyleEntry>,
}

impl StyleTable {
	fn resolve(&self, name: &str) -> Result<Theme> {
		let style = |key: &str, entry: &StyleEntry| {
			entry
				.to_style()
				.with_context(|| format!("theme `{name}`: styles.{key}"))
		};

		let header = style("header", &self.header)?;
		let accent = match &self.accent {
			Some(entry) => style("accent", entry)?,
			None => header,
		};

		Ok(Theme {
			header,
			row_highlight: style("row_highlight", &self.row_highlight)?,
			prompt: style("prompt", &self.prompt)?,
			empty: style("empty", &self.empty)?,
			highlight: style("highlight", &self.highlight)?,
			accent,
		})
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleEntry {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleEntry {
	fn to_style(&self) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg).with_context(|| format!("foreground `{fg}`"))?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg).with_context(|| format!("background `{bg}`"))?);
		}
		for modifier in &self.modifiers {
			style = style.add_modifier(
				parse_modifier(modifier).with_context(|| format!("modifier `{modifier}`"))?,
			);
		}
		Ok(style)
	}
}

/// Parse every `*.toml` file of `dir`, ordered by path. At most one theme may
/// be flagged as the default.
pub(super) fn load_themes(dir: &Dir) -> Result<Vec<BundledTheme>> {
	let mut files: Vec<&File> = dir
		.files()
		.filter(|file| file.path().extension().is_some_and(|ext| ext == "toml"))
		.collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let themes = files
		.into_iter()
		.map(parse_theme_file)
		.collect::<Result<Vec<_>>>()?;
	if themes.is_empty() {
		bail!("no theme files found in {}", dir.path().display());
	}

	let defaults: Vec<&str> = themes
		.iter()
		.filter(|theme| theme.is_default)
		.map(|theme| theme.name.as_str())
		.collect();
	if let [first, second, ..] = defaults.as_slice() {
		bail!("themes `{first}` and `{second}` are both marked as default");
	}

	Ok(themes)
}

fn parse_theme_file(file: &File) -> Result<BundledTheme> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{} is not valid UTF-8", path.display()))?;
	let parsed: ThemeFile = toml::from_str(contents)
		.with_context(|| format!("failed to parse theme file {}", path.display()))?;

	let name = parsed.name.trim();
	if name.is_empty() {
		bail!("{} has an empty theme name", path.display());
	}

	Ok(BundledTheme {
		name: name.to_string(),
		aliases: parsed
			.aliases
			.iter()
			.map(|alias| alias.trim())
			.filter(|alias| !alias.is_empty())
			.map(str::to_string)
			.collect(),
		is_default: parsed.default,
		theme: parsed.styles.resolve(name)?,
	})
}

/// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `ansi(n)`, a bare palette
/// index, or one of the sixteen named terminal colours.
fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex(hex);
	}
	if let Some(body) = strip_call(value, "rgb") {
		let parts: Vec<&str> = body.split(',').map(str::trim).collect();
		let [r, g, b] = parts.as_slice() else {
			bail!("rgb() takes three components, found {}", parts.len());
		};
		return Ok(Color::Rgb(channel(r)?, channel(g)?, channel(b)?));
	}
	if let Some(body) = strip_call(value, "ansi") {
		return Ok(Color::Indexed(channel(body.trim())?));
	}
	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	let color = match normalise_key(value).as_str() {
		"reset" | "none" | "default" => Color::Reset,
		"black" => Color::Black,
		"red" => Color::Red,
		"green" => Color::Green,
		"yellow" => Color::Yellow,
		"blue" => Color::Blue,
		"magenta" => Color::Magenta,
		"cyan" => Color::Cyan,
		"gray" | "grey" => Color::Gray,
		"dark_gray" | "dark_grey" => Color::DarkGray,
		"light_red" => Color::LightRed,
		"light_green" => Color::LightGreen,
		"light_yellow" => Color::LightYellow,
		"light_blue" => Color::LightBlue,
		"light_magenta" => Color::LightMagenta,
		"light_cyan" => Color::LightCyan,
		"white" => Color::White,
		other => bail!("unknown colour `{other}`"),
	};
	Ok(color)
}

fn strip_call<'a>(value: &'a str, name: &str) -> Option<&'a str> {
	value
		.strip_prefix(name)?
		.strip_prefix('(')?
		.strip_suffix(')')
}

fn parse_hex(hex: &str) -> Result<Color> {
	let digits: String = match hex.len() {
		3 => hex.chars().flat_map(|ch| [ch, ch]).collect(),
		6 => hex.to_string(),
		_ => bail!("hex colours must be 3 or 6 digits long"),
	};
	let byte = |range: std::ops::Range<usize>| {
		digits
			.get(range)
			.and_then(|pair| u8::from_str_radix(pair, 16).ok())
			.with_context(|| format!("invalid hex colour `#{hex}`"))
	};
	Ok(Color::Rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?))
}

fn channel(value: &str) -> Result<u8> {
	value
		.parse::<u8>()
		.with_context(|| format!("`{value}` is not a value between 0 and 255"))
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	let modifier = match normalise_key(input).as_str() {
		"bold" => Modifier::BOLD,
		"dim" => Modifier::DIM,
		"italic" => Modifier::ITALIC,
		"underline" | "underlined" => Modifier::UNDERLINED,
		"reversed" | "reverse" => Modifier::REVERSED,
		"crossed_out" | "strikethrough" => Modifier::CROSSED_OUT,
		other => bail!("unknown modifier `{other}`"),
	};
	Ok(modifier)
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.replace(['-', ' '], "_")
}
