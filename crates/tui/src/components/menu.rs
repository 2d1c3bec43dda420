use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, HighlightSpacing, List, ListItem, Paragraph};

use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;
use crate::surface::MenuList;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Argument bundle for rendering a facet menu.
pub struct MenuContext<'a> {
	pub menu: &'a mut MenuList,
	pub title: &'a str,
	/// Query whose occurrences are highlighted in each entry.
	pub query: &'a str,
	/// Drawn instead of the list when the menu is empty.
	pub empty_message: &'a str,
	pub theme: &'a Theme,
}

/// Render the menu inside a rounded block.
pub fn render_menu(frame: &mut Frame, area: Rect, ctx: MenuContext<'_>) {
	let MenuContext {
		menu,
		title,
		query,
		empty_message,
		theme,
	} = ctx;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(Style::default().fg(theme.header.fg.unwrap_or(Color::Reset)))
		.title(format!(" {title} "));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if menu.is_empty() {
		frame.render_widget(Paragraph::new(empty_message).style(theme.empty), inner);
		return;
	}

	let metrics = ScrollMetrics::compute(menu.len(), usize::from(inner.height));
	let list_area = if metrics.needs_scrollbar && inner.width > 1 {
		Rect {
			width: inner.width - 1,
			..inner
		}
	} else {
		inner
	};

	let items: Vec<ListItem<'_>> = menu
		.entries
		.iter()
		.map(|entry| ListItem::new(highlight_matches(entry, query, theme.highlight)))
		.collect();
	let list = List::new(items)
		.highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always);
	frame.render_stateful_widget(list, list_area, &mut menu.state);

	render_scrollbar(frame, inner, metrics, menu.state.offset(), theme);
}

/// Split `value` into spans, styling each case-insensitive occurrence of
/// `query` with `style`.
#[must_use]
pub fn highlight_matches<'a>(value: &'a str, query: &str, style: Style) -> Line<'a> {
	let needle = query.to_lowercase();
	if needle.is_empty() {
		return Line::raw(value);
	}

	// Byte offsets of `value` for every byte of its lowercase form.
	let mut lowered = String::with_capacity(value.len());
	let mut origin = Vec::with_capacity(value.len());
	for (offset, ch) in value.char_indices() {
		for lower in ch.to_lowercase() {
			lowered.push(lower);
			origin.resize(lowered.len(), offset);
		}
	}
	let source_offset = |index: usize| origin.get(index).copied().unwrap_or(value.len());

	let mut spans = Vec::new();
	let mut emitted = 0;
	let mut search_from = 0;
	while let Some(found) = lowered[search_from..].find(&needle) {
		let start = search_from + found;
		let end = start + needle.len();
		search_from = end;

		let (from, to) = (source_offset(start), source_offset(end));
		if from < emitted || from >= to {
			continue;
		}
		if from > emitted {
			spans.push(Span::raw(&value[emitted..from]));
		}
		spans.push(Span::styled(&value[from..to], style));
		emitted = to;
	}
	if emitted < value.len() {
		spans.push(Span::raw(&value[emitted..]));
	}
	Line::from(spans)
}
