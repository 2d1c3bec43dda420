use larder_core::FacetKind;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the query row.
pub struct InputContext<'a> {
	pub input: &'a QueryInput<'a>,
	pub kind: FacetKind,
	/// Shown in place of an empty query.
	pub placeholder: &'a str,
	/// Right-aligned text, dropped when the row is too narrow.
	pub hint: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render `"<facet> > "` followed by the query input.
pub fn render_input(frame: &mut Frame, ctx: InputContext<'_>) {
	let InputContext {
		input,
		kind,
		placeholder,
		hint,
		area,
		theme,
	} = ctx;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let prompt = format!("{} > ", kind.label());
	let prompt_width = u16::try_from(prompt.width()).unwrap_or(u16::MAX);
	let [prompt_area, input_area] =
		Layout::horizontal([Constraint::Length(prompt_width), Constraint::Min(1)]).areas(area);

	frame.render_widget(Paragraph::new(prompt).style(theme.prompt), prompt_area);
	input.render(frame, input_area);

	if input.text().is_empty() {
		render_placeholder(frame, input_area, placeholder, theme);
	}
	render_hint(frame, input_area, hint, theme);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width < 2 || text.is_empty() {
		return;
	}
	// Column 0 holds the cursor.
	let display: String = text.chars().take(usize::from(area.width) - 1).collect();
	frame.buffer_mut().set_line(
		area.left() + 1,
		area.top(),
		&Line::from(Span::styled(display, theme.empty)),
		area.width - 1,
	);
}

fn render_hint(frame: &mut Frame, area: Rect, hint: &str, theme: &Theme) {
	let hint_width = u16::try_from(hint.width()).unwrap_or(u16::MAX);
	if hint_width == 0 || area.height == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let row = area.top();
	let occupied = (area.left()..area.right())
		.rev()
		.find(|&x| {
			buffer
				.cell((x, row))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		})
		.map_or(area.left(), |x| x.saturating_add(3));

	let start_x = area.right().saturating_sub(hint_width);
	if start_x < occupied || start_x < area.left() {
		return;
	}
	buffer.set_line(
		start_x,
		row,
		&Line::from(Span::styled(hint.to_string(), theme.empty)),
		hint_width,
	);
}
