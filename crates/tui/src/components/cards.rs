use larder_core::{CARDS_PER_ROW, RecipeCard};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;
use crate::surface::CardGrid;

/// Height of one card including its border.
pub const CARD_HEIGHT: u16 = 12;

/// Argument bundle for rendering the card grid.
pub struct GridContext<'a> {
	pub grid: &'a mut CardGrid,
	pub title: &'a str,
	pub empty_message: &'a str,
	pub theme: &'a Theme,
}

/// Render the visible card rows and record how many rows fit.
pub fn render_grid(frame: &mut Frame, area: Rect, ctx: GridContext<'_>) {
	let GridContext {
		grid,
		title,
		empty_message,
		theme,
	} = ctx;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(Style::default().fg(theme.header.fg.unwrap_or(Color::Reset)))
		.title(Line::from(format!(" {title} ")).style(theme.header));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	grid.viewport_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
	if grid.rows().is_empty() {
		frame.render_widget(Paragraph::new(empty_message).style(theme.empty), inner);
		return;
	}
	grid.scroll_down(0);

	let metrics = ScrollMetrics::compute(grid.rows().len(), grid.viewport_rows);
	let cards_area = render_scrollbar(frame, inner, metrics, grid.scroll(), theme);

	let row_slots = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); grid.viewport_rows])
		.split(cards_area);
	let visible = grid.rows().iter().skip(grid.scroll());
	for (row, slot) in visible.zip(row_slots.iter()) {
		let columns = Layout::horizontal([Constraint::Ratio(1, CARDS_PER_ROW as u32); CARDS_PER_ROW])
			.split(*slot);
		for (card, column) in row.iter().zip(columns.iter()) {
			render_card(frame, *column, card, theme);
		}
	}
}

/// Render one card: title and time on the border, then the image path,
/// the description and the ingredient list.
pub fn render_card(frame: &mut Frame, area: Rect, card: &RecipeCard, theme: &Theme) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(Style::default().fg(theme.header.fg.unwrap_or(Color::Reset)))
		.title(Line::from(format!(" {} ", card.title)).style(theme.accent))
		.title_top(Line::from(format!(" {} ", card.time_label)).right_aligned());

	let label = theme.prompt.add_modifier(Modifier::BOLD);
	let mut lines = vec![
		Line::from(Span::styled(card.image_path.as_str(), theme.empty)),
		Line::from(Span::styled(card.description_label, label)),
		Line::raw(card.description.as_str()),
		Line::default(),
		Line::from(Span::styled(card.ingredients_label, label)),
	];
	lines.extend(card.ingredients.iter().map(|ingredient| {
		let mut spans = vec![Span::styled(
			ingredient.name.as_str(),
			Style::new().add_modifier(Modifier::BOLD),
		)];
		if let Some(amount) = &ingredient.amount {
			spans.push(Span::raw(format!(": {amount}")));
		}
		Line::from(spans)
	}));

	let paragraph = Paragraph::new(Text::from(lines))
		.block(block)
		.wrap(Wrap { trim: true });
	frame.render_widget(paragraph, area);
}
