use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetState};

use crate::style::Theme;

/// Render captured log records in a bordered pane.
pub fn render_logs(frame: &mut Frame, area: Rect, state: &TuiWidgetState, theme: &Theme) {
	frame.render_widget(Clear, area);
	if area.width == 0 || area.height == 0 {
		return;
	}

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(Style::default().fg(theme.header.fg.unwrap_or(Color::Reset)))
		.title(" Log ");
	let widget = TuiLoggerWidget::default()
		.block(block)
		.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
		.output_target(false)
		.output_file(false)
		.output_line(false)
		.style_error(Style::default().fg(Color::Red))
		.style_warn(Style::default().fg(Color::Yellow))
		.style_debug(theme.empty)
		.state(state);
	frame.render_widget(widget, area);
}
