//! Terminal event loop.

use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use larder_core::PageOutcome;
use log::info;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::App;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run `app` to completion and return how the session ended.
pub fn run(mut app: App<'_>) -> Result<PageOutcome> {
	app.run()
}

impl App<'_> {
	/// Take over the terminal until the user accepts or cancels.
	pub fn run(&mut self) -> Result<PageOutcome> {
		let mut terminal = ratatui::init();
		let result = execute!(stdout(), EnableMouseCapture)
			.map_err(anyhow::Error::from)
			.and_then(|()| self.event_loop(&mut terminal));

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		if let Ok(outcome) = &result {
			info!(
				"session ended on {} (accepted: {})",
				outcome.facet.id(),
				outcome.accepted
			);
		}
		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<PageOutcome> {
		terminal.clear()?;
		loop {
			tui_logger::move_events();
			terminal.draw(|frame| self.draw(frame))?;

			if !event::poll(POLL_INTERVAL)? {
				continue;
			}
			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = self.handle_key(key)? {
						return Ok(outcome);
					}
				}
				Event::Mouse(mouse) => self.handle_mouse(mouse),
				_ => {}
			}
		}
	}
}
