use anyhow::Result;
use larder_core::{FacetKind, PageOutcome};
use log::debug;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::App;
use crate::components::point_in_rect;

impl App<'_> {
	/// Process a keyboard event and return the outcome if the session ends.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<PageOutcome>> {
		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome(false))),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Ok(Some(self.outcome(false)));
			}
			KeyCode::Enter => return Ok(Some(self.outcome(true))),
			KeyCode::Tab => self.switch_facet(self.active.next()),
			KeyCode::BackTab => self.switch_facet(self.active.previous()),
			KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.show_logs = !self.show_logs;
			}
			KeyCode::Up => self.page.menu_list_mut(self.active).select_previous(),
			KeyCode::Down => self.page.menu_list_mut(self.active).select_next(),
			KeyCode::PageUp => {
				let grid = self.page.card_grid_mut();
				grid.scroll_up(grid.page_len());
			}
			KeyCode::PageDown => {
				let grid = self.page.card_grid_mut();
				grid.scroll_down(grid.page_len());
			}
			_ => {
				if self.inputs[self.active.index()].input(key) {
					self.refilter(self.active);
				}
			}
		}
		Ok(None)
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let over = |area: Option<Rect>| {
			area.is_some_and(|area| point_in_rect(mouse.column, mouse.row, area))
		};
		let over_menu = over(self.layout.menu);
		let over_grid = over(self.layout.grid);

		match mouse.kind {
			MouseEventKind::ScrollUp if over_menu => {
				self.page.menu_list_mut(self.active).select_previous();
			}
			MouseEventKind::ScrollDown if over_menu => {
				self.page.menu_list_mut(self.active).select_next();
			}
			MouseEventKind::ScrollUp if over_grid => self.page.card_grid_mut().scroll_up(1),
			MouseEventKind::ScrollDown if over_grid => self.page.card_grid_mut().scroll_down(1),
			_ => {}
		}
	}

	fn switch_facet(&mut self, kind: FacetKind) {
		debug!("switching to {}", kind.id());
		self.active = kind;
	}
}
