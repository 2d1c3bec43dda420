use larder_core::FacetKind;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};

use super::App;
use crate::components::{
	FacetTab, GridContext, InputContext, MenuContext, render_grid, render_input, render_logs,
	render_menu, render_tabs,
};

const MENU_WIDTH: u16 = 32;
const LOG_PANE_HEIGHT: u16 = 10;
const KEY_HINT: &str = "Tab facet · Enter select · Esc quit";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let log_height = if self.show_logs { LOG_PANE_HEIGHT } else { 0 };
		let [tabs_area, input_area, body_area, log_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(log_height),
		])
		.areas(area);

		let tabs = self.facet_tabs();
		render_tabs(frame, tabs_area, &tabs, self.active, &self.theme);

		let placeholder = self.ui.placeholder(self.active);
		render_input(
			frame,
			InputContext {
				input: &self.inputs[self.active.index()],
				kind: self.active,
				placeholder: &placeholder,
				hint: KEY_HINT,
				area: input_area,
				theme: &self.theme,
			},
		);

		let menu_width = MENU_WIDTH.min(body_area.width / 2);
		let [menu_area, grid_area] =
			Layout::horizontal([Constraint::Length(menu_width), Constraint::Min(1)]).areas(body_area);
		self.render_menu_pane(frame, menu_area);
		self.render_grid_pane(frame, grid_area);

		if self.show_logs {
			render_logs(frame, log_area, &self.log_state, &self.theme);
		}
	}

	fn facet_tabs(&self) -> [FacetTab; 3] {
		FacetKind::ALL.map(|kind| FacetTab {
			kind,
			visible: self.page.menu_list(kind).len(),
			total: self.facet_total(kind),
		})
	}

	fn render_menu_pane(&mut self, frame: &mut Frame, area: Rect) {
		self.layout.menu = Some(area);
		let kind = self.active;
		let empty_message = self.ui.empty_menu(kind);
		render_menu(
			frame,
			area,
			MenuContext {
				menu: self.page.menu_list_mut(kind),
				title: kind.label(),
				query: self.inputs[kind.index()].text(),
				empty_message: &empty_message,
				theme: &self.theme,
			},
		);
	}

	fn render_grid_pane(&mut self, frame: &mut Frame, area: Rect) {
		self.layout.grid = Some(area);
		render_grid(
			frame,
			area,
			GridContext {
				grid: self.page.card_grid_mut(),
				title: &self.ui.grid_title,
				empty_message: "No recipes",
				theme: &self.theme,
			},
		);
	}
}
