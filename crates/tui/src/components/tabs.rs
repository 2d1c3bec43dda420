use larder_core::FacetKind;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Tabs;

use crate::style::Theme;

/// One facet header with its menu counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FacetTab {
	pub kind: FacetKind,
	/// Entries currently in the menu.
	pub visible: usize,
	/// Distinct values of the facet.
	pub total: usize,
}

impl FacetTab {
	fn title(&self) -> String {
		if self.visible == self.total {
			format!(" {} {} ", self.kind.label(), self.total)
		} else {
			format!(" {} {}/{} ", self.kind.label(), self.visible, self.total)
		}
	}
}

/// Render the facet tab bar, highlighting `active`.
pub fn render_tabs(frame: &mut Frame, area: Rect, tabs: &[FacetTab], active: FacetKind, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let selected = tabs.iter().position(|tab| tab.kind == active).unwrap_or(0);
	let titles: Vec<Line<'static>> = tabs
		.iter()
		.enumerate()
		.map(|(index, tab)| Line::from(tab.title()).style(theme.facet_tab(index == selected)))
		.collect();

	let widget = Tabs::new(titles)
		.select(selected)
		.divider("")
		.padding("", " ")
		.highlight_style(theme.facet_tab_fill());
	frame.render_widget(widget, area);
}
