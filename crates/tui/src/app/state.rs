use larder_core::{FacetKind, PageController, PageOutcome};
use log::{LevelFilter, error};
use ratatui::layout::Rect;
use tui_logger::TuiWidgetState;

use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::Theme;
use crate::surface::TuiPage;

/// Screen areas from the last draw, used for mouse hit testing.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LayoutCache {
	pub(crate) menu: Option<Rect>,
	pub(crate) grid: Option<Rect>,
}

/// The recipe browser.
pub struct App<'a> {
	pub(crate) controller: PageController,
	pub(crate) page: TuiPage,
	/// One query per facet, kept across tab switches.
	pub(crate) inputs: [QueryInput<'a>; 3],
	pub(crate) active: FacetKind,
	pub(crate) ui: UiLabels,
	pub(crate) theme: Theme,
	pub(crate) show_logs: bool,
	pub(crate) log_state: TuiWidgetState,
	pub(crate) layout: LayoutCache,
}

impl<'a> App<'a> {
	/// Mount `controller` onto a fresh terminal page.
	pub fn new(controller: PageController) -> Self {
		let mut page = TuiPage::new();
		if let Err(err) = controller.mount(&mut page) {
			error!("page mounted incompletely: {err}");
		}

		Self {
			controller,
			page,
			inputs: Default::default(),
			active: FacetKind::Ingredients,
			ui: UiLabels::default(),
			theme: Theme::default(),
			show_logs: false,
			log_state: TuiWidgetState::new().set_default_display_level(LevelFilter::Debug),
			layout: LayoutCache::default(),
		}
	}

	/// Pre-fill the query of `kind` and filter its menu accordingly.
	#[must_use]
	pub fn with_initial_query(mut self, kind: FacetKind, query: &str) -> Self {
		if query.is_empty() {
			return self;
		}
		self.inputs[kind.index()] = QueryInput::new(query);
		self.refilter(kind);
		self
	}

	#[must_use]
	pub fn with_start_facet(mut self, kind: FacetKind) -> Self {
		self.active = kind;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn with_ui_labels(mut self, labels: UiLabels) -> Self {
		self.ui = labels;
		self
	}

	#[must_use]
	pub fn active_facet(&self) -> FacetKind {
		self.active
	}

	#[must_use]
	pub fn query(&self, kind: FacetKind) -> &str {
		self.inputs[kind.index()].text()
	}

	#[must_use]
	pub fn page(&self) -> &TuiPage {
		&self.page
	}

	/// Menu entry highlighted in the active facet.
	#[must_use]
	pub fn current_selection(&self) -> Option<String> {
		self.page.menu_list(self.active).selected().map(str::to_string)
	}

	/// Session result for the current state.
	#[must_use]
	pub fn outcome(&self, accepted: bool) -> PageOutcome {
		let query = self.query(self.active).to_string();
		if !accepted {
			return PageOutcome::cancelled(self.active, query);
		}
		PageOutcome {
			accepted,
			facet: self.active,
			query,
			selection: self.current_selection(),
		}
	}

	/// Re-run the controller for `kind` with its current query.
	pub(crate) fn refilter(&mut self, kind: FacetKind) {
		if !self.page.is_subscribed(kind) {
			return;
		}
		let query = self.inputs[kind.index()].text();
		if let Err(err) = self.controller.on_search_input(kind, query, &mut self.page) {
			error!("{err}");
		}
	}

	/// Number of values of `kind` before filtering.
	pub(crate) fn facet_total(&self, kind: FacetKind) -> usize {
		self.controller.facets().values(kind).len()
	}
}
