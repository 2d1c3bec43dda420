use anyhow::{Context, Result};
use larder_core::{MemoryPage, PageController, PageOutcome, RecipeCatalog};
use larder_tui::App;
use log::{info, warn};

use crate::cli::HeadlessReport;
use crate::settings::{DatasetSource, ResolvedConfig};

/// Coordinates loading the catalog and running a browsing session.
pub(crate) struct BrowseWorkflow {
	controller: PageController,
	config: ResolvedConfig,
}

impl BrowseWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let catalog = load_catalog(&config.dataset)?;
		let controller = PageController::new(catalog, config.cards.clone());
		Ok(Self { controller, config })
	}

	/// Open the terminal UI and wait for the user to accept or cancel.
	pub(crate) fn run(self) -> Result<PageOutcome> {
		let Self { controller, config } = self;

		let mut app = App::new(controller)
			.with_start_facet(config.start_facet)
			.with_ui_labels(config.labels);
		for (kind, query) in &config.queries {
			app = app.with_initial_query(*kind, query);
		}
		if let Some(name) = config.theme.as_deref() {
			match larder_tui::style::by_name(name) {
				Some(theme) => app = app.with_theme(theme),
				None => warn!("unknown theme {name:?}; keeping the default"),
			}
		}

		larder_tui::run(app)
	}

	/// Render onto in-memory surfaces, apply the configured queries and
	/// report what the page shows.
	pub(crate) fn run_headless(self) -> Result<HeadlessReport> {
		let mut page = MemoryPage::new();
		self.controller.mount(&mut page)?;
		for (kind, query) in &self.config.queries {
			self.controller.on_search_input(*kind, query, &mut page)?;
		}
		Ok(HeadlessReport::capture(&page, &self.config.queries))
	}
}

fn load_catalog(source: &DatasetSource) -> Result<RecipeCatalog> {
	let catalog = match source {
		DatasetSource::Bundled => RecipeCatalog::bundled()?,
		DatasetSource::File(path) => RecipeCatalog::from_path(path)
			.with_context(|| format!("failed to load recipes from {}", path.display()))?,
	};
	info!("loaded {} recipes", catalog.len());
	Ok(catalog)
}
