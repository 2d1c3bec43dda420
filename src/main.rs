mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{
	OutputFormat, parse_cli, print_json, print_plain, print_report_json, print_report_plain,
	print_themes,
};
use settings::ResolvedConfig;
use workflow::BrowseWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		print_themes(&larder_tui::style::listings());
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	logging::init(resolved.log_level, logging::LogSink::for_run(cli.headless))?;

	if cli.headless {
		run_headless(cli.output, resolved)
	} else {
		run_browser(cli.output, resolved)
	}
}

/// Run the interactive browser and print the outcome in the chosen format.
fn run_browser(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = BrowseWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

fn run_headless(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let report = BrowseWorkflow::from_config(settings)?.run_headless()?;

	match format {
		OutputFormat::Plain => print_report_plain(&report),
		OutputFormat::Json => print_report_json(&report)?,
	}

	Ok(())
}
