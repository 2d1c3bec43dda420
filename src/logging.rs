//! Install the `log` backend for the chosen run mode.

use anyhow::{Result, anyhow};
use env_logger::Target;
use log::LevelFilter;

/// Where log records end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
	/// Buffered for the terminal UI's log pane.
	Pane,
	/// Written straight to stderr; stdout stays clean for the report.
	Stderr,
}

impl LogSink {
	pub fn for_run(headless: bool) -> Self {
		if headless { Self::Stderr } else { Self::Pane }
	}
}

/// Install the logger for `sink`, keeping records at `level` and above.
pub fn init(level: LevelFilter, sink: LogSink) -> Result<()> {
	match sink {
		LogSink::Pane => {
			tui_logger::init_logger(LevelFilter::Trace)
				.map_err(|err| anyhow!("failed to install the log collector: {err:?}"))?;
			tui_logger::set_default_level(level);
		}
		LogSink::Stderr => {
			env_logger::Builder::new()
				.filter_level(level)
				.target(Target::Stderr)
				.try_init()
				.map_err(|err| anyhow!("failed to install the stderr logger: {err}"))?;
		}
	}
	log::debug!("logging to {sink:?} at {level}");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn headless_runs_log_to_stderr() {
		assert_eq!(LogSink::for_run(true), LogSink::Stderr);
		assert_eq!(LogSink::for_run(false), LogSink::Pane);
	}

	#[test]
	fn stderr_logger_applies_the_level_once() {
		init(LevelFilter::Warn, LogSink::Stderr).expect("first logger installs");
		assert_eq!(log::max_level(), LevelFilter::Warn);
		assert!(log::log_enabled!(log::Level::Warn));
		assert!(!log::log_enabled!(log::Level::Info));

		assert!(init(LevelFilter::Debug, LogSink::Stderr).is_err());
	}
}
