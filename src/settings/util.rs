use log::LevelFilter;

/// Trim a label and drop it when nothing is left.
pub(super) fn clean_label(value: Option<String>) -> Option<String> {
	value
		.map(|label| label.trim().to_string())
		.filter(|label| !label.is_empty())
}

/// Level names accepted by `logging.level`, quietest first.
pub(super) const LEVEL_NAMES: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Parse a log level name, ignoring case and surrounding whitespace.
pub(super) fn parse_level(value: &str) -> Option<LevelFilter> {
	let level = match value.trim().to_ascii_lowercase().as_str() {
		"off" | "none" => LevelFilter::Off,
		"error" => LevelFilter::Error,
		"warn" | "warning" => LevelFilter::Warn,
		"info" => LevelFilter::Info,
		"debug" => LevelFilter::Debug,
		"trace" => LevelFilter::Trace,
		_ => return None,
	};
	Some(level)
}
