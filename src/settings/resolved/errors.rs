use thiserror::Error;

use super::SettingSource;

/// A configuration value that passed parsing but cannot be used.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
	OutOfRange {
		key: &'static str,
		value: String,
		origin: SettingSource,
		reason: &'static str,
	},
	#[error("unknown {key} `{value}` from {origin}; expected one of: {}", expected.join(", "))]
	UnknownName {
		key: &'static str,
		value: String,
		origin: SettingSource,
		expected: Vec<String>,
	},
}

impl ConfigError {
	/// Configuration key the bad value was read for.
	pub(crate) fn key(&self) -> &'static str {
		match self {
			Self::OutOfRange { key, .. } | Self::UnknownName { key, .. } => key,
		}
	}

	pub(crate) fn unknown_name<I, S>(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		expected: I,
	) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::UnknownName {
			key,
			value: value.into(),
			origin,
			expected: expected.into_iter().map(Into::into).collect(),
		}
	}
}
