use serde::Serialize;

use crate::facets::FacetKind;

/// Result of an interactive browsing session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageOutcome {
	/// Whether the user confirmed a choice rather than cancelling.
	pub accepted: bool,
	/// Facet that was active when the session ended.
	pub facet: FacetKind,
	/// Search text typed for that facet.
	pub query: String,
	/// Menu entry highlighted when the session ended.
	pub selection: Option<String>,
}

impl PageOutcome {
	#[must_use]
	pub fn cancelled(facet: FacetKind, query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			facet,
			query: query.into(),
			selection: None,
		}
	}
}
