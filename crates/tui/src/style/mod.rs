//! Visual styling for the recipe browser.
//!
//! Themes are colour schemes loaded from the TOML files bundled with the
//! crate and looked up by name or alias.

pub mod theme;

pub use theme::{Theme, ThemeListing, by_name, default_theme, listings, names};
