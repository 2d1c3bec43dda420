//! Terminal front-end for the `larder` recipe browser.
//!
//! [`App`] mounts a [`larder_core::PageController`] onto [`TuiPage`], the
//! ratatui implementation of the page surfaces, and drives it from keyboard
//! and mouse input. Themes, widgets and the event loop live alongside it.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;
pub mod surface;

pub use app::App;
pub use config::UiLabels;
pub use runtime::run;

pub use crate::input::QueryInput;
pub use crate::style::{Theme, default_theme};
pub use crate::surface::{CardGrid, MenuList, TuiPage};

#[cfg(test)]
mod snapshot_tests;
