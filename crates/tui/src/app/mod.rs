//! Application state and behavior for the recipe browser.
//!
//! [`App`] owns the page controller and the terminal page it renders onto.
//! Input handling lives in `actions` and drawing in `render`.

mod actions;
mod render;
mod state;

pub use state::App;

#[cfg(test)]
mod tests;
