//! Configuration loading and resolution.
//!
//! Values are layered from the default config files, `--config` files,
//! `LARDER__SECTION__KEY` environment variables and finally CLI flags. `load`
//! is the entry point and returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::{DatasetSource, ResolvedConfig};
