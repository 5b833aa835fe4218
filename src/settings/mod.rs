//! Configuration loading and resolution utilities.
//!
//! `load` merges config files, environment variables and CLI flags into a
//! [`RawConfig`](raw::RawConfig), then resolves and validates it into the
//! [`ResolvedConfig`] the binary runs with.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
