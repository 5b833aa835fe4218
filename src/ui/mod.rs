//! Host terminal UI that mounts the search widget.
//!
//! The submodules implement the event loop, the input subscriptions tied to
//! the widget's lifetime, the mapping from terminal events onto widget events
//! and the rendering of the host page around the widget.

mod actions;
mod config;
mod render;
mod runtime;
mod state;
pub mod subscriptions;

pub use actions::is_open_shortcut;
pub use config::UiConfig;
pub use runtime::run;
pub use state::{App, HostOutcome};
