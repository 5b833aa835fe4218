//! Global search bar for terminal applications.
//!
//! The crate is split into a UI-agnostic core and a terminal host:
//!
//! - [`catalog`] and [`filter`] hold the navigation data and the pure
//!   substring filter over it.
//! - [`widget`] is the search widget state machine with its idle, compact and
//!   elevated modes.
//! - [`tui`] renders the widget with `ratatui` and records clickable regions.
//! - [`ui`] mounts the widget in a demo host page and runs the event loop.

pub mod app_dirs;
pub mod catalog;
pub mod filter;
pub mod logging;
pub mod tui;
pub mod ui;
pub mod widget;

pub use catalog::{NavigationCatalog, PopularQueries, Section, SectionIcon};
pub use filter::{BrowseView, filter_sections};
pub use tui::input::SearchInput;
pub use tui::theme::{Theme, builtin_themes, default_theme};
pub use ui::{App, HostOutcome, UiConfig, run};
pub use widget::{
	DisplayMode, NavigationHistory, Navigator, SearchWidget, WidgetConfig, WidgetEvent,
};
