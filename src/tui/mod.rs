//! Terminal UI building blocks for rendering the search widget.
//!
//! The submodules here expose the drawing components, the single-line input,
//! the click hit map and the theme registry used by the host UI.

pub mod components;
pub mod hitmap;
pub mod input;
pub mod theme;

pub use hitmap::{HitMap, Target};
