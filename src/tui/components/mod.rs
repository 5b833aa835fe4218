mod compact;
mod modal;
mod panel;
mod trigger;

use unicode_width::UnicodeWidthStr;

pub use compact::{COMPACT_WIDTH, CompactContext, render_compact};
pub use modal::{ModalBody, ModalContext, panel_area, render_modal};
pub use panel::{BrowsePanel, PopularPanel, render_browse, render_popular};
pub use trigger::{TRIGGER_LABEL, TRIGGER_WIDTH, TriggerContext, render_trigger};

/// Display width of `text` in terminal cells, saturating at `u16::MAX`.
pub(crate) fn cell_width(text: &str) -> u16 {
	u16::try_from(text.width()).unwrap_or(u16::MAX)
}
