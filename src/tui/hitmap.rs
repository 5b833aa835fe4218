//! Screen regions recorded during rendering for resolving mouse clicks.

use ratatui::layout::{Position, Rect};

/// Something the pointer can land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
	Trigger,
	CompactField,
	CompactClear,
	ShortcutHint,
	Backdrop,
	ModalPanel,
	ModalField,
	BrowseToggle,
	Close,
	Chip(String),
	Page(String),
}

/// Rectangles registered in paint order; later entries sit on top.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
	regions: Vec<(Rect, Target)>,
}

impl HitMap {
	pub fn clear(&mut self) {
		self.regions.clear();
	}

	/// Register `target` over `area`. Empty rectangles are skipped.
	pub fn push(&mut self, area: Rect, target: Target) {
		if area.width > 0 && area.height > 0 {
			self.regions.push((area, target));
		}
	}

	/// Topmost target under the given cell.
	#[must_use]
	pub fn resolve(&self, column: u16, row: u16) -> Option<&Target> {
		let position = Position::new(column, row);
		self.regions
			.iter()
			.rev()
			.find(|(area, _)| area.contains(position))
			.map(|(_, target)| target)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.regions.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.regions.is_empty()
	}

	/// Area registered for the first target equal to `target`.
	#[must_use]
	pub fn area_of(&self, target: &Target) -> Option<Rect> {
		self.regions
			.iter()
			.find(|(_, candidate)| candidate == target)
			.map(|(area, _)| *area)
	}
}
