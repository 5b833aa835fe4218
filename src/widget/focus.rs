use std::time::{Duration, Instant};

/// Default wait before focusing the compact field after it opens.
pub const DEFAULT_FOCUS_DELAY: Duration = Duration::from_millis(300);

/// Which text field currently owns the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
	Compact,
	Elevated,
}

/// Fire-and-forget focus request that lands once its deadline passes.
///
/// Nothing cancels a pending request; the widget decides at fire time whether
/// the target field still exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingFocus {
	field: Field,
	deadline: Instant,
}

impl PendingFocus {
	pub(crate) fn after(field: Field, delay: Duration, now: Instant) -> Self {
		Self {
			field,
			deadline: now + delay,
		}
	}

	pub(crate) fn field(&self) -> Field {
		self.field
	}

	pub(crate) fn is_due(&self, now: Instant) -> bool {
		now >= self.deadline
	}
}
