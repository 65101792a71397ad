//! Project gallery focus and the exclusive detail overlay.
//!
//! `closed → open` on activating a gallery card; `open → closed` on the
//! close control, Esc, or the scrim. There is no `open → open` replace:
//! while the overlay is up it captures activation, so cards are inert and
//! only a fresh `closed → open` transition can change the selection.

use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct Gallery {
	count: usize,
	focus: usize,
	selected: Option<usize>,
}

impl Gallery {
	pub fn new(count: usize) -> Self {
		Self { count, focus: 0, selected: None }
	}

	/// Index of the card keyboard focus rests on.
	pub fn focused(&self) -> usize {
		self.focus
	}

	/// The open overlay's project index, or `None` while closed.
	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	pub fn is_open(&self) -> bool {
		self.selected.is_some()
	}

	/// Moves card focus, clamped to the collection. Inert while the
	/// overlay is open.
	pub fn focus_by(&mut self, delta: i32) {
		if self.is_open() || self.count == 0 {
			return;
		}
		let next = (self.focus as i32 + delta).clamp(0, self.count as i32 - 1);
		self.focus = next as usize;
	}

	/// `closed → open`, storing the activated card's index. Activation is
	/// ignored while the overlay is already open or when the index is out
	/// of bounds.
	pub fn open(&mut self, index: usize) {
		if self.is_open() || index >= self.count {
			return;
		}
		self.focus = index;
		self.selected = Some(index);
		debug!(project = index, "overlay.open");
	}

	/// Opens the overlay for the focused card.
	pub fn open_focused(&mut self) {
		self.open(self.focus);
	}

	/// `open → closed`. Closing an already-closed overlay is a no-op.
	pub fn close(&mut self) {
		if self.selected.take().is_some() {
			debug!("overlay.close");
		}
	}
}
