//! Active-section tracking.
//!
//! Derives which region is "focal" from the current scroll offset: the
//! reference point sits one-third of the viewport height below the top of
//! the visible window, and the focal region is the first one (in
//! registration order) whose extent contains it. When no region matches
//! (transient states at the page extremes) the previous value is retained,
//! so the active region is always a registered region once mounted.

use folio_content::RegionId;

use crate::layout::PageGeometry;

/// The single mutable cell holding the currently focal region.
#[derive(Debug, Clone, Copy)]
pub struct ActiveTracker {
	active: RegionId,
}

impl Default for ActiveTracker {
	fn default() -> Self {
		Self::new()
	}
}

impl ActiveTracker {
	/// Starts at the first region, before any scroll event has fired.
	pub fn new() -> Self {
		Self { active: RegionId::first() }
	}

	pub fn active(&self) -> RegionId {
		self.active
	}

	/// Recomputes the focal region for the given scroll offset.
	///
	/// Triggered on every scroll notification and on re-measure; cheap
	/// enough that no debouncing is needed.
	pub fn recompute(&mut self, geometry: &PageGeometry, scroll_offset: u16) {
		let probe = scroll_offset.saturating_add(geometry.viewport_height / 3);
		for region in RegionId::ALL {
			if geometry.extent(region).contains(probe) {
				if self.active != region {
					tracing::trace!(region = region.as_str(), probe, "tracker.focus");
					self.active = region;
				}
				return;
			}
		}
		// No match: keep the previous value rather than clearing it.
	}
}

#[cfg(test)]
mod tests;
