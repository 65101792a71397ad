//! The rotating learning-topics ticker.
//!
//! A fixed-period timer advances a single index modulo the topic count;
//! exactly one topic is semantically current at any instant, and a short
//! slide window after each advance lets the frontend animate the
//! exit/entry transition. The timer is not a background task: the owner
//! feeds elapsed time in through [`Ticker::tick`], so dropping the page
//! drops the timer on every exit path, and a remount constructs a fresh
//! ticker at index 0.

use std::time::Duration;

/// Reference rotation period.
pub const TICKER_PERIOD: Duration = Duration::from_millis(3000);

/// Length of the enter/exit slide after an advance.
pub const SLIDE_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Ticker {
	index: usize,
	len: usize,
	period: Duration,
	elapsed: Duration,
	/// Time since the last advance, saturated at [`SLIDE_DURATION`].
	since_advance: Duration,
}

impl Ticker {
	pub fn new(len: usize) -> Self {
		Self::with_period(len, TICKER_PERIOD)
	}

	pub fn with_period(len: usize, period: Duration) -> Self {
		Self {
			index: 0,
			len,
			period,
			elapsed: Duration::ZERO,
			// No entry transition on mount.
			since_advance: SLIDE_DURATION,
		}
	}

	/// Index of the currently displayed topic. Invariant: `< len` whenever
	/// `len > 0`.
	pub fn index(&self) -> usize {
		self.index
	}

	/// Index of the topic that just slid out, for exit rendering.
	pub fn previous_index(&self) -> usize {
		if self.len == 0 {
			return 0;
		}
		(self.index + self.len - 1) % self.len
	}

	/// Accumulates elapsed time and advances the index once per period.
	/// Returns true if at least one advance happened.
	pub fn tick(&mut self, delta: Duration) -> bool {
		if self.len == 0 {
			return false;
		}

		self.elapsed += delta;
		let mut advanced = false;
		while self.elapsed >= self.period {
			self.elapsed -= self.period;
			self.index = (self.index + 1) % self.len;
			advanced = true;
		}

		if advanced {
			self.since_advance = Duration::ZERO;
			tracing::trace!(index = self.index, "ticker.advance");
		} else if self.since_advance < SLIDE_DURATION {
			self.since_advance = (self.since_advance + delta).min(SLIDE_DURATION);
		}
		advanced
	}

	/// Slide transition progress in `0.0..1.0`, or `None` once settled.
	pub fn slide_progress(&self) -> Option<f32> {
		if self.since_advance >= SLIDE_DURATION {
			return None;
		}
		Some(self.since_advance.as_secs_f32() / SLIDE_DURATION.as_secs_f32())
	}
}

#[cfg(test)]
mod tests;
