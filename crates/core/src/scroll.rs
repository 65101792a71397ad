//! Scroll offset and the smooth-scroll glide.
//!
//! Navbar activation requests a glide: the offset eases toward the target
//! over successive frames, fire-and-forget. Manual scroll input supersedes
//! the glide by clearing the target; there is no explicit cancellation and
//! no completion callback.

use std::time::Duration;

#[derive(Debug, Clone, Copy, Default)]
pub struct Scroll {
	offset: u16,
	target: Option<u16>,
}

impl Scroll {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn offset(&self) -> u16 {
		self.offset
	}

	pub fn is_gliding(&self) -> bool {
		self.target.is_some()
	}

	/// Manual relative scroll. Supersedes any in-flight glide.
	pub fn scroll_by(&mut self, delta: i32, max: u16) {
		self.target = None;
		let next = (self.offset as i32 + delta).clamp(0, max as i32);
		self.offset = next as u16;
	}

	/// Manual absolute jump. Supersedes any in-flight glide.
	pub fn scroll_to(&mut self, row: u16, max: u16) {
		self.target = None;
		self.offset = row.min(max);
	}

	/// Requests a smooth scroll toward `row`.
	pub fn glide_to(&mut self, row: u16, max: u16) {
		let target = row.min(max);
		if target == self.offset {
			self.target = None;
			return;
		}
		self.target = Some(target);
	}

	/// Advances the glide one frame: a proportional step with a minimum
	/// velocity, clearing the target on arrival.
	pub fn tick(&mut self, delta: Duration) {
		let Some(target) = self.target else { return };

		// Scale the proportional step to the frame delta so the ease
		// looks the same at 16 ms and 50 ms frames.
		let frames = (delta.as_millis() as f32 / 16.0).max(1.0);
		let distance = (target as i32 - self.offset as i32).abs() as f32;
		let step = ((distance * 0.18 * frames).ceil() as i32).max(1);

		let next = if target > self.offset {
			(self.offset as i32 + step).min(target as i32)
		} else {
			(self.offset as i32 - step).max(target as i32)
		};
		self.offset = next as u16;

		if self.offset == target {
			self.target = None;
		}
	}

	/// Re-clamps offset and target after a re-measure shrinks the page.
	pub fn clamp(&mut self, max: u16) {
		self.offset = self.offset.min(max);
		if let Some(target) = self.target {
			let clamped = target.min(max);
			if clamped == self.offset {
				self.target = None;
			} else {
				self.target = Some(clamped);
			}
		}
	}
}
