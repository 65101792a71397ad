//! Root composition: all state cells and the event dispatch table.
//!
//! [`Page`] owns every mutable cell (active region, ticker index, overlay
//! selection, reveals, scroll, console) and is the only writer. The
//! frontend translates terminal input into [`UiEvent`]s and re-measures
//! geometry; each dispatch arm is a synchronous transition over owned
//! state, so the whole layer runs under a single event-processing thread
//! with no locking.

use std::time::Duration;

use folio_content::{LEARNING_TOPICS, PROJECTS, RegionId};
use tracing::debug;

use crate::console::Console;
use crate::gallery::Gallery;
use crate::layout::PageGeometry;
use crate::reveal::{REVEAL_MARGIN, Reveal};
use crate::scroll::Scroll;
use crate::ticker::Ticker;
use crate::tracker::ActiveTracker;

/// Everything the frontend can feed into the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
	/// Frame time elapsed since the previous tick.
	Tick(Duration),
	/// The page was re-measured (first draw, resize, content reflow).
	Relayout(PageGeometry),
	/// Manual relative scroll (keys, wheel).
	ScrollBy(i32),
	/// Manual absolute jump (Home/End).
	ScrollTo(u16),
	/// Navbar activation: smooth-scroll the region's top to the viewport
	/// top.
	NavActivate(RegionId),
	/// Move gallery card focus.
	GalleryFocus(i32),
	/// Activate a specific gallery card.
	OpenProject(usize),
	/// Activate the focused gallery card.
	OpenFocused,
	/// Close control on the overlay.
	CloseOverlay,
	/// Activation on the scrim outside the detail panel.
	ScrimPress,
	ConsoleToggle,
	ConsoleChar(char),
	ConsoleBackspace,
	ConsoleSubmit,
	ConsoleClose,
}

pub struct Page {
	geometry: PageGeometry,
	scroll: Scroll,
	tracker: ActiveTracker,
	ticker: Ticker,
	reveals: [Reveal; RegionId::ALL.len()],
	gallery: Gallery,
	console: Console,
}

impl Default for Page {
	fn default() -> Self {
		Self::new()
	}
}

impl Page {
	pub fn new() -> Self {
		Self::with_ticker(Ticker::new(LEARNING_TOPICS.len()))
	}

	/// Mounts the page around an externally configured ticker (the CLI
	/// can override the period).
	pub fn with_ticker(ticker: Ticker) -> Self {
		let mut reveals = [Reveal::new(); RegionId::ALL.len()];
		// The first region settles unconditionally on mount.
		reveals[0].settle();
		Self {
			geometry: PageGeometry::default(),
			scroll: Scroll::new(),
			tracker: ActiveTracker::new(),
			ticker,
			reveals,
			gallery: Gallery::new(PROJECTS.len()),
			console: Console::new(),
		}
	}

	pub fn geometry(&self) -> &PageGeometry {
		&self.geometry
	}

	pub fn scroll_offset(&self) -> u16 {
		self.scroll.offset()
	}

	pub fn active_region(&self) -> RegionId {
		self.tracker.active()
	}

	pub fn ticker(&self) -> &Ticker {
		&self.ticker
	}

	pub fn gallery(&self) -> &Gallery {
		&self.gallery
	}

	pub fn console(&self) -> &Console {
		&self.console
	}

	pub fn reveal(&self, region: RegionId) -> &Reveal {
		&self.reveals[region.index()]
	}

	/// Whether the overlay currently captures input.
	pub fn overlay_open(&self) -> bool {
		self.gallery.is_open()
	}

	/// True while any time-driven transition is mid-flight; the frontend
	/// shortens its poll timeout accordingly.
	pub fn is_animating(&self) -> bool {
		self.scroll.is_gliding()
			|| self.ticker.slide_progress().is_some()
			|| self.reveals.iter().any(|r| r.is_settled() && r.progress() < 1.0)
	}

	pub fn handle(&mut self, event: UiEvent) {
		match event {
			UiEvent::Tick(delta) => {
				self.ticker.tick(delta);
				for reveal in &mut self.reveals {
					reveal.tick(delta);
				}
				if self.scroll.is_gliding() {
					self.scroll.tick(delta);
					self.after_scroll();
				}
			}
			UiEvent::Relayout(geometry) => {
				self.geometry = geometry;
				self.scroll.clamp(geometry.max_scroll());
				self.after_scroll();
			}
			UiEvent::ScrollBy(delta) => {
				self.scroll.scroll_by(delta, self.geometry.max_scroll());
				self.after_scroll();
			}
			UiEvent::ScrollTo(row) => {
				self.scroll.scroll_to(row, self.geometry.max_scroll());
				self.after_scroll();
			}
			UiEvent::NavActivate(region) => {
				debug!(region = region.as_str(), "nav.activate");
				let top = self.geometry.extent(region).top;
				self.scroll.glide_to(top, self.geometry.max_scroll());
			}
			UiEvent::GalleryFocus(delta) => self.gallery.focus_by(delta),
			UiEvent::OpenProject(index) => {
				self.console.close();
				self.gallery.open(index);
			}
			UiEvent::OpenFocused => {
				self.console.close();
				self.gallery.open_focused();
			}
			UiEvent::CloseOverlay | UiEvent::ScrimPress => self.gallery.close(),
			UiEvent::ConsoleToggle => {
				// The overlay is exclusive; it keeps capture while open.
				if !self.gallery.is_open() {
					self.console.toggle();
				}
			}
			UiEvent::ConsoleChar(c) => self.console.push_char(c),
			UiEvent::ConsoleBackspace => self.console.backspace(),
			UiEvent::ConsoleSubmit => self.console.submit(),
			UiEvent::ConsoleClose => self.console.close(),
		}
	}

	/// Scroll-dependent recomputation: focal region and reveal
	/// visibility.
	fn after_scroll(&mut self) {
		self.tracker.recompute(&self.geometry, self.scroll.offset());

		let offset = self.scroll.offset();
		let view_top = offset.saturating_add(REVEAL_MARGIN);
		let view_bottom = offset
			.saturating_add(self.geometry.viewport_height)
			.saturating_sub(REVEAL_MARGIN);
		for region in RegionId::ALL {
			if self.geometry.extent(region).intersects(view_top, view_bottom) {
				self.reveals[region.index()].settle();
			}
		}
	}
}
