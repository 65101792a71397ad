//! Screen hit regions recorded during draw.
//!
//! Mouse clicks are resolved against the rectangles of the most recently
//! drawn frame. Order matters for nested activations: a card's link glyph
//! is checked before the card itself, so opening the link never also
//! opens the overlay.

use folio_content::RegionId;
use ratatui::layout::{Position, Rect};

#[derive(Debug, Default)]
pub struct HitRegions {
	/// Navbar controls, one per region.
	pub navbar: Vec<(Rect, RegionId)>,
	/// Gallery cards → project index.
	pub cards: Vec<(Rect, usize)>,
	/// Card link glyphs → project index. Checked before `cards`.
	pub card_links: Vec<(Rect, usize)>,
	/// Plain URL targets (hero buttons, contact, overlay links).
	pub links: Vec<(Rect, String)>,
	/// The résumé control.
	pub resume: Option<Rect>,
	/// Overlay close control.
	pub overlay_close: Option<Rect>,
	/// Overlay panel body; clicks inside are swallowed, outside is scrim.
	pub overlay_panel: Option<Rect>,
	/// Console panel body; clicks inside are swallowed.
	pub console_panel: Option<Rect>,
}

impl HitRegions {
	pub fn clear(&mut self) {
		self.navbar.clear();
		self.cards.clear();
		self.card_links.clear();
		self.links.clear();
		self.resume = None;
		self.overlay_close = None;
		self.overlay_panel = None;
		self.console_panel = None;
	}
}

/// First target whose rect contains the position.
pub fn find<'a, T>(targets: &'a [(Rect, T)], col: u16, row: u16) -> Option<&'a T> {
	let pos = Position::new(col, row);
	targets.iter().find(|(rect, _)| rect.contains(pos)).map(|(_, t)| t)
}

pub fn contains(rect: Option<Rect>, col: u16, row: u16) -> bool {
	rect.is_some_and(|r| r.contains(Position::new(col, row)))
}
