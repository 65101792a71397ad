//! The fixed bottom navigation bar.
//!
//! One control per region in registration order; exactly one is marked
//! active, mirroring the tracker. Activation requests a smooth scroll, so
//! the bar never mutates state itself; it only reports hit rects.

use folio_content::{NAV_LINKS, RegionId};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::hit::HitRegions;
use crate::theme::Theme;

const HINT: &str = "1-7 jump · tab next · ⏎ open · o repo · : console · r resume · q quit";

/// Nav items as spans plus their relative hit offsets.
pub fn layout_items(
	active: RegionId,
	theme: &Theme,
) -> (Vec<Span<'static>>, Vec<(u16, u16, RegionId)>) {
	let navbar = theme.colors.navbar;
	let mut spans = Vec::new();
	let mut offsets = Vec::new();
	let mut x = 0u16;

	for entry in NAV_LINKS {
		let text = format!(" {} {} ", entry.icon, entry.label);
		let width = text.width() as u16;
		let style = if entry.region == active {
			Style::new()
				.fg(navbar.active_fg)
				.bg(navbar.active_bg)
				.add_modifier(Modifier::BOLD)
		} else {
			Style::new().fg(navbar.fg)
		};
		spans.push(Span::styled(text, style));
		offsets.push((x, width, entry.region));
		x += width;
	}
	(spans, offsets)
}

pub fn draw(
	frame: &mut Frame,
	area: Rect,
	active: RegionId,
	theme: &Theme,
	hits: &mut HitRegions,
) {
	if area.height < 3 {
		return;
	}
	let colors = theme.colors;

	frame.render_widget(
		Paragraph::new(Line::from(Span::styled(
			"─".repeat(area.width as usize),
			Style::new().fg(colors.ui.border),
		))),
		Rect::new(area.x, area.y, area.width, 1),
	);

	let (spans, offsets) = layout_items(active, theme);
	let total: u16 = offsets.iter().map(|(_, w, _)| w).sum();
	let x0 = if total < area.width { area.x + (area.width - total) / 2 } else { area.x };
	let row = area.y + 1;
	let bar_area = Rect::new(x0, row, total.min(area.width), 1);
	frame.render_widget(Paragraph::new(Line::from(spans)), bar_area);

	for (offset, width, region) in offsets {
		let x = x0.saturating_add(offset);
		if x < area.x + area.width {
			hits.navbar.push((Rect::new(x, row, width, 1), region));
		}
	}

	frame.render_widget(
		Paragraph::new(Line::from(Span::styled(
			HINT,
			Style::new().fg(colors.navbar.hint_fg),
		)))
		.alignment(Alignment::Center),
		Rect::new(area.x, area.y + 2, area.width, 1),
	);
}

#[cfg(test)]
mod tests;
