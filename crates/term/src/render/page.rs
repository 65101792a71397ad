//! Page assembly: build every region into one tall line buffer and
//! measure extents.
//!
//! The page is rebuilt each frame from current state, so ticker frames,
//! card focus, and reveal treatment are always baked into the lines. The
//! measured geometry is fed back into the core page before the visible
//! window is sliced out.

use folio_content::RegionId;
use folio_core::{Extent, Page, PageGeometry};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;

use super::sections::{
	SectionOut, contact, education, experience, extracurriculars, hero, projects, skills,
};
use crate::logo::Logo;
use crate::theme::Theme;

/// Inputs to a page build.
pub struct BuildCtx<'a> {
	pub theme: &'a Theme,
	/// Content column width.
	pub width: u16,
	/// Content viewport height; regions are padded to fill it.
	pub viewport: u16,
	pub logo: Option<&'a Logo>,
	pub page: &'a Page,
	/// Frame counter driving the ticker spinner.
	pub frame: u64,
}

/// A fully built page: lines plus page-coordinate hit rects.
#[derive(Debug, Default)]
pub struct PageOut {
	pub lines: Vec<Line<'static>>,
	pub geometry: PageGeometry,
	pub links: Vec<(Rect, String)>,
	pub cards: Vec<(Rect, usize)>,
	pub card_links: Vec<(Rect, usize)>,
	pub resume: Option<Rect>,
}

pub fn build(ctx: &BuildCtx) -> PageOut {
	let mut out = PageOut::default();

	for region in RegionId::ALL {
		let start = out.lines.len() as u16;
		let mut section = match region {
			RegionId::Hero => hero::build(ctx),
			RegionId::Education => education::build(ctx),
			RegionId::Skills => skills::build(ctx),
			RegionId::Experience => experience::build(ctx),
			RegionId::Projects => projects::build(ctx),
			RegionId::Extracurriculars => extracurriculars::build(ctx),
			RegionId::Contact => contact::build(ctx),
		};
		apply_reveal(&mut section.lines, ctx.page.reveal(region).progress());

		// Pad each region toward a full viewport, content centered.
		let body = section.lines.len() as u16;
		let slack = ctx.viewport.saturating_sub(body);
		let pad_top = (slack / 2).max(1);
		let pad_bottom = (slack - slack / 2).max(2);

		for _ in 0..pad_top {
			out.lines.push(Line::default());
		}
		let content_start = start + pad_top;
		out.lines.append(&mut section.lines);
		for _ in 0..pad_bottom {
			out.lines.push(Line::default());
		}

		collect_hits(&mut out, section, content_start);
		let height = out.lines.len() as u16 - start;
		out.geometry.extents[region.index()] = Extent::new(start, height);
	}

	out.geometry.page_height = out.lines.len() as u16;
	out.geometry.viewport_height = ctx.viewport;
	out
}

fn collect_hits(out: &mut PageOut, section: SectionOut, content_start: u16) {
	for (mut rect, url) in section.links {
		rect.y += content_start;
		out.links.push((rect, url));
	}
	for (mut rect, index) in section.cards {
		rect.y += content_start;
		out.cards.push((rect, index));
	}
	for (mut rect, index) in section.card_links {
		rect.y += content_start;
		out.card_links.push((rect, index));
	}
	if let Some(mut rect) = section.resume {
		rect.y += content_start;
		out.resume = Some(rect);
	}
}

/// The reveal treatment: transparent while `Initial`, dimmed through the
/// first part of the settle, full intensity after.
fn apply_reveal(lines: &mut [Line<'static>], progress: f32) {
	if progress >= 1.0 {
		return;
	}
	if progress <= 0.0 {
		for line in lines.iter_mut() {
			*line = Line::default();
		}
		return;
	}
	if progress < 0.7 {
		for line in lines.iter_mut() {
			for span in &mut line.spans {
				span.style = span.style.add_modifier(Modifier::DIM);
			}
		}
	}
}

/// Slice of the page visible at `offset`, padded with empty lines at the
/// bottom of short pages.
pub fn visible_window(out: &PageOut, offset: u16, height: u16) -> Vec<Line<'static>> {
	let start = offset.min(out.lines.len() as u16) as usize;
	let end = (start + height as usize).min(out.lines.len());
	out.lines[start..end].to_vec()
}

/// Base style for the content area.
pub fn base_style(theme: &Theme) -> Style {
	Style::new().fg(theme.colors.ui.fg).bg(theme.colors.ui.bg)
}

#[cfg(test)]
mod tests;
