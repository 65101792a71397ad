//! Frame composition.
//!
//! Each frame: rebuild the page from current state, feed the measured
//! geometry back into the core page, slice the visible window, then stack
//! the chrome (navbar, console, overlay) and record this frame's hit
//! regions for mouse resolution.

pub mod console;
pub mod hit;
pub mod navbar;
pub mod overlay;
pub mod page;
pub mod sections;
pub mod skill_chart;
pub mod ticker_line;
pub mod wrap;

use folio_content::PROJECTS;
use folio_core::UiEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Text;
use ratatui::widgets::{Block, Paragraph};

use crate::app::App;
use page::BuildCtx;

/// Content column cap on wide terminals.
const MAX_CONTENT_WIDTH: u16 = 96;

pub fn draw(frame: &mut Frame, app: &mut App) {
	let area = frame.area();
	frame.render_widget(Block::new().style(page::base_style(&app.theme)), area);

	let [content_area, navbar_area] =
		Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(area);

	let width = content_area.width.min(MAX_CONTENT_WIDTH).saturating_sub(4).max(20);
	let content_rect = Rect::new(
		content_area.x + content_area.width.saturating_sub(width) / 2,
		content_area.y,
		width.min(content_area.width),
		content_area.height,
	);

	let built = {
		let ctx = BuildCtx {
			theme: &app.theme,
			width: content_rect.width,
			viewport: content_area.height,
			logo: app.logo.as_ref(),
			page: &app.page,
			frame: app.frame,
		};
		page::build(&ctx)
	};

	app.page.handle(UiEvent::Relayout(built.geometry));
	let offset = app.page.scroll_offset();
	let window = page::visible_window(&built, offset, content_area.height);
	frame.render_widget(Paragraph::new(Text::from(window)), content_rect);

	app.hits.clear();
	// Page content is inert behind an open overlay, so its hit rects are
	// only registered while the overlay is closed.
	if !app.page.overlay_open() {
		for (rect, url) in &built.links {
			if let Some(screen) = to_screen(*rect, offset, content_rect) {
				app.hits.links.push((screen, url.clone()));
			}
		}
		for (rect, index) in &built.card_links {
			if let Some(screen) = to_screen(*rect, offset, content_rect) {
				app.hits.card_links.push((screen, *index));
			}
		}
		for (rect, index) in &built.cards {
			if let Some(screen) = to_screen(*rect, offset, content_rect) {
				app.hits.cards.push((screen, *index));
			}
		}
		if let Some(rect) = built.resume
			&& let Some(screen) = to_screen(rect, offset, content_rect)
		{
			app.hits.resume = Some(screen);
		}
	}

	navbar::draw(frame, navbar_area, app.page.active_region(), &app.theme, &mut app.hits);

	if app.page.console().is_visible() {
		console::draw(frame, content_area, app.page.console(), &app.theme, &mut app.hits);
	}
	if let Some(index) = app.page.gallery().selected()
		&& let Some(project) = PROJECTS.get(index)
	{
		overlay::draw(frame, area, project, &app.theme, &mut app.hits);
	}
}

/// Maps a page-coordinate rect into the visible window, clipping rows
/// outside it.
fn to_screen(rect: Rect, offset: u16, content_rect: Rect) -> Option<Rect> {
	let top = rect.y.max(offset);
	let bottom = rect.y.saturating_add(rect.height).min(offset + content_rect.height);
	if bottom <= top {
		return None;
	}
	let x = content_rect.x.saturating_add(rect.x);
	if x >= content_rect.x + content_rect.width {
		return None;
	}
	let width = rect.width.min(content_rect.width.saturating_sub(rect.x));
	Some(Rect::new(x, content_rect.y + (top - offset), width, bottom - top))
}
