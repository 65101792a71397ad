//! Terminal input → view-state events.
//!
//! Routing is modal: an open overlay captures the keyboard, then a
//! visible console, then the page keymap. Mouse clicks resolve against
//! the previous frame's hit regions; a card's link glyph is matched
//! before the card so the activation never also opens the overlay.

use crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use folio_content::{PROJECTS, RegionId};
use folio_core::UiEvent;

use crate::app::App;
use crate::links;
use crate::render::hit;

pub fn handle_key(app: &mut App, key: KeyEvent) {
	if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
		app.should_quit = true;
		return;
	}

	if app.page.overlay_open() {
		overlay_key(app, key);
		return;
	}
	if app.page.console().is_visible() {
		console_key(app, key);
		return;
	}
	page_key(app, key);
}

fn overlay_key(app: &mut App, key: KeyEvent) {
	let selected = app.page.gallery().selected().and_then(|i| PROJECTS.get(i));
	match key.code {
		KeyCode::Esc | KeyCode::Char('q') => app.page.handle(UiEvent::CloseOverlay),
		KeyCode::Char('o') => {
			if let Some(url) = selected.and_then(|p| p.github) {
				links::open_url(url);
			}
		}
		KeyCode::Char('l') => {
			if let Some(url) = selected.and_then(|p| p.link) {
				links::open_url(url);
			}
		}
		_ => {}
	}
}

fn console_key(app: &mut App, key: KeyEvent) {
	match key.code {
		KeyCode::Esc => app.page.handle(UiEvent::ConsoleClose),
		KeyCode::Enter => app.page.handle(UiEvent::ConsoleSubmit),
		KeyCode::Backspace => app.page.handle(UiEvent::ConsoleBackspace),
		KeyCode::Char(c) => app.page.handle(UiEvent::ConsoleChar(c)),
		_ => {}
	}
}

fn page_key(app: &mut App, key: KeyEvent) {
	let viewport = app.page.geometry().viewport_height;
	let half = (viewport / 2).max(1) as i32;

	match key.code {
		KeyCode::Char('q') => app.should_quit = true,
		KeyCode::Char(':') => app.page.handle(UiEvent::ConsoleToggle),
		KeyCode::Char('j') | KeyCode::Down => app.page.handle(UiEvent::ScrollBy(1)),
		KeyCode::Char('k') | KeyCode::Up => app.page.handle(UiEvent::ScrollBy(-1)),
		KeyCode::Char('d') | KeyCode::PageDown => app.page.handle(UiEvent::ScrollBy(half)),
		KeyCode::Char('u') | KeyCode::PageUp => app.page.handle(UiEvent::ScrollBy(-half)),
		KeyCode::Char('g') | KeyCode::Home => app.page.handle(UiEvent::ScrollTo(0)),
		KeyCode::Char('G') | KeyCode::End => {
			let bottom = app.page.geometry().max_scroll();
			app.page.handle(UiEvent::ScrollTo(bottom));
		}
		KeyCode::Char(c @ '1'..='7') => {
			let index = (c as usize) - ('1' as usize);
			app.page.handle(UiEvent::NavActivate(RegionId::ALL[index]));
		}
		KeyCode::Tab => app.page.handle(UiEvent::NavActivate(neighbor(app, 1))),
		KeyCode::BackTab => app.page.handle(UiEvent::NavActivate(neighbor(app, -1))),
		KeyCode::Char('h') | KeyCode::Left => app.page.handle(UiEvent::GalleryFocus(-1)),
		KeyCode::Char('l') | KeyCode::Right => app.page.handle(UiEvent::GalleryFocus(1)),
		KeyCode::Enter => app.page.handle(UiEvent::OpenFocused),
		// Link shortcut: opens the repo without opening the overlay.
		KeyCode::Char('o') => {
			let focused = app.page.gallery().focused();
			if let Some(url) = PROJECTS.get(focused).and_then(|p| p.external_url()) {
				links::open_url(url);
			}
		}
		KeyCode::Char('r') => links::open_resume(),
		_ => {}
	}
}

/// Region `step` away from the active one, wrapping.
fn neighbor(app: &App, step: i32) -> RegionId {
	let len = RegionId::ALL.len() as i32;
	let index = app.page.active_region().index() as i32;
	RegionId::ALL[((index + step).rem_euclid(len)) as usize]
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
	match mouse.kind {
		MouseEventKind::ScrollDown if !app.page.overlay_open() => {
			app.page.handle(UiEvent::ScrollBy(3));
		}
		MouseEventKind::ScrollUp if !app.page.overlay_open() => {
			app.page.handle(UiEvent::ScrollBy(-3));
		}
		MouseEventKind::Down(MouseButton::Left) => click(app, mouse.column, mouse.row),
		_ => {}
	}
}

fn click(app: &mut App, col: u16, row: u16) {
	if app.page.overlay_open() {
		if hit::contains(app.hits.overlay_close, col, row) {
			app.page.handle(UiEvent::CloseOverlay);
		} else if let Some(url) = hit::find(&app.hits.links, col, row) {
			let url = url.clone();
			links::open_url(&url);
		} else if !hit::contains(app.hits.overlay_panel, col, row) {
			app.page.handle(UiEvent::ScrimPress);
		}
		return;
	}

	if app.page.console().is_visible() && hit::contains(app.hits.console_panel, col, row) {
		return;
	}

	if let Some(region) = hit::find(&app.hits.navbar, col, row) {
		let region = *region;
		app.page.handle(UiEvent::NavActivate(region));
		return;
	}
	// Link glyph before card: the click must not propagate into the
	// card's own open action.
	if let Some(index) = hit::find(&app.hits.card_links, col, row) {
		if let Some(url) = PROJECTS.get(*index).and_then(|p| p.external_url()) {
			links::open_url(url);
		}
		return;
	}
	if let Some(index) = hit::find(&app.hits.cards, col, row) {
		let index = *index;
		app.page.handle(UiEvent::OpenProject(index));
		return;
	}
	if let Some(url) = hit::find(&app.hits.links, col, row) {
		let url = url.clone();
		links::open_url(&url);
		return;
	}
	if hit::contains(app.hits.resume, col, row) {
		links::open_resume();
	}
}

#[cfg(test)]
mod tests;
