use std::time::Duration;

use clap::Parser;
use crossterm::event::{KeyEventKind, KeyEventState};
use folio_core::{Extent, PageGeometry};
use pretty_assertions::assert_eq;
use ratatui::layout::Rect;

use super::*;
use crate::app::App;
use crate::cli::Args;
use crate::theme::MIDNIGHT;

fn app() -> App {
	let args = Args::parse_from(["folio"]);
	let mut app = App::new(&args, MIDNIGHT);

	// Seven 40-row regions under a 40-row viewport.
	let mut extents = [Extent::default(); RegionId::ALL.len()];
	for (i, extent) in extents.iter_mut().enumerate() {
		*extent = Extent::new((i as u16) * 40, 40);
	}
	app.page.handle(UiEvent::Relayout(PageGeometry {
		extents,
		page_height: 280,
		viewport_height: 40,
	}));
	// Settle the mount animation so `is_animating` is a clean baseline.
	app.page.handle(UiEvent::Tick(Duration::from_secs(2)));
	assert!(!app.page.is_animating());
	app
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent {
		code,
		modifiers: KeyModifiers::NONE,
		kind: KeyEventKind::Press,
		state: KeyEventState::NONE,
	}
}

fn click_at(app: &mut App, col: u16, row: u16) {
	let event = MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column: col,
		row,
		modifiers: KeyModifiers::NONE,
	};
	handle_mouse(app, event);
}

#[test]
fn q_quits_from_the_page() {
	let mut app = app();
	handle_key(&mut app, key(KeyCode::Char('q')));
	assert!(app.should_quit);
}

#[test]
fn ctrl_c_quits_from_any_mode() {
	let mut app = app();
	app.page.handle(UiEvent::OpenProject(0));
	let mut event = key(KeyCode::Char('c'));
	event.modifiers = KeyModifiers::CONTROL;
	handle_key(&mut app, event);
	assert!(app.should_quit);
}

#[test]
fn enter_opens_the_focused_project_and_esc_closes_it() {
	let mut app = app();
	handle_key(&mut app, key(KeyCode::Right));
	handle_key(&mut app, key(KeyCode::Enter));
	assert_eq!(app.page.gallery().selected(), Some(1));

	handle_key(&mut app, key(KeyCode::Esc));
	assert_eq!(app.page.gallery().selected(), None);
}

#[test]
fn overlay_captures_the_page_keymap() {
	let mut app = app();
	app.page.handle(UiEvent::OpenProject(0));

	// 'q' closes the overlay instead of quitting.
	handle_key(&mut app, key(KeyCode::Char('q')));
	assert!(!app.should_quit);
	assert_eq!(app.page.gallery().selected(), None);
}

#[test]
fn link_shortcut_never_opens_the_overlay() {
	let mut app = app();
	handle_key(&mut app, key(KeyCode::Char('o')));
	assert_eq!(app.page.gallery().selected(), None);
}

#[test]
fn number_keys_request_a_glide() {
	let mut app = app();
	handle_key(&mut app, key(KeyCode::Char('5')));
	assert!(app.page.is_animating());
}

#[test]
fn console_captures_text_until_escape() {
	let mut app = app();
	handle_key(&mut app, key(KeyCode::Char(':')));
	assert!(app.page.console().is_visible());

	for c in "help".chars() {
		handle_key(&mut app, key(KeyCode::Char(c)));
	}
	// 'q' is console input here, not quit.
	assert!(!app.should_quit);
	let before = app.page.console().scrollback().count();
	handle_key(&mut app, key(KeyCode::Enter));
	assert_eq!(app.page.console().scrollback().count(), before + 2);

	handle_key(&mut app, key(KeyCode::Esc));
	assert!(!app.page.console().is_visible());
}

#[test]
fn scroll_keys_move_the_viewport() {
	let mut app = app();
	handle_key(&mut app, key(KeyCode::Char('j')));
	assert_eq!(app.page.scroll_offset(), 1);
	handle_key(&mut app, key(KeyCode::End));
	assert_eq!(app.page.scroll_offset(), 240);
	handle_key(&mut app, key(KeyCode::Home));
	assert_eq!(app.page.scroll_offset(), 0);
}

#[test]
fn clicking_a_card_opens_it_but_its_link_glyph_does_not() {
	let mut app = app();
	app.hits.cards.push((Rect::new(10, 10, 40, 6), 0));
	app.hits.card_links.push((Rect::new(44, 10, 4, 1), 0));

	// The glyph sits inside the card rect; it must win.
	click_at(&mut app, 45, 10);
	assert_eq!(app.page.gallery().selected(), None);

	click_at(&mut app, 12, 12);
	assert_eq!(app.page.gallery().selected(), Some(0));
}

#[test]
fn scrim_click_closes_and_panel_click_does_not() {
	let mut app = app();
	app.page.handle(UiEvent::OpenProject(1));
	app.hits.overlay_panel = Some(Rect::new(20, 5, 40, 20));

	click_at(&mut app, 25, 10);
	assert_eq!(app.page.gallery().selected(), Some(1));

	click_at(&mut app, 2, 2);
	assert_eq!(app.page.gallery().selected(), None);
}

#[test]
fn navbar_click_requests_a_glide() {
	let mut app = app();
	app.hits.navbar.push((Rect::new(0, 42, 10, 1), RegionId::Contact));
	click_at(&mut app, 3, 42);
	assert!(app.page.is_animating());
}

#[test]
fn wheel_scroll_is_ignored_while_the_overlay_is_open() {
	let mut app = app();
	app.page.handle(UiEvent::OpenProject(0));
	let event = MouseEvent {
		kind: MouseEventKind::ScrollDown,
		column: 0,
		row: 0,
		modifiers: KeyModifiers::NONE,
	};
	handle_mouse(&mut app, event);
	assert_eq!(app.page.scroll_offset(), 0);
}
