//! Application state and the event loop.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use folio_content::{EDUCATION, LEARNING_TOPICS};
use folio_core::{Page, Ticker, UiEvent};
use tracing::{info, warn};

use crate::cli::Args;
use crate::render::hit::HitRegions;
use crate::terminal::{self, Tui};
use crate::theme::Theme;
use crate::{input, logo, render};

pub struct App {
	pub page: Page,
	pub theme: Theme,
	/// `None` renders the logo fallback text.
	pub logo: Option<logo::Logo>,
	/// Hit regions of the most recently drawn frame.
	pub hits: HitRegions,
	/// Frame counter, drives the ticker spinner.
	pub frame: u64,
	pub should_quit: bool,
}

impl App {
	pub fn new(args: &Args, theme: Theme) -> Self {
		let logo = match logo::load(EDUCATION.logo) {
			Ok(logo) => Some(logo),
			Err(error) => {
				// Local silent recovery: the education card shows the
				// fallback text instead.
				warn!(%error, path = EDUCATION.logo, "logo.load_failed");
				None
			}
		};

		let ticker =
			Ticker::with_period(LEARNING_TOPICS.len(), Duration::from_millis(args.tick_ms.max(1)));
		Self {
			page: Page::with_ticker(ticker),
			theme,
			logo,
			hits: HitRegions::default(),
			frame: 0,
			should_quit: false,
		}
	}
}

pub fn run(args: &Args, theme: Theme) -> Result<()> {
	let mouse = !args.no_mouse;
	terminal::install_panic_hook(mouse);
	let mut terminal = terminal::setup(mouse)?;

	let mut app = App::new(args, theme);
	let result = event_loop(&mut terminal, &mut app);

	let cleanup = terminal::restore(mouse);
	info!("folio.exit");
	result?;
	cleanup?;
	Ok(())
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
	let mut last = Instant::now();

	while !app.should_quit {
		let now = Instant::now();
		app.page.handle(UiEvent::Tick(now - last));
		last = now;
		app.frame = app.frame.wrapping_add(1);

		terminal.draw(|frame| render::draw(frame, app))?;

		let timeout = if app.page.is_animating() {
			Duration::from_millis(16)
		} else {
			Duration::from_millis(50)
		};
		if event::poll(timeout)? {
			match event::read()? {
				Event::Key(key)
					if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
				{
					input::handle_key(app, key);
				}
				Event::Mouse(mouse) => input::handle_mouse(app, mouse),
				// The next draw re-measures everything.
				Event::Resize(_, _) => {}
				_ => {}
			}
		}
	}
	Ok(())
}
