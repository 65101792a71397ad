//! Terminal acquisition and release.
//!
//! Raw mode, the alternate screen, and (optionally) mouse capture are
//! acquired on startup and must be released on every exit path; the panic
//! hook restores the terminal before the default hook prints, so a panic
//! message is never lost to the alternate screen.

use std::io::{self, Stdout, stdout};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
	EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn setup(mouse: bool) -> io::Result<Tui> {
	enable_raw_mode()?;
	execute!(stdout(), EnterAlternateScreen)?;
	if mouse {
		execute!(stdout(), EnableMouseCapture)?;
	}
	Terminal::new(CrosstermBackend::new(stdout()))
}

pub fn restore(mouse: bool) -> io::Result<()> {
	if mouse {
		execute!(stdout(), DisableMouseCapture)?;
	}
	execute!(stdout(), LeaveAlternateScreen)?;
	disable_raw_mode()
}

pub fn install_panic_hook(mouse: bool) {
	let hook = std::panic::take_hook();
	std::panic::set_hook(Box::new(move |info| {
		let _ = restore(mouse);
		hook(info);
	}));
}
