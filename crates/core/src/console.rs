//! The supplemental console panel.
//!
//! A toggleable pseudo-terminal with a fixed command table: known commands
//! append their canned output, `clear` empties the scrollback, and any
//! other non-empty input appends a not-found line. Scrollback is bounded;
//! the oldest entries fall off the front.

use std::collections::VecDeque;

use folio_content::{CONSOLE_BANNER, CONSOLE_COMMANDS};
use tracing::debug;

/// Maximum retained scrollback entries.
const MAX_SCROLLBACK: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleEntryKind {
	Input,
	Output,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleEntry {
	pub kind: ConsoleEntryKind,
	pub text: String,
}

impl ConsoleEntry {
	fn input(text: impl Into<String>) -> Self {
		Self { kind: ConsoleEntryKind::Input, text: text.into() }
	}

	fn output(text: impl Into<String>) -> Self {
		Self { kind: ConsoleEntryKind::Output, text: text.into() }
	}
}

#[derive(Debug, Clone)]
pub struct Console {
	visible: bool,
	input: String,
	scrollback: VecDeque<ConsoleEntry>,
}

impl Default for Console {
	fn default() -> Self {
		Self::new()
	}
}

impl Console {
	pub fn new() -> Self {
		let scrollback = CONSOLE_BANNER.iter().map(|line| ConsoleEntry::output(*line)).collect();
		Self { visible: false, input: String::new(), scrollback }
	}

	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn input(&self) -> &str {
		&self.input
	}

	pub fn scrollback(&self) -> impl Iterator<Item = &ConsoleEntry> {
		self.scrollback.iter()
	}

	pub fn toggle(&mut self) {
		self.visible = !self.visible;
		debug!(visible = self.visible, "console.toggle");
	}

	pub fn close(&mut self) {
		self.visible = false;
	}

	pub fn push_char(&mut self, c: char) {
		if self.visible {
			self.input.push(c);
		}
	}

	pub fn backspace(&mut self) {
		self.input.pop();
	}

	/// Runs the current input line against the command table.
	pub fn submit(&mut self) {
		let raw = std::mem::take(&mut self.input);
		let cmd = raw.trim().to_lowercase();
		if cmd.is_empty() {
			return;
		}

		debug!(command = %cmd, "console.submit");
		if cmd == "clear" {
			self.scrollback.clear();
			return;
		}

		self.push_entry(ConsoleEntry::input(raw));
		match CONSOLE_COMMANDS.iter().find(|(name, _)| *name == cmd) {
			Some((_, output)) => self.push_entry(ConsoleEntry::output(*output)),
			None => self.push_entry(ConsoleEntry::output(format!("Command not found: {cmd}"))),
		}
	}

	fn push_entry(&mut self, entry: ConsoleEntry) {
		if self.scrollback.len() >= MAX_SCROLLBACK {
			self.scrollback.pop_front();
		}
		self.scrollback.push_back(entry);
	}
}
