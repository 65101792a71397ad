//! The rotating learning-topics line.
//!
//! One topic is current at a time; during the slide window right after an
//! advance the outgoing topic lingers dimmed for the first half, then the
//! incoming topic takes over, approximating the exit/entry animation.

use folio_content::LEARNING_TOPICS;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::render::page::BuildCtx;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn line(ctx: &BuildCtx) -> Line<'static> {
	let ui = ctx.theme.colors.ui;
	let ticker = ctx.page.ticker();

	if LEARNING_TOPICS.is_empty() {
		return Line::default();
	}

	let spinner = SPINNER[(ctx.frame / 2) as usize % SPINNER.len()];
	let (topic, style) = match ticker.slide_progress() {
		// First half of the slide: the outgoing topic on its way out.
		Some(p) if p < 0.5 => (
			LEARNING_TOPICS[ticker.previous_index() % LEARNING_TOPICS.len()],
			Style::new().fg(ui.muted).add_modifier(Modifier::DIM),
		),
		Some(_) => (
			LEARNING_TOPICS[ticker.index() % LEARNING_TOPICS.len()],
			Style::new().fg(ui.fg),
		),
		None => (
			LEARNING_TOPICS[ticker.index() % LEARNING_TOPICS.len()],
			Style::new().fg(ui.muted),
		),
	};

	Line::from(vec![
		Span::styled(spinner.to_string(), Style::new().fg(ui.accent)),
		Span::raw(" "),
		Span::styled(topic, style),
	])
}
