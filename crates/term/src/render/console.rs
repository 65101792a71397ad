//! The console panel.

use folio_content::CONSOLE_PROMPT;
use folio_core::{Console, ConsoleEntryKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::hit::HitRegions;
use crate::theme::Theme;

pub fn draw(
	frame: &mut Frame,
	area: Rect,
	console: &Console,
	theme: &Theme,
	hits: &mut HitRegions,
) {
	let ui = theme.colors.ui;
	let popup = theme.colors.popup;

	let width = area.width.saturating_sub(4).clamp(30, 64);
	let height = area.height.saturating_sub(2).clamp(8, 16);
	let panel = Rect::new(
		area.x + area.width.saturating_sub(width + 2),
		area.y + area.height.saturating_sub(height + 1),
		width,
		height,
	);

	frame.render_widget(Clear, panel);
	let block = Block::new()
		.borders(Borders::ALL)
		.border_style(Style::new().fg(popup.border))
		.style(Style::new().bg(popup.bg).fg(popup.fg))
		.title(format!(" {CONSOLE_PROMPT} "))
		.title_style(Style::new().fg(ui.muted));
	let inner = block.inner(panel);

	// Scrollback tail above a single prompt row.
	let tail = inner.height.saturating_sub(1) as usize;
	let entries: Vec<_> = console.scrollback().collect();
	let skip = entries.len().saturating_sub(tail);
	let mut lines: Vec<Line<'static>> = entries
		.into_iter()
		.skip(skip)
		.map(|entry| match entry.kind {
			ConsoleEntryKind::Input => Line::from(vec![
				Span::styled("❯ ", Style::new().fg(ui.accent)),
				Span::styled(entry.text.clone(), Style::new().fg(popup.fg)),
			]),
			ConsoleEntryKind::Output => {
				Line::from(Span::styled(entry.text.clone(), Style::new().fg(ui.muted)))
			}
		})
		.collect();

	lines.push(Line::from(vec![
		Span::styled("❯ ", Style::new().fg(ui.accent)),
		Span::styled(console.input().to_string(), Style::new().fg(popup.fg)),
		Span::styled("▌", Style::new().fg(ui.accent).add_modifier(Modifier::SLOW_BLINK)),
	]));

	// Keep the prompt on the last row when the tail overflows.
	let overflow = lines.len().saturating_sub(inner.height as usize);
	let lines: Vec<Line<'static>> = lines.into_iter().skip(overflow).collect();

	frame.render_widget(Paragraph::new(lines).block(block), panel);
	hits.console_panel = Some(panel);
}
