//! The project detail overlay.
//!
//! A centered panel above a dimmed scrim. The panel shows the category
//! tag, title, full description, the architecture pipeline (only when the
//! record defines stages), the full technology list, and the link
//! controls present on the record.

use folio_content::Project;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::hit::HitRegions;
use super::wrap;
use crate::theme::Theme;

/// Panel content in panel-local coordinates: lines plus link-control
/// rects `(rect, url)`.
pub fn build_lines(
	project: &Project,
	width: u16,
	theme: &Theme,
) -> (Vec<Line<'static>>, Vec<(Rect, String)>) {
	let ui = theme.colors.ui;
	let popup = theme.colors.popup;
	let width = width.max(20) as usize;
	let mut lines: Vec<Line<'static>> = Vec::new();
	let mut links = Vec::new();

	lines.push(Line::from(Span::styled(
		format!("⟨ {} ⟩", project.category),
		Style::new().fg(popup.title),
	)));
	lines.push(Line::from(Span::styled(
		project.title,
		Style::new().fg(popup.fg).add_modifier(Modifier::BOLD),
	)));
	lines.push(Line::default());

	for text in wrap::wrap(project.description, width) {
		lines.push(Line::from(Span::styled(text, Style::new().fg(popup.fg))));
	}
	lines.push(Line::default());

	// Omitted entirely when the record defines no stages.
	if !project.architecture.is_empty() {
		lines.push(Line::from(Span::styled(
			"⎇ System Architecture",
			Style::new().fg(ui.secondary).add_modifier(Modifier::BOLD),
		)));
		lines.extend(pipeline(project.architecture, width, theme));
		lines.push(Line::default());
	}

	lines.push(Line::from(Span::styled(
		"TECH STACK",
		Style::new().fg(ui.muted).add_modifier(Modifier::DIM),
	)));
	for text in wrap::wrap(
		&project.tech.iter().map(|t| format!("[{t}]")).collect::<Vec<_>>().join(" "),
		width,
	) {
		lines.push(Line::from(Span::styled(text, Style::new().fg(ui.muted))));
	}

	let mut spans = Vec::new();
	let mut x = 0u16;
	let row = lines.len() as u16 + 1;
	if let Some(github) = project.github {
		let label = "[ » View Code ]";
		let w = label.width() as u16;
		spans.push(Span::styled(
			label,
			Style::new().fg(ui.bg).bg(ui.fg).add_modifier(Modifier::BOLD),
		));
		links.push((Rect::new(x, row, w, 1), github.to_string()));
		x += w + 2;
		spans.push(Span::raw("  "));
	}
	if let Some(link) = project.link {
		let label = "[ ↗ Live Demo ]";
		let w = label.width() as u16;
		spans.push(Span::styled(label, Style::new().fg(popup.fg).bg(ui.card_bg)));
		links.push((Rect::new(x, row, w, 1), link.to_string()));
	}
	if !spans.is_empty() {
		lines.push(Line::default());
		lines.push(Line::from(spans));
	}

	(lines, links)
}

/// Architecture stages joined by arrows, wrapped to the panel width, in
/// the record's original order.
fn pipeline(stages: &[&'static str], width: usize, theme: &Theme) -> Vec<Line<'static>> {
	let ui = theme.colors.ui;
	let stage_style = Style::new().fg(ui.fg);
	let arrow_style = Style::new().fg(ui.muted).add_modifier(Modifier::DIM);

	let mut lines = Vec::new();
	let mut spans: Vec<Span<'static>> = Vec::new();
	let mut used = 0usize;

	for stage in stages {
		let text = format!("[{stage}]");
		let w = text.width();
		if used > 0 && used + 3 + w > width {
			lines.push(Line::from(std::mem::take(&mut spans)));
			used = 0;
		} else if used > 0 {
			spans.push(Span::styled(" → ", arrow_style));
			used += 3;
		}
		spans.push(Span::styled(text, stage_style));
		used += w;
	}
	if !spans.is_empty() {
		lines.push(Line::from(spans));
	}
	lines
}

pub fn draw(
	frame: &mut Frame,
	area: Rect,
	project: &Project,
	theme: &Theme,
	hits: &mut HitRegions,
) {
	let popup = theme.colors.popup;

	// Scrim: dim everything behind the panel.
	frame
		.buffer_mut()
		.set_style(area, Style::new().add_modifier(Modifier::DIM));

	let width = area.width.saturating_sub(6).clamp(24, 76);
	let (lines, links) = build_lines(project, width.saturating_sub(4), theme);
	let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2)).max(5);

	let panel = Rect::new(
		area.x + (area.width.saturating_sub(width)) / 2,
		area.y + (area.height.saturating_sub(height)) / 2,
		width,
		height,
	);

	frame.render_widget(Clear, panel);
	let block = Block::new()
		.borders(Borders::ALL)
		.border_style(Style::new().fg(popup.border))
		.style(Style::new().bg(popup.bg).fg(popup.fg));
	let inner = block.inner(panel);
	frame.render_widget(Paragraph::new(lines).block(block), panel);

	// Close control drawn over the top border.
	let close = Rect::new(panel.x + panel.width.saturating_sub(5), panel.y, 4, 1);
	frame.render_widget(
		Paragraph::new(Line::from(Span::styled(
			" ✕ ",
			Style::new().fg(popup.fg).add_modifier(Modifier::BOLD),
		))),
		close,
	);

	hits.overlay_panel = Some(panel);
	hits.overlay_close = Some(close);
	for (rect, url) in links {
		let x = inner.x.saturating_add(rect.x);
		let y = inner.y.saturating_add(rect.y);
		if y < inner.y + inner.height {
			hits.links.push((Rect::new(x, y, rect.width, 1), url));
		}
	}
}
