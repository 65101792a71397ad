use folio_content::{SKILLS, Skill};
use pretty_assertions::assert_eq;

use super::*;
use crate::theme::MIDNIGHT;

fn row_text(line: &Line<'_>) -> String {
	line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn one_gauge_row_per_skill() {
	let lines = rows(SKILLS, 80, &MIDNIGHT);
	assert_eq!(lines.len(), SKILLS.len());
	for (line, skill) in lines.iter().zip(SKILLS) {
		assert!(row_text(line).contains(skill.label));
	}
}

#[test]
fn full_value_fills_the_bar() {
	let skills = [Skill { label: "All", value: 10, max: 10 }];
	let lines = rows(&skills, 60, &MIDNIGHT);
	let text = row_text(&lines[0]);
	assert!(text.contains(FILLED));
	assert!(!text.contains(EMPTY));
}

#[test]
fn zero_value_leaves_the_bar_empty() {
	let skills = [Skill { label: "None", value: 0, max: 10 }];
	let lines = rows(&skills, 60, &MIDNIGHT);
	let text = row_text(&lines[0]);
	assert!(!text.contains(FILLED));
	assert!(text.contains(EMPTY));
}

#[test]
fn bar_length_is_proportional() {
	let skills = [
		Skill { label: "Half", value: 5, max: 10 },
		Skill { label: "Full", value: 10, max: 10 },
	];
	let lines = rows(&skills, 60, &MIDNIGHT);
	let half = row_text(&lines[0]).matches(FILLED).count();
	let full = row_text(&lines[1]).matches(FILLED).count();
	assert_eq!(half * 2, full);
}

#[test]
fn degenerate_scale_renders_an_empty_bar() {
	let skills = [Skill { label: "Odd", value: 3, max: 0 }];
	let lines = rows(&skills, 60, &MIDNIGHT);
	assert!(!row_text(&lines[0]).contains(FILLED));
}

#[test]
fn narrow_width_still_renders() {
	let lines = rows(SKILLS, 10, &MIDNIGHT);
	assert_eq!(lines.len(), SKILLS.len());
}
