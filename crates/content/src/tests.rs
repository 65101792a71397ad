use std::collections::HashSet;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn region_ids_are_unique() {
	let ids: HashSet<&str> = RegionId::ALL.iter().map(|r| r.as_str()).collect();
	assert_eq!(ids.len(), RegionId::ALL.len());
}

#[test]
fn region_index_round_trips() {
	for (i, region) in RegionId::ALL.iter().enumerate() {
		assert_eq!(region.index(), i);
	}
}

#[test]
fn first_region_is_hero() {
	assert_eq!(RegionId::first(), RegionId::Hero);
	assert_eq!(RegionId::first().as_str(), "hero");
}

#[test]
fn nav_links_cover_every_region_in_order() {
	assert_eq!(NAV_LINKS.len(), RegionId::ALL.len());
	for (entry, region) in NAV_LINKS.iter().zip(RegionId::ALL) {
		assert_eq!(entry.region, region);
		assert!(!entry.label.is_empty());
		assert!(!entry.icon.is_empty());
	}
}

#[test]
fn skill_values_fit_their_scale() {
	for skill in SKILLS {
		assert!(skill.value <= skill.max, "{} exceeds its scale", skill.label);
		assert!(skill.max > 0);
	}
}

#[test]
fn ticker_topics_are_present() {
	assert!(!LEARNING_TOPICS.is_empty());
	assert!(LEARNING_TOPICS.iter().all(|t| !t.is_empty()));
}

#[test]
fn project_link_shortcut_prefers_source_repo() {
	let with_github = Project { github: Some("g"), link: Some("l"), ..PROJECTS[0] };
	assert_eq!(with_github.external_url(), Some("g"));

	let link_only = Project { github: None, link: Some("l"), ..PROJECTS[0] };
	assert_eq!(link_only.external_url(), Some("l"));

	let bare = Project { github: None, link: None, ..PROJECTS[0] };
	assert_eq!(bare.external_url(), None);
}

#[test]
fn stock_sentiment_project_sits_at_gallery_position_one() {
	let project = &PROJECTS[1];
	assert_eq!(project.title, "Stock Sentiment Analysis");
	assert_eq!(project.architecture.len(), 6);
	assert_eq!(project.architecture[0], "Live News Data");
	assert_eq!(project.architecture[5], "Streamlit UI");
}

#[test]
fn console_command_names_are_unique_and_lowercase() {
	let names: HashSet<&str> = CONSOLE_COMMANDS.iter().map(|(name, _)| *name).collect();
	assert_eq!(names.len(), CONSOLE_COMMANDS.len());
	for (name, output) in CONSOLE_COMMANDS {
		assert_eq!(*name, name.to_lowercase());
		assert!(!output.is_empty());
	}
}
