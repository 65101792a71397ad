//! Static portfolio content.
//!
//! Everything the page presents lives here as compile-time data: contact
//! details, education, experience, projects, extracurriculars, skill
//! ratings, navigation entries, the learning-topics ticker list, and the
//! console command table. The crate is a leaf: no dependencies, no I/O,
//! and nothing mutable. Presentation crates read it; nothing writes it.

pub mod data;
pub mod region;
pub mod types;

pub use data::{
	CONSOLE_BANNER, CONSOLE_COMMANDS, CONSOLE_PROMPT, CONTACT, EDUCATION, EXPERIENCE,
	EXTRACURRICULARS, LEARNING_TOPICS, NAV_LINKS, PROJECTS, RESUME_FILENAME, RESUME_PATH,
	SKILL_CHIPS, SKILLS,
};
pub use region::RegionId;
pub use types::{
	ContactInfo, Education, Experience, Extracurricular, NavEntry, Project, Skill,
};

#[cfg(test)]
mod tests;
