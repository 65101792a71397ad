//! Record types for the content store.
//!
//! All fields borrow `'static` data; records are constructed once in
//! [`crate::data`] and never mutated.

use crate::region::RegionId;

/// Contact details shown in the hero and contact regions.
#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
	pub email: &'static str,
	pub linkedin: &'static str,
	pub github: &'static str,
	pub phone: &'static str,
	pub location: &'static str,
}

/// The single education record.
#[derive(Debug, Clone, Copy)]
pub struct Education {
	pub school: &'static str,
	pub degree: &'static str,
	pub period: &'static str,
	pub cgpa: &'static str,
	pub location: &'static str,
	/// Path to the institution logo, resolved relative to the working
	/// directory at startup.
	pub logo: &'static str,
}

/// One experience entry on the professional timeline.
#[derive(Debug, Clone, Copy)]
pub struct Experience {
	pub company: &'static str,
	pub role: &'static str,
	pub period: &'static str,
	pub location: &'static str,
	/// Ordered bullet points.
	pub description: &'static [&'static str],
}

/// One project shown in the gallery and detail overlay.
#[derive(Debug, Clone, Copy)]
pub struct Project {
	pub title: &'static str,
	pub category: &'static str,
	pub tech: &'static [&'static str],
	pub description: &'static str,
	/// Live demo URL, if the project has one.
	pub link: Option<&'static str>,
	/// Source repository URL, if public.
	pub github: Option<&'static str>,
	/// Ordered architecture-stage labels for the detail view's pipeline
	/// diagram. Empty means the record defines no diagram and the section
	/// is omitted entirely.
	pub architecture: &'static [&'static str],
}

impl Project {
	/// Preferred external URL for the gallery card's link shortcut:
	/// source repository first, then live demo.
	pub fn external_url(&self) -> Option<&'static str> {
		self.github.or(self.link)
	}
}

/// One extracurricular or achievement entry.
#[derive(Debug, Clone, Copy)]
pub struct Extracurricular {
	pub title: &'static str,
	pub organization: Option<&'static str>,
	pub period: Option<&'static str>,
	pub description: &'static str,
}

/// One `(label, value, max)` skill rating for the proficiency matrix.
#[derive(Debug, Clone, Copy)]
pub struct Skill {
	pub label: &'static str,
	pub value: u8,
	pub max: u8,
}

/// One navigation bar entry.
#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
	pub label: &'static str,
	pub region: RegionId,
	pub icon: &'static str,
}
