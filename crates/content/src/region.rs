//! Page region identifiers.
//!
//! The page is a fixed vertical stack of seven regions. Declaration order
//! is registration order is visual order; everything that iterates regions
//! does so through [`RegionId::ALL`].

/// Identifier for one vertically-stacked page region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
	Hero,
	Education,
	Skills,
	Experience,
	Projects,
	Extracurriculars,
	Contact,
}

impl RegionId {
	/// All regions in registration (visual) order.
	pub const ALL: [RegionId; 7] = [
		RegionId::Hero,
		RegionId::Education,
		RegionId::Skills,
		RegionId::Experience,
		RegionId::Projects,
		RegionId::Extracurriculars,
		RegionId::Contact,
	];

	/// Stable string identifier, used in logs and anchors.
	pub fn as_str(self) -> &'static str {
		match self {
			RegionId::Hero => "hero",
			RegionId::Education => "education",
			RegionId::Skills => "skills",
			RegionId::Experience => "experience",
			RegionId::Projects => "projects",
			RegionId::Extracurriculars => "extracurriculars",
			RegionId::Contact => "contact",
		}
	}

	/// Position within [`RegionId::ALL`].
	pub fn index(self) -> usize {
		Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
	}

	/// The first region in registration order.
	pub fn first() -> RegionId {
		Self::ALL[0]
	}
}
