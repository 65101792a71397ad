//! Color themes.

use ratatui::style::Color;

#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct UiColors {
	pub bg: Color,
	pub fg: Color,
	pub muted: Color,
	pub secondary: Color,
	pub accent: Color,
	pub card_bg: Color,
	pub border: Color,
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct NavbarColors {
	pub fg: Color,
	pub active_fg: Color,
	pub active_bg: Color,
	pub hint_fg: Color,
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct PopupColors {
	pub bg: Color,
	pub fg: Color,
	pub border: Color,
	pub title: Color,
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct ThemeColors {
	pub ui: UiColors,
	pub navbar: NavbarColors,
	pub popup: PopupColors,
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub colors: ThemeColors,
}

/// The dark default, modeled on the original site's palette.
pub const MIDNIGHT: Theme = Theme {
	name: "midnight",
	colors: ThemeColors {
		ui: UiColors {
			bg: Color::Rgb(10, 14, 26),
			fg: Color::Rgb(226, 232, 240),
			muted: Color::Rgb(148, 163, 184),
			secondary: Color::Rgb(56, 189, 248),
			accent: Color::Rgb(0, 220, 130),
			card_bg: Color::Rgb(17, 24, 39),
			border: Color::Rgb(51, 65, 85),
		},
		navbar: NavbarColors {
			fg: Color::Rgb(148, 163, 184),
			active_fg: Color::Rgb(0, 220, 130),
			active_bg: Color::Rgb(30, 41, 59),
			hint_fg: Color::Rgb(100, 116, 139),
		},
		popup: PopupColors {
			bg: Color::Rgb(17, 24, 39),
			fg: Color::Rgb(226, 232, 240),
			border: Color::Rgb(71, 85, 105),
			title: Color::Rgb(0, 220, 130),
		},
	},
};

pub const PAPER: Theme = Theme {
	name: "paper",
	colors: ThemeColors {
		ui: UiColors {
			bg: Color::Rgb(250, 250, 249),
			fg: Color::Rgb(28, 25, 23),
			muted: Color::Rgb(87, 83, 78),
			secondary: Color::Rgb(2, 132, 199),
			accent: Color::Rgb(5, 150, 105),
			card_bg: Color::Rgb(245, 245, 244),
			border: Color::Rgb(214, 211, 209),
		},
		navbar: NavbarColors {
			fg: Color::Rgb(87, 83, 78),
			active_fg: Color::Rgb(5, 150, 105),
			active_bg: Color::Rgb(231, 229, 228),
			hint_fg: Color::Rgb(168, 162, 158),
		},
		popup: PopupColors {
			bg: Color::Rgb(255, 255, 255),
			fg: Color::Rgb(28, 25, 23),
			border: Color::Rgb(168, 162, 158),
			title: Color::Rgb(5, 150, 105),
		},
	},
};

/// Looks up a built-in theme by name.
pub fn builtin(name: &str) -> Option<Theme> {
	match name {
		"midnight" => Some(MIDNIGHT),
		"paper" => Some(PAPER),
		_ => None,
	}
}
