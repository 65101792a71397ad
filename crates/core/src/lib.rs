//! View-state coordination for the portfolio page.
//!
//! The page is a fixed vertical stack of content regions scrolled under a
//! fixed navigation bar. This crate owns every piece of mutable UI state
//! and the transitions between states:
//!
//! - [`tracker`]: which region is focal at the current scroll position
//! - [`ticker`]: the rotating learning-topics index
//! - [`gallery`]: project focus and the exclusive detail overlay
//! - [`reveal`]: one-shot settle transitions as regions enter the viewport
//! - [`scroll`]: the scroll offset and the smooth-scroll glide
//! - [`console`]: the supplemental command panel
//!
//! [`Page`] composes the state cells and dispatches [`UiEvent`]s to them.
//! Nothing here touches a terminal; every transition is a synchronous
//! function of (current state, event), which is what makes the layer
//! testable without a rendering environment.

pub mod console;
pub mod gallery;
pub mod layout;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod ticker;
pub mod tracker;

pub use console::{Console, ConsoleEntry, ConsoleEntryKind};
pub use folio_content::RegionId;
pub use gallery::Gallery;
pub use layout::{Extent, PageGeometry};
pub use page::{Page, UiEvent};
pub use reveal::{Reveal, RevealState};
pub use scroll::Scroll;
pub use ticker::Ticker;
pub use tracker::ActiveTracker;
