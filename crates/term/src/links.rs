//! External link opening.
//!
//! Fire-and-forget: the system opener either takes the URL or it doesn't;
//! failures are logged and never surface in the UI.

use tracing::{debug, warn};

pub fn open_url(url: &str) {
	debug!(url, "link.open");
	if let Err(error) = open::that(url) {
		warn!(%error, url, "link.open_failed");
	}
}

/// Opens the bundled résumé document under its fixed filename.
pub fn open_resume() {
	debug!(file = folio_content::RESUME_FILENAME, "resume.open");
	if let Err(error) = open::that(folio_content::RESUME_PATH) {
		warn!(%error, "resume.open_failed");
	}
}
