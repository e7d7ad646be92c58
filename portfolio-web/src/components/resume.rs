//! Resume download

use crate::services::save_text_file;
use crate::utils::constants::RESUME_FILENAME;
use crate::utils::content::RESUME_TEXT;

/// Hand the resume to the browser. Failures are logged; the page stays as is.
pub fn download_resume() {
    if let Err(err) = save_text_file(RESUME_TEXT, RESUME_FILENAME) {
        log::warn!("Resume download failed: {}", err);
    }
}
