//! URL fragment helpers backing section deep links (`/#projects`).

use lib_core::model::Section;
use web_sys::window;

/// Section named by the current URL fragment, if any.
///
/// The fragment is percent-decoded first so `#%70rojects` still resolves.
pub fn section_from_location() -> Option<Section> {
    let hash = window()?.location().hash().ok()?;
    section_from_hash(&hash)
}

/// Parse a raw `location.hash` value.
pub fn section_from_hash(hash: &str) -> Option<Section> {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    if fragment.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(fragment)
        .map(|value| value.into_owned())
        .unwrap_or_else(|_| fragment.to_string());
    Section::from_fragment(&decoded)
}

/// Mirror `section` into the URL fragment. Failures only cost the deep link.
pub fn write_section_to_location(section: Section) {
    let Some(window) = window() else {
        return;
    };
    let location = window.location();
    if location.hash().ok().as_deref() == Some(section.href().as_str()) {
        return;
    }
    if let Err(err) = location.set_hash(section.id()) {
        log::warn!("Failed to update URL fragment: {:?}", err);
    }
}
