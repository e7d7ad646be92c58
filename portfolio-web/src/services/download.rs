//! Client-side file download via a temporary object URL.

use js_sys::Array;
use lib_core::error::{AppError, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::effects::js_error;
use crate::utils::constants::TEXT_FILE_MIME_TYPE;

/// Offer `contents` to the user as a `text/plain` file named `filename`.
///
/// Builds a `Blob`, clicks a detached `<a download>` pointing at it and
/// revokes the object URL afterwards.
pub fn save_text_file(contents: &str, filename: &str) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Dom("no document".to_string()))?;

    let parts = Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(TEXT_FILE_MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| AppError::Dom("created node is not an anchor".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| AppError::Dom("document has no body".to_string()))?;
    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    anchor.remove();

    Url::revoke_object_url(&url).map_err(js_error)?;
    log::info!("Downloaded {}", filename);
    Ok(())
}
