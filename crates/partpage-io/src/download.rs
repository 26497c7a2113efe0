//! Save generated text to the user's disk.
//!
//! The browser has no "save file" call, so a download is a `Blob` turned
//! into an object URL and handed to a temporary `<a download>` element
//! that is clicked and removed again.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Content type with an explicit UTF-8 charset.
///
/// Pages and settings files carry Arabic text; without a charset some
/// browsers save them in a legacy encoding.
fn utf8_content_type(mime_type: &str) -> String {
    format!("{mime_type};charset=utf-8")
}

/// An object URL that is revoked when dropped.
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_text(data: &str, mime_type: &str) -> Result<Self, DownloadError> {
        let parts = js_sys::Array::of1(&JsValue::from_str(data));
        let opts = BlobPropertyBag::new();
        opts.set_type(&utf8_content_type(mime_type));
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts)?;
        Ok(Self(web_sys::Url::create_object_url_with_blob(&blob)?))
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = web_sys::Url::revoke_object_url(&self.0);
    }
}

/// Click a detached `<a href download>` once it is in the document.
fn click_anchor(href: &str, filename: &str) -> Result<(), DownloadError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;
    anchor.set_href(href);
    anchor.set_download(filename);

    body.append_child(&anchor)?;
    anchor.click();
    // The download has started; a leftover anchor is harmless.
    let _ = body.remove_child(&anchor);
    Ok(())
}

/// Offer `data` to the user as a file named `filename`.
///
/// The content type is `mime_type` with a UTF-8 charset appended.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if any browser API call fails
/// (e.g., `Blob` creation, `URL.createObjectURL`, element creation).
pub fn trigger_download(data: &str, filename: &str, mime_type: &str) -> Result<(), DownloadError> {
    let url = ObjectUrl::for_text(data, mime_type)?;
    click_anchor(&url.0, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_names_utf8() {
        assert_eq!(utf8_content_type("text/html"), "text/html;charset=utf-8");
        assert_eq!(
            utf8_content_type("application/json"),
            "application/json;charset=utf-8"
        );
    }
}
