//! Object-URL lifecycle for staged image previews.
//!
//! The browser holds the blob alive as long as its object URL exists, so
//! every created URL must be revoked when the image is replaced or removed.
//! State transitions return stale URLs; the orchestrator funnels them here.

/// Create a displayable object URL for the staged file.
///
/// Degrades to an empty string if the browser refuses; the preview `<img>`
/// simply renders nothing in that case.
#[must_use]
pub fn create_preview_url(file: &web_sys::File) -> String {
    web_sys::Url::create_object_url_with_blob(file).unwrap_or_default()
}

/// Release a preview URL. Empty strings (a failed create) are ignored.
pub fn revoke_preview_url(url: &str) {
    if url.is_empty() {
        return;
    }
    let _ = web_sys::Url::revoke_object_url(url);
}
