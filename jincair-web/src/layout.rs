//! Shared layout fragments.
//!
//! Every page carries `#header-placeholder` and `#footer-placeholder`
//! elements; the real markup is fetched once per page view and spliced in
//! over them. The header must be in place before navigation initialization
//! queries the DOM, which `load_layout` enforces with sequential awaits.

use crate::{dom, paths};
use thiserror::Error;
use web_sys::Document;

#[derive(Debug, Error)]
enum FragmentError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
}

/// Splice the header, then the footer. A failed fragment is logged and
/// skipped; the page keeps working without it.
#[allow(clippy::future_not_send)]
pub async fn load_layout() {
    load_fragment(
        &paths::asset_path("includes/header.html"),
        "header-placeholder",
    )
    .await;
    load_fragment(
        &paths::asset_path("includes/footer.html"),
        "footer-placeholder",
    )
    .await;
}

#[allow(clippy::future_not_send)]
async fn load_fragment(url: &str, placeholder_id: &str) {
    match fetch_fragment(url).await {
        Ok(markup) => splice(&dom::document(), placeholder_id, &markup),
        Err(err) => log::error!("failed to load fragment {url}: {err}"),
    }
}

#[allow(clippy::future_not_send)]
async fn fetch_fragment(url: &str) -> Result<String, FragmentError> {
    let response = dom::fetch_response(url)
        .await
        .map_err(|err| FragmentError::Request(dom::js_error_message(&err)))?;

    if !response.ok() {
        return Err(FragmentError::Http {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    dom::response_text(&response)
        .await
        .map_err(|err| FragmentError::Request(dom::js_error_message(&err)))
}

/// Replace the placeholder element with the fragment markup. Pages without
/// the placeholder are left untouched.
pub fn splice(document: &Document, placeholder_id: &str, markup: &str) {
    if let Some(placeholder) = document.get_element_by_id(placeholder_id) {
        placeholder.set_outer_html(markup);
    }
}
