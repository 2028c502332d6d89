use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, EventTarget, Response, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Collect every element matching `selector`.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach a page-lifetime event listener.
///
/// The closure is leaked on purpose: every listener this site installs lives
/// until the page is torn down by the browser.
pub fn listen<T, F>(target: &T, event: &str, handler: F)
where
    T: AsRef<EventTarget>,
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(err) = target
        .as_ref()
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!(
            "failed to attach {event} listener: {}",
            js_error_message(&err)
        );
    }
    closure.forget();
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch request fails or the response cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let resp_value = JsFuture::from(window().fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Read a response body as text.
///
/// # Errors
/// Returns an error if the body stream fails or is not valid UTF-8.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn response_text(response: &Response) -> Result<String, JsValue> {
    let text = JsFuture::from(response.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body was not a string"))
}
