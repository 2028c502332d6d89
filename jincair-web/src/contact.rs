//! Contact form submission.
//!
//! Posts the form's field-set to the third-party endpoint and drives the
//! inline status line through [`SubmitStatus`]. The form is only cleared
//! after a confirmed success; failures leave it intact for resubmission.

use crate::context::PageContext;
use crate::dom;
use jincair_core::contact::SubmitStatus;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, HtmlElement, HtmlFormElement, RequestInit, Response};

const FORM_ENDPOINT: &str = "https://formsubmit.co/contact@jincair.com";

pub fn init(ctx: &Rc<PageContext>) {
    let Some(form) = ctx.contact_form() else {
        return;
    };
    let form = form.clone();
    let status = ctx.form_status().cloned();

    dom::listen(&form.clone(), "submit", move |event| {
        event.prevent_default();
        show_status(status.as_ref(), SubmitStatus::Sending);

        let form = form.clone();
        let status = status.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = submit(&form).await;
            finish_submission(&form, status.as_ref(), outcome);
        });
    });
}

/// Apply one submission outcome: clear the form only on a confirmed
/// success, then write the status line.
pub fn finish_submission(
    form: &HtmlFormElement,
    status: Option<&HtmlElement>,
    outcome: SubmitStatus,
) {
    if outcome.clears_form() {
        form.reset();
    }
    show_status(status, outcome);
}

#[allow(clippy::future_not_send)]
async fn submit(form: &HtmlFormElement) -> SubmitStatus {
    let Ok(data) = FormData::new_with_form(form) else {
        return SubmitStatus::NetworkError;
    };
    match post(&data).await {
        Ok(true) => SubmitStatus::Success,
        Ok(false) => SubmitStatus::Failure,
        Err(err) => {
            log::error!(
                "contact form submission failed: {}",
                dom::js_error_message(&err)
            );
            SubmitStatus::NetworkError
        }
    }
}

#[allow(clippy::future_not_send)]
async fn post(data: &FormData) -> Result<bool, JsValue> {
    let headers = Headers::new()?;
    headers.append("Accept", "application/json")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(data.as_ref());
    init.set_headers(headers.as_ref());

    let response = JsFuture::from(dom::window().fetch_with_str_and_init(FORM_ENDPOINT, &init))
        .await?
        .dyn_into::<Response>()?;
    Ok(response.ok())
}

/// Write the status line for an outcome. Pages without the status element
/// skip the message.
pub fn show_status(status: Option<&HtmlElement>, outcome: SubmitStatus) {
    let Some(line) = status else {
        return;
    };
    line.set_text_content(Some(outcome.message()));
    let _ = line.style().set_property("color", outcome.color());
}
