//! WhatsApp floating action button.

use crate::paths;
use web_sys::Document;

const CHAT_URL: &str = "https://wa.me/8613800000000";

pub fn install(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    let Ok(button) = document.create_element("a") else {
        return;
    };
    let _ = button.set_attribute("href", CHAT_URL);
    let _ = button.set_attribute("target", "_blank");
    let _ = button.set_attribute("rel", "noopener");
    let _ = button.set_attribute("aria-label", "通过 WhatsApp 联系我们");
    let _ = button.class_list().add_1("whatsapp-float");
    button.set_inner_html(&format!(
        "<img src=\"{}\" alt=\"WhatsApp\">",
        paths::asset_path("images/whatsapp_icon.png")
    ));
    let _ = body.append_child(&button);
}
