#![cfg(target_arch = "wasm32")]

use jincair_web::layout::splice;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn fragment_replaces_the_placeholder() {
    let document = jincair_web::dom::document();
    let body = document.body().expect("body");
    body.set_inner_html(r#"<div id="header-placeholder"></div><main></main>"#);

    splice(
        &document,
        "header-placeholder",
        r#"<header class="site-header"><nav class="nav-menu"></nav></header>"#,
    );

    assert!(document.get_element_by_id("header-placeholder").is_none());
    assert!(
        document
            .query_selector("header.site-header .nav-menu")
            .unwrap()
            .is_some()
    );
}

#[wasm_bindgen_test]
fn pages_without_a_placeholder_are_untouched() {
    let document = jincair_web::dom::document();
    let body = document.body().expect("body");
    body.set_inner_html("<main><p>standalone</p></main>");
    let before = body.inner_html();

    splice(&document, "header-placeholder", "<header></header>");

    assert_eq!(body.inner_html(), before);
}
