#![cfg(target_arch = "wasm32")]

use jincair_web::context::PageContext;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const HEADER: &str = r##"
    <button class="hamburger" aria-expanded="false"><span></span></button>
    <nav class="nav-menu">
        <a class="nav-link" href="#">首页</a>
        <div class="dropdown">
            <button class="dropdown-toggle" data-dropdown="products" aria-expanded="false">产品</button>
            <ul class="dropdown-list"></ul>
        </div>
        <div class="dropdown">
            <button class="dropdown-toggle" data-dropdown="support" aria-expanded="false">支持</button>
            <ul class="dropdown-list"></ul>
        </div>
    </nav>
    <main><p>content</p></main>"##;

fn mount() -> Rc<PageContext> {
    let document = jincair_web::dom::document();
    document.body().expect("body").set_inner_html(HEADER);
    let ctx = Rc::new(PageContext::capture(&document));
    jincair_web::nav::init(&ctx);
    ctx
}

fn click(el: &web_sys::Element) {
    el.dyn_ref::<web_sys::HtmlElement>()
        .expect("element is clickable")
        .click();
}

#[wasm_bindgen_test]
fn hamburger_toggles_menu_classes_and_aria() {
    let ctx = mount();
    let hamburger = ctx.hamburger().expect("hamburger").clone();

    hamburger.click();
    assert!(hamburger.class_list().contains("active"));
    assert!(ctx.nav_menu().unwrap().class_list().contains("active"));
    assert_eq!(hamburger.get_attribute("aria-expanded").unwrap(), "true");

    hamburger.click();
    assert!(!hamburger.class_list().contains("active"));
    assert!(!ctx.nav_menu().unwrap().class_list().contains("active"));
    assert_eq!(hamburger.get_attribute("aria-expanded").unwrap(), "false");
}

#[wasm_bindgen_test]
fn dropdowns_open_one_at_a_time() {
    let ctx = mount();
    let products = ctx.dropdown_toggles()[0].clone();
    let support = ctx.dropdown_toggles()[1].clone();

    click(&products);
    assert_eq!(products.get_attribute("aria-expanded").unwrap(), "true");
    let dropdown = products.closest(".dropdown").unwrap().unwrap();
    assert!(dropdown.class_list().contains("open"));

    click(&support);
    assert_eq!(products.get_attribute("aria-expanded").unwrap(), "false");
    assert_eq!(support.get_attribute("aria-expanded").unwrap(), "true");
    assert!(!dropdown.class_list().contains("open"));

    // Toggling the open dropdown closes it.
    click(&support);
    assert_eq!(support.get_attribute("aria-expanded").unwrap(), "false");
}

#[wasm_bindgen_test]
fn clicking_outside_closes_the_menu() {
    let ctx = mount();
    let hamburger = ctx.hamburger().expect("hamburger").clone();

    hamburger.click();
    assert!(ctx.nav_menu().unwrap().class_list().contains("active"));

    jincair_web::dom::document().body().expect("body").click();
    assert!(!ctx.nav_menu().unwrap().class_list().contains("active"));
    assert!(!hamburger.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn nav_link_click_closes_the_menu() {
    let ctx = mount();
    let hamburger = ctx.hamburger().expect("hamburger").clone();
    hamburger.click();
    assert!(ctx.nav_menu().unwrap().class_list().contains("active"));

    click(&ctx.nav_links()[0]);
    assert!(!ctx.nav_menu().unwrap().class_list().contains("active"));
}
