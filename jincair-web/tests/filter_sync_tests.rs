#![cfg(target_arch = "wasm32")]

use jincair_core::category::Category;
use jincair_core::filter::{FilterEvent, transition};
use jincair_web::context::PageContext;
use jincair_web::filter::apply_selection;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const LISTING: &str = r#"
    <nav class="nav-menu">
        <a class="nav-link filter-link" data-category="all" href="products.html">全部</a>
        <a class="nav-link filter-link" data-category="purifier" href="products.html">净化器</a>
        <a class="nav-link filter-link" data-category="fan" href="products.html">风扇</a>
    </nav>
    <div id="product-grid">
        <div class="product-card" data-category="purifier"></div>
        <div class="product-card" data-category="purifier"></div>
        <div class="product-card" data-category="fan"></div>
    </div>"#;

fn mount(html: &str) -> PageContext {
    let document = jincair_web::dom::document();
    document.body().expect("body").set_inner_html(html);
    PageContext::capture(&document)
}

fn visible_card_tags(ctx: &PageContext) -> Vec<String> {
    ctx.product_cards()
        .iter()
        .filter(|card| !card.class_list().contains("hide"))
        .map(|card| card.get_attribute("data-category").unwrap_or_default())
        .collect()
}

fn active_link_tags(ctx: &PageContext) -> Vec<String> {
    ctx.filter_links()
        .iter()
        .filter(|link| link.class_list().contains("active-filter"))
        .map(|link| link.get_attribute("data-category").unwrap_or_default())
        .collect()
}

#[wasm_bindgen_test]
fn selecting_a_category_shows_only_matching_cards() {
    let ctx = mount(LISTING);
    apply_selection(&ctx, &Category::from_tag("purifier"));
    assert_eq!(visible_card_tags(&ctx), vec!["purifier", "purifier"]);
    assert_eq!(active_link_tags(&ctx), vec!["purifier"]);
}

#[wasm_bindgen_test]
fn selecting_all_shows_every_card() {
    let ctx = mount(LISTING);
    apply_selection(&ctx, &Category::from_tag("fan"));
    apply_selection(&ctx, &Category::All);
    assert_eq!(visible_card_tags(&ctx).len(), 3);
    assert_eq!(active_link_tags(&ctx), vec!["all"]);
}

#[wasm_bindgen_test]
fn applying_a_selection_twice_is_idempotent() {
    let ctx = mount(LISTING);
    let body = jincair_web::dom::document().body().expect("body");

    apply_selection(&ctx, &Category::from_tag("fan"));
    let first_pass = body.inner_html();
    apply_selection(&ctx, &Category::from_tag("fan"));
    assert_eq!(body.inner_html(), first_pass);
}

#[wasm_bindgen_test]
fn popstate_replay_restores_the_previous_rendering() {
    let ctx = mount(LISTING);
    let body = jincair_web::dom::document().body().expect("body");

    let click = transition(FilterEvent::Click(Category::from_tag("purifier")));
    assert!(click.push_history);
    apply_selection(&ctx, &click.selected);
    let before = body.inner_html();

    let next = transition(FilterEvent::Click(Category::from_tag("fan")));
    apply_selection(&ctx, &next.selected);
    assert_ne!(body.inner_html(), before);

    // Back-navigation lands on the earlier URL; replaying it must restore
    // the exact rendering without pushing a new entry.
    let back = transition(FilterEvent::PopState(Some(Category::from_tag("purifier"))));
    assert!(!back.push_history);
    apply_selection(&ctx, &back.selected);
    assert_eq!(body.inner_html(), before);
}

#[wasm_bindgen_test]
fn pages_without_cards_are_left_untouched() {
    let ctx = mount(r#"<main><p>关于我们</p></main>"#);
    apply_selection(&ctx, &Category::from_tag("purifier"));
    assert!(ctx.product_cards().is_empty());
    assert!(ctx.filter_links().is_empty());
    assert!(!ctx.is_listing_page());
}

#[wasm_bindgen_test]
fn cards_without_a_tag_only_show_under_all() {
    let ctx = mount(
        r#"<div id="product-grid">
            <div class="product-card"></div>
            <div class="product-card" data-category="fan"></div>
        </div>"#,
    );
    apply_selection(&ctx, &Category::from_tag("fan"));
    assert_eq!(visible_card_tags(&ctx), vec!["fan"]);
    apply_selection(&ctx, &Category::All);
    assert_eq!(visible_card_tags(&ctx).len(), 2);
}
