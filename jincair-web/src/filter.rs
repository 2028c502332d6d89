//! Filter state synchronizer.
//!
//! Keeps the selected category consistent across filter-link clicks, the URL
//! query string, and browser back/forward navigation. Event interpretation
//! lives in [`jincair_core::filter::transition`]; this module feeds it the
//! three event sources and renders each resulting selection.

use crate::context::PageContext;
use crate::dom;
use jincair_core::category::Category;
use jincair_core::filter::{FilterEvent, transition};
use jincair_core::{page, query};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlAnchorElement};

pub fn init(ctx: &Rc<PageContext>) {
    let effect = transition(FilterEvent::InitialLoad {
        query: category_param(),
        markup_active: markup_active_category(ctx),
    });
    apply_selection(ctx, &effect.selected);

    for link in ctx.filter_links() {
        let ctx = Rc::clone(ctx);
        let link = link.clone();
        dom::listen(&link.clone(), "click", move |event| {
            on_link_click(&ctx, &link, &event);
        });
    }

    let ctx = Rc::clone(ctx);
    dom::listen(&dom::window(), "popstate", move |_| {
        let effect = transition(FilterEvent::PopState(category_param()));
        apply_selection(&ctx, &effect.selected);
    });
}

fn on_link_click(ctx: &PageContext, link: &Element, event: &web_sys::Event) {
    let Some(tag) = link.get_attribute("data-category") else {
        return;
    };
    let selected = Category::from_tag(&tag);

    if !ctx.is_listing_page() {
        // Global-navigation filter link on a page without cards: let the
        // browser navigate to the listing, carrying the category along.
        if let Some(anchor) = link.dyn_ref::<HtmlAnchorElement>() {
            anchor.set_href(&page::listing_href(&selected));
        }
        return;
    }

    event.prevent_default();
    let effect = transition(FilterEvent::Click(selected));
    if effect.push_history {
        push_category(&effect.selected);
    }
    apply_selection(ctx, &effect.selected);
}

/// Render a selection: exactly the equal-tagged links are active, and a card
/// is visible iff its tag matches or the selection is `all`. Idempotent, and
/// a no-op on pages without links or cards.
pub fn apply_selection(ctx: &PageContext, selected: &Category) {
    for link in ctx.filter_links() {
        let Some(tag) = link.get_attribute("data-category") else {
            continue;
        };
        let _ = link
            .class_list()
            .toggle_with_force("active-filter", selected.activates_link(&tag));
    }
    for card in ctx.product_cards() {
        let tag = card.get_attribute("data-category").unwrap_or_default();
        let _ = card
            .class_list()
            .toggle_with_force("hide", !selected.shows_card(&tag));
    }
}

fn markup_active_category(ctx: &PageContext) -> Option<Category> {
    ctx.filter_links()
        .iter()
        .find(|link| link.class_list().contains("active-filter"))
        .and_then(|link| link.get_attribute("data-category"))
        .map(|tag| Category::from_tag(&tag))
}

fn category_param() -> Option<Category> {
    let search = dom::window().location().search().ok()?;
    query::query_param(&search, "category").map(|tag| Category::from_tag(&tag))
}

fn push_category(selected: &Category) {
    let url = format!("?category={}", urlencoding::encode(selected.as_tag()));
    match dom::window().history() {
        Ok(history) => {
            if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(&url)) {
                log::error!(
                    "failed to push filter history entry: {}",
                    dom::js_error_message(&err)
                );
            }
        }
        Err(err) => log::error!(
            "browser history unavailable: {}",
            dom::js_error_message(&err)
        ),
    }
}
