//! Navigation controller.
//!
//! Wires the spliced header to the [`NavState`] machine: the hamburger
//! toggles the mobile menu, nav-link clicks and outside clicks close it, and
//! dropdown toggles expand accordion-style. Every event goes through
//! [`dispatch`], which renders class membership and ARIA attributes from the
//! new state in one pass.

use crate::context::PageContext;
use crate::dom;
use jincair_core::nav::{NavEvent, NavState};
use jincair_core::page;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::Element;

pub fn init(ctx: &Rc<PageContext>) {
    highlight_active_link(ctx);

    let state = Rc::new(RefCell::new(NavState::default()));
    render(ctx, &state.borrow());

    if let Some(hamburger) = ctx.hamburger() {
        let ctx = Rc::clone(ctx);
        let state = Rc::clone(&state);
        dom::listen(hamburger, "click", move |_| {
            dispatch(&ctx, &state, NavEvent::ToggleMenu);
        });
    }

    for link in ctx.nav_links() {
        let ctx = Rc::clone(ctx);
        let state = Rc::clone(&state);
        dom::listen(link, "click", move |_| {
            dispatch(&ctx, &state, NavEvent::CloseMenu);
        });
    }

    for toggle in ctx.dropdown_toggles() {
        let Some(id) = dropdown_id(toggle) else {
            continue;
        };
        let ctx = Rc::clone(ctx);
        let state = Rc::clone(&state);
        dom::listen(toggle, "click", move |event| {
            event.prevent_default();
            dispatch(&ctx, &state, NavEvent::ToggleDropdown(id.clone()));
        });
    }

    // Clicks that land outside the menu and the hamburger close the menu.
    {
        let document = ctx.document().clone();
        let ctx = Rc::clone(ctx);
        let state = Rc::clone(&state);
        dom::listen(&document, "click", move |event| {
            if !state.borrow().menu_open {
                return;
            }
            if let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            {
                let inside_menu = ctx
                    .nav_menu()
                    .is_some_and(|menu| menu.contains(Some(&target)));
                let inside_hamburger = ctx
                    .hamburger()
                    .is_some_and(|burger| burger.contains(Some(&target)));
                if inside_menu || inside_hamburger {
                    return;
                }
            }
            dispatch(&ctx, &state, NavEvent::OutsideClick);
        });
    }
}

fn dispatch(ctx: &PageContext, state: &Rc<RefCell<NavState>>, event: NavEvent) {
    let next = state.borrow().clone().apply(event);
    render(ctx, &next);
    *state.borrow_mut() = next;
}

/// Re-render class membership and ARIA attributes from the state.
fn render(ctx: &PageContext, state: &NavState) {
    let expanded = if state.menu_open { "true" } else { "false" };
    if let Some(hamburger) = ctx.hamburger() {
        let _ = hamburger
            .class_list()
            .toggle_with_force("active", state.menu_open);
        let _ = hamburger.set_attribute("aria-expanded", expanded);
    }
    if let Some(menu) = ctx.nav_menu() {
        let _ = menu.class_list().toggle_with_force("active", state.menu_open);
    }

    for toggle in ctx.dropdown_toggles() {
        let Some(id) = dropdown_id(toggle) else {
            continue;
        };
        let open = state.open_dropdown.as_deref() == Some(id.as_str());
        let _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
        if let Ok(Some(dropdown)) = toggle.closest(".dropdown") {
            let _ = dropdown.class_list().toggle_with_force("open", open);
        }
    }
}

fn dropdown_id(toggle: &Element) -> Option<String> {
    toggle.get_attribute("data-dropdown")
}

/// Mark the nav link pointing at the current page. On the product-detail
/// page the listing link is highlighted instead.
fn highlight_active_link(ctx: &PageContext) {
    let Ok(path) = dom::window().location().pathname() else {
        return;
    };
    for link in ctx.nav_links() {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        let _ = link
            .class_list()
            .toggle_with_force("active", page::is_link_active(&href, &path));
    }
}
