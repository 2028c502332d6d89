//! Back-to-top button.
//!
//! Created dynamically on every page: shows itself past a scroll threshold
//! and, on click, animates the viewport back to the top with an
//! ease-in-out-cubic curve over `requestAnimationFrame` ticks. The easing
//! math lives in [`jincair_core::scroll`].

use crate::{dom, paths};
use jincair_core::scroll;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

pub fn install(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    let Ok(button) = document.create_element("a") else {
        return;
    };
    let _ = button.set_attribute("href", "#");
    let _ = button.set_attribute("aria-label", "返回顶部");
    let _ = button.class_list().add_1("back-to-top");
    button.set_inner_html(&format!(
        "<img src=\"{}\" alt=\"返回顶部\">",
        paths::asset_path("images/back-top_icon.png")
    ));
    if body.append_child(&button).is_err() {
        return;
    }

    {
        let button = button.clone();
        dom::listen(&dom::window(), "scroll", move |_| {
            let shown = dom::window().scroll_y().unwrap_or(0.0) > scroll::SHOW_THRESHOLD_PX;
            let _ = button.class_list().toggle_with_force("show", shown);
        });
    }

    dom::listen(&button, "click", move |event| {
        event.prevent_default();
        animate_to_top(scroll::SCROLL_DURATION_MS);
    });
}

/// Drive the scroll position frame by frame until the duration elapses.
fn animate_to_top(duration_ms: f64) {
    let start_y = dom::window().scroll_y().unwrap_or(0.0);
    if start_y <= 0.0 {
        return;
    }

    // Self-referential rAF loop; the closure drops itself on the last frame.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let start_time: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));

    let frame_handle = Rc::clone(&frame);
    let closure = Closure::wrap(Box::new(move |now: f64| {
        let started = start_time.get().unwrap_or_else(|| {
            start_time.set(Some(now));
            now
        });
        let elapsed = now - started;

        let window = dom::window();
        window.scroll_to_with_x_and_y(0.0, scroll::position_at(start_y, elapsed, duration_ms));

        if scroll::is_finished(elapsed, duration_ms) {
            frame_handle.borrow_mut().take();
        } else {
            request_next(&frame_handle);
        }
    }) as Box<dyn FnMut(f64)>);

    *frame.borrow_mut() = Some(closure);
    request_next(&frame);
}

fn request_next(frame: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    if let Some(closure) = frame.borrow().as_ref() {
        if let Err(err) = dom::window().request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!(
                "failed to schedule scroll animation frame: {}",
                dom::js_error_message(&err)
            );
        }
    }
}
