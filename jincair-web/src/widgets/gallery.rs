//! Image-gallery horizontal scroller.
//!
//! Each `.gallery` container holds a `.gallery-track` strip and optional
//! arrow buttons; a click scrolls the strip by most of its visible width.

use crate::dom;
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions};

const STEP_FRACTION: f64 = 0.8;

pub fn install(document: &Document) {
    for gallery in dom::query_all(document, ".gallery") {
        let Ok(Some(track)) = gallery.query_selector(".gallery-track") else {
            continue;
        };
        for (selector, direction) in [(".gallery-arrow--left", -1.0), (".gallery-arrow--right", 1.0)]
        {
            if let Ok(Some(arrow)) = gallery.query_selector(selector) {
                let track = track.clone();
                dom::listen(&arrow, "click", move |_| scroll_step(&track, direction));
            }
        }
    }
}

fn scroll_step(track: &Element, direction: f64) {
    let step = f64::from(track.client_width()) * STEP_FRACTION * direction;
    let options = ScrollToOptions::new();
    options.set_left(step);
    options.set_behavior(ScrollBehavior::Smooth);
    track.scroll_by_with_scroll_to_options(&options);
}
