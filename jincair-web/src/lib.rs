#![forbid(unsafe_code)]
//! Browser enhancement layer for the JincAir marketing site.
//!
//! The pages themselves are static HTML; this crate progressively enhances
//! them: it splices the shared header/footer fragments, wires the navigation
//! and category-filter state machines to the DOM, hydrates the product-detail
//! template from the catalog document, and attaches the small page widgets.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod contact;
pub mod context;
pub mod dom;
pub mod filter;
pub mod layout;
pub mod nav;
pub mod paths;
pub mod product;
pub mod widgets;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    wasm_bindgen_futures::spawn_local(app::boot());
}
