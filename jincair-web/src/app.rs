//! Page boot sequence.

use crate::context::PageContext;
use crate::{contact, dom, filter, layout, nav, product, widgets};
use std::rc::Rc;

/// Enhance the current page.
///
/// The header fragment is fully spliced before anything queries the DOM, so
/// the navigation and filter controllers see the final markup. Hydration is
/// spawned rather than awaited: it only applies to the product-detail page
/// and the widgets do not depend on it.
#[allow(clippy::future_not_send)]
pub async fn boot() {
    layout::load_layout().await;

    let document = dom::document();
    let ctx = Rc::new(PageContext::capture(&document));

    nav::init(&ctx);
    filter::init(&ctx);
    wasm_bindgen_futures::spawn_local(product::hydrate(Rc::clone(&ctx)));
    widgets::install(&document);
    contact::init(&ctx);
}
