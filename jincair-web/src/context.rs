//! Typed references to the page's enhancement targets.
//!
//! Queried once, after the layout fragments are spliced in, instead of
//! re-querying the document from every handler. Controllers receive the
//! context and operate only on what it captured.

use crate::dom;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

pub struct PageContext {
    document: Document,
    hamburger: Option<HtmlElement>,
    nav_menu: Option<Element>,
    nav_links: Vec<Element>,
    dropdown_toggles: Vec<Element>,
    filter_links: Vec<Element>,
    product_cards: Vec<Element>,
    product_grid: Option<Element>,
    detail_region: Option<Element>,
    contact_form: Option<HtmlFormElement>,
    form_status: Option<HtmlElement>,
}

impl PageContext {
    #[must_use]
    pub fn capture(document: &Document) -> Self {
        Self {
            document: document.clone(),
            hamburger: first_as(document, ".hamburger"),
            nav_menu: document.query_selector(".nav-menu").ok().flatten(),
            nav_links: dom::query_all(document, ".nav-link"),
            dropdown_toggles: dom::query_all(document, ".dropdown-toggle"),
            filter_links: dom::query_all(document, ".filter-link"),
            product_cards: dom::query_all(document, ".product-card"),
            product_grid: document.get_element_by_id("product-grid"),
            detail_region: document.get_element_by_id("product-detail-content"),
            contact_form: document
                .get_element_by_id("contact-form")
                .and_then(|el| el.dyn_into::<HtmlFormElement>().ok()),
            form_status: document
                .get_element_by_id("form-status")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn hamburger(&self) -> Option<&HtmlElement> {
        self.hamburger.as_ref()
    }

    #[must_use]
    pub fn nav_menu(&self) -> Option<&Element> {
        self.nav_menu.as_ref()
    }

    #[must_use]
    pub fn nav_links(&self) -> &[Element] {
        &self.nav_links
    }

    #[must_use]
    pub fn dropdown_toggles(&self) -> &[Element] {
        &self.dropdown_toggles
    }

    #[must_use]
    pub fn filter_links(&self) -> &[Element] {
        &self.filter_links
    }

    #[must_use]
    pub fn product_cards(&self) -> &[Element] {
        &self.product_cards
    }

    /// The listing-page marker. Filter clicks only synchronize in place when
    /// this element exists; elsewhere they navigate to the listing.
    #[must_use]
    pub fn is_listing_page(&self) -> bool {
        self.product_grid.is_some()
    }

    #[must_use]
    pub fn detail_region(&self) -> Option<&Element> {
        self.detail_region.as_ref()
    }

    #[must_use]
    pub fn contact_form(&self) -> Option<&HtmlFormElement> {
        self.contact_form.as_ref()
    }

    #[must_use]
    pub fn form_status(&self) -> Option<&HtmlElement> {
        self.form_status.as_ref()
    }
}

fn first_as<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}
