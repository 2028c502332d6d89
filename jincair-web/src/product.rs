//! Product detail hydrator.
//!
//! On the product-detail page, fetches the catalog document, looks up the
//! record named by the `id` query parameter, and populates the fixed template
//! slots. Every failure path is terminal and user-visible: the main content
//! region is replaced by an error block, with no retry and no partial render.

use crate::context::PageContext;
use crate::{dom, paths};
use jincair_core::catalog::{Catalog, CatalogError, ProductRecord};
use jincair_core::page::{self, PageKind};
use jincair_core::query;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

#[derive(Debug, Error)]
enum HydrateError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Run the hydration pass. A no-op on every page except the product-detail
/// template.
#[allow(clippy::future_not_send)]
pub async fn hydrate(ctx: Rc<PageContext>) {
    let location = dom::window().location();
    let path = location.pathname().unwrap_or_default();
    if page::page_kind(&path) != PageKind::ProductDetail {
        return;
    }

    let search = location.search().unwrap_or_default();
    let Some(id) = query::query_param(&search, "id") else {
        render_error(&ctx, "未找到产品信息，请返回产品列表。");
        return;
    };

    match load_product(&id).await {
        Ok(record) => render_record(ctx.document(), &record),
        Err(err) => {
            log::error!("product hydration failed for id '{id}': {err}");
            render_error(&ctx, &user_message(&err));
        }
    }
}

#[allow(clippy::future_not_send)]
async fn load_product(id: &str) -> Result<ProductRecord, HydrateError> {
    let catalog = load_catalog().await?;
    Ok(catalog.get(id)?.clone())
}

#[allow(clippy::future_not_send)]
async fn load_catalog() -> Result<Catalog, HydrateError> {
    let url = paths::asset_path("products.json");
    let response = dom::fetch_response(&url)
        .await
        .map_err(|err| HydrateError::Request(dom::js_error_message(&err)))?;

    if !response.ok() {
        return Err(HydrateError::Http {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let text = dom::response_text(&response)
        .await
        .map_err(|err| HydrateError::Request(dom::js_error_message(&err)))?;

    Ok(Catalog::parse(&text)?)
}

fn user_message(err: &HydrateError) -> String {
    match err {
        HydrateError::Catalog(CatalogError::UnknownProduct(id)) => {
            format!("未找到编号为 {id} 的产品。")
        }
        _ => "产品信息加载失败，请稍后再试。".to_string(),
    }
}

/// Populate the template slots from one record. Slots are independent; a
/// missing element skips that slot and nothing else.
pub fn render_record(document: &Document, record: &ProductRecord) {
    document.set_title(&record.document_title());

    if let Ok(Some(meta)) = document.query_selector("meta[name='description']") {
        let _ = meta.set_attribute("content", record.meta_description_text());
    }
    if let Some(banner) = image_slot(document, "product-banner") {
        banner.set_src(&record.banner_image);
        banner.set_alt(&record.name);
    }
    if let Some(image) = image_slot(document, "product-image") {
        image.set_src(&record.image);
        image.set_alt(&record.name);
    }
    if let Some(title) = document.get_element_by_id("product-title") {
        title.set_text_content(Some(&record.name));
    }
    if let Some(description) = document.get_element_by_id("product-description") {
        description.set_text_content(Some(&record.description));
    }
    render_specs(document, record);
    if let Some(price) = document.get_element_by_id("product-price") {
        // Trusted same-origin catalog markup, injected verbatim.
        price.set_inner_html(&record.price_html);
    }
}

/// Rebuild the specification table from scratch: clear it, then append one
/// row per pair in catalog order. Duplicate labels become separate rows.
fn render_specs(document: &Document, record: &ProductRecord) {
    let Some(table) = document.get_element_by_id("product-specs") else {
        return;
    };
    table.set_inner_html("");
    for (label, value) in record.specs.rows() {
        let Ok(row) = document.create_element("tr") else {
            continue;
        };
        let Ok(header) = document.create_element("th") else {
            continue;
        };
        let _ = header.set_attribute("scope", "row");
        header.set_text_content(Some(label));
        let Ok(cell) = document.create_element("td") else {
            continue;
        };
        cell.set_text_content(Some(value));
        let _ = row.append_child(&header);
        let _ = row.append_child(&cell);
        let _ = table.append_child(&row);
    }
}

/// Replace the main content region with a terminal error block.
///
/// The message can embed the `id` query parameter, which is user input from
/// the URL, so the block is assembled node by node and the message assigned
/// as text content. Only `priceHTML` is ever injected as markup.
pub fn render_error(ctx: &PageContext, message: &str) {
    let Some(region) = ctx.detail_region() else {
        log::error!("product detail region missing; cannot show: {message}");
        return;
    };
    let document = ctx.document();
    let Ok(block) = document.create_element("div") else {
        return;
    };
    let _ = block.class_list().add_1("error-message");
    let Ok(paragraph) = document.create_element("p") else {
        return;
    };
    paragraph.set_text_content(Some(message));
    let _ = block.append_child(&paragraph);
    region.set_inner_html("");
    let _ = region.append_child(&block);
}

fn image_slot(document: &Document, id: &str) -> Option<HtmlImageElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
}
