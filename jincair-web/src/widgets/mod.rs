//! Small standalone page widgets.

pub mod back_to_top;
pub mod gallery;
pub mod whatsapp;

use web_sys::Document;

pub fn install(document: &Document) {
    back_to_top::install(document);
    whatsapp::install(document);
    gallery::install(document);
}
