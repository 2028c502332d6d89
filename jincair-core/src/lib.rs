#![forbid(unsafe_code)]
//! JincAir Site Core
//!
//! Platform-agnostic state machines and catalog model for the JincAir
//! marketing site. This crate holds everything the browser layer needs that
//! does not touch the DOM: category filtering, navigation state transitions,
//! the product catalog document, query-string access, scroll easing, and the
//! contact-form status lifecycle.

pub mod catalog;
pub mod category;
pub mod contact;
pub mod filter;
pub mod nav;
pub mod page;
pub mod query;
pub mod scroll;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, ProductRecord, SpecList};
pub use category::Category;
pub use contact::SubmitStatus;
pub use filter::{FilterEffect, FilterEvent, transition};
pub use nav::{NavEvent, NavState};
pub use page::PageKind;
