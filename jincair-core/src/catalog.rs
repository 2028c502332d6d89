//! Product catalog document.
//!
//! The catalog is a JSON object mapping product ids to records. It is fetched
//! fresh on every product-detail page view and never mutated.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("product '{0}' not found in the catalog")]
    UnknownProduct(String),
}

/// Ordered specification rows for one product.
///
/// The JSON source is an object, but insertion order matters for rendering
/// and duplicate keys are legitimate (they become separate table rows), so
/// the rows are kept as a list rather than a map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecList(Vec<(String, String)>);

impl SpecList {
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for SpecList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = SpecList;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of specification labels to values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut rows = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    rows.push((key, value));
                }
                Ok(SpecList(rows))
            }
        }

        deserializer.deserialize_map(SpecVisitor)
    }
}

/// One catalog entry. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "bannerImage", default)]
    pub banner_image: String,
    #[serde(default)]
    pub specs: SpecList,
    /// Pre-formatted price markup, injected verbatim. Trusted same-origin
    /// catalog content, not user input.
    #[serde(rename = "priceHTML", default)]
    pub price_html: String,
    #[serde(rename = "titleTag", default)]
    pub title_tag: Option<String>,
    #[serde(rename = "metaDescription", default)]
    pub meta_description: Option<String>,
}

impl ProductRecord {
    /// Document title: the explicit override, else one built from the name.
    #[must_use]
    pub fn document_title(&self) -> String {
        self.title_tag
            .clone()
            .unwrap_or_else(|| format!("{} - JincAir", self.name))
    }

    /// Meta description: the explicit override, else the plain description.
    #[must_use]
    pub fn meta_description_text(&self) -> &str {
        self.meta_description.as_deref().unwrap_or(&self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Catalog(HashMap<String, ProductRecord>);

impl Catalog {
    /// Parse the catalog document.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] when the document is not a valid
    /// catalog object.
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up one product by id.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownProduct`] when the id has no entry.
    pub fn get(&self, id: &str) -> Result<&ProductRecord, CatalogError> {
        self.0
            .get(id)
            .ok_or_else(|| CatalogError::UnknownProduct(id.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
