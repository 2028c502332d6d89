//! Page identity and link matching.

use crate::category::Category;

/// Which enhancement profile a path gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// The product-detail template page; the hydrator runs here.
    ProductDetail,
    /// Every other page.
    Other,
}

#[must_use]
pub fn page_kind(path: &str) -> PageKind {
    if is_product_detail_path(path) {
        PageKind::ProductDetail
    } else {
        PageKind::Other
    }
}

#[must_use]
pub fn is_product_detail_path(path: &str) -> bool {
    matches!(file_name(path), "product-detail.html" | "product-detail")
}

/// Href of the listing page carrying a category selection, used when a filter
/// link is clicked outside the listing page.
#[must_use]
pub fn listing_href(category: &Category) -> String {
    format!(
        "products.html?category={}",
        urlencoding::encode(category.as_tag())
    )
}

/// Whether a nav link's href points at the current page.
///
/// Comparison is by trailing file name; the bare directory path counts as
/// `index.html`. On the product-detail page the listing link is treated as
/// current instead, so the products section stays highlighted while viewing
/// a single product.
#[must_use]
pub fn is_link_active(href: &str, current_path: &str) -> bool {
    let link = file_name(strip_query(href));
    if is_product_detail_path(current_path) {
        return link == "products.html";
    }
    let current = match file_name(current_path) {
        "" => "index.html",
        name => name,
    };
    link == current
}

fn strip_query(href: &str) -> &str {
    href.split(['?', '#']).next().unwrap_or(href)
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_page_is_recognized_by_file_name() {
        assert_eq!(page_kind("/product-detail.html"), PageKind::ProductDetail);
        assert_eq!(
            page_kind("/site/product-detail.html"),
            PageKind::ProductDetail
        );
        assert_eq!(page_kind("/products.html"), PageKind::Other);
        assert_eq!(page_kind("/"), PageKind::Other);
    }

    #[test]
    fn listing_href_encodes_the_tag() {
        assert_eq!(
            listing_href(&Category::from_tag("air purifier")),
            "products.html?category=air%20purifier"
        );
        assert_eq!(listing_href(&Category::All), "products.html?category=all");
    }

    #[test]
    fn link_matching_compares_file_names() {
        assert!(is_link_active("products.html", "/products.html"));
        assert!(is_link_active("/products.html?category=fan", "/products.html"));
        assert!(!is_link_active("about.html", "/products.html"));
    }

    #[test]
    fn root_path_counts_as_index() {
        assert!(is_link_active("index.html", "/"));
        assert!(is_link_active("index.html", "/site/"));
        assert!(!is_link_active("products.html", "/"));
    }

    #[test]
    fn detail_page_highlights_the_listing_link() {
        assert!(is_link_active("products.html", "/product-detail.html"));
        assert!(!is_link_active("index.html", "/product-detail.html"));
    }
}
