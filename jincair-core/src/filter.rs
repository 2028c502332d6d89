//! Filter-state transitions.
//!
//! Three event sources drive the selected category: clicks on filter links,
//! browser back/forward, and the initial page load. Every source funnels
//! through [`transition`], which decides the authoritative selection and
//! whether a history entry must be pushed. The browser layer then renders the
//! resulting selection in a single apply pass.

use crate::category::Category;

/// One input event for the filter synchronizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// A filter link was clicked on the listing page.
    Click(Category),
    /// Back/forward navigation landed on a URL carrying this category.
    PopState(Option<Category>),
    /// First application after page load.
    InitialLoad {
        /// `category` query parameter, if present.
        query: Option<Category>,
        /// Category of the link marked active in the static markup.
        markup_active: Option<Category>,
    },
}

/// What the browser layer must do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEffect {
    pub selected: Category,
    /// Only link clicks create a new history entry; popstate and the initial
    /// load replay an existing one.
    pub push_history: bool,
}

#[must_use]
pub fn transition(event: FilterEvent) -> FilterEffect {
    match event {
        FilterEvent::Click(selected) => FilterEffect {
            selected,
            push_history: true,
        },
        FilterEvent::PopState(category) => FilterEffect {
            selected: category.unwrap_or(Category::All),
            push_history: false,
        },
        FilterEvent::InitialLoad {
            query,
            markup_active,
        } => FilterEffect {
            selected: query.or(markup_active).unwrap_or(Category::All),
            push_history: false,
        },
    }
}
