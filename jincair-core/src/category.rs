//! Category tags for catalog cards and filter links.

use std::fmt;

/// Reserved tag meaning "no filter".
pub const ALL_TAG: &str = "all";

/// The selected product category.
///
/// Cards and filter links carry an opaque string tag; the reserved value
/// `"all"` disables filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    All,
    Tag(String),
}

impl Category {
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag == ALL_TAG {
            Self::All
        } else {
            Self::Tag(tag.to_string())
        }
    }

    #[must_use]
    pub fn as_tag(&self) -> &str {
        match self {
            Self::All => ALL_TAG,
            Self::Tag(tag) => tag,
        }
    }

    /// Whether a card tagged `card_tag` is visible under this selection.
    #[must_use]
    pub fn shows_card(&self, card_tag: &str) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => tag == card_tag,
        }
    }

    /// Whether a filter link tagged `link_tag` is styled active under this
    /// selection. Equality match only, no hierarchy; `All` activates only the
    /// `"all"` link itself.
    #[must_use]
    pub fn activates_link(&self, link_tag: &str) -> bool {
        self.as_tag() == link_tag
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
