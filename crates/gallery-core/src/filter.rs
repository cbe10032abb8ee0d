//! Text and category filtering of gallery cards.

use std::str::FromStr;

use crate::card::Card;
use crate::resource::ResourceKind;

/// Category selection from the filter control
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Kind(ResourceKind),
    /// Any other selector value, matched as a substring of the tag
    Custom(String),
}

impl Category {
    /// Options offered by the category selector, as `(value, label)`
    pub fn options() -> [(&'static str, &'static str); 5] {
        [
            ("all", "All"),
            ("img", "Images"),
            ("pdf", "PDFs"),
            ("link", "Links"),
            ("doc", "Documents"),
        ]
    }

    /// Selector value for this category
    pub fn value(&self) -> String {
        match self {
            Category::All => "all".to_string(),
            Category::Kind(kind) => kind.wire_name().to_string(),
            Category::Custom(s) => s.clone(),
        }
    }

    pub fn matches(&self, kind: ResourceKind) -> bool {
        let tag = kind.tag().to_lowercase();
        match self {
            Category::All => true,
            Category::Kind(ResourceKind::Link) => tag == "url",
            Category::Kind(other) => tag.contains(other.wire_name()),
            Category::Custom(selection) => tag.contains(selection.as_str()),
        }
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    /// Selector values are taken verbatim; anything unknown is kept as given.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" => Category::All,
            "img" => Category::Kind(ResourceKind::Image),
            "pdf" => Category::Kind(ResourceKind::Pdf),
            "link" => Category::Kind(ResourceKind::Link),
            "doc" => Category::Kind(ResourceKind::Document),
            other => Category::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(category) => category,
            Err(never) => match never {},
        }
    }
}

/// Active filter: free-text query plus category
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filter {
    pub query: String,
    pub category: Category,
}

impl Filter {
    pub fn new(query: impl Into<String>, category: impl Into<Category>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    /// Case-insensitive substring match on the title; empty query matches.
    pub fn matches_text(&self, title: &str) -> bool {
        title.to_lowercase().contains(&self.query.to_lowercase())
    }

    pub fn matches(&self, title: &str, kind: ResourceKind) -> bool {
        self.matches_text(title) && self.category.matches(kind)
    }

    pub fn matches_card(&self, card: &Card) -> bool {
        self.matches(card.title(), card.kind())
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.category == Category::All
    }
}
