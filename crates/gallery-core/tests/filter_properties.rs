//! Property-based tests for the filter engine
//!
//! Uses proptest to check text and category matching against every kind.

use gallery_core::{Card, Category, Filter, Resource, ResourceKind};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn kind_strategy() -> impl Strategy<Value = ResourceKind> {
    prop_oneof![
        Just(ResourceKind::Image),
        Just(ResourceKind::Pdf),
        Just(ResourceKind::Link),
        Just(ResourceKind::Document),
    ]
}

fn title_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ._-]{0,40}").expect("valid regex")
}

fn selection_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("all".to_string()),
        Just("img".to_string()),
        Just("pdf".to_string()),
        Just("link".to_string()),
        Just("doc".to_string()),
        Just("image".to_string()),
        Just("PDF".to_string()),
        Just("Img".to_string()),
        prop::string::string_regex("[a-zA-Z]{0,3}").expect("valid regex"),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// An empty query matches every title
    #[test]
    fn empty_query_matches_everything(title in title_strategy()) {
        prop_assert!(Filter::default().matches_text(&title));
    }

    /// Text matching is a case-insensitive substring test
    #[test]
    fn text_match_is_lowercase_substring(title in title_strategy(), query in "[a-zA-Z]{0,4}") {
        let filter = Filter::new(query.clone(), "all");
        prop_assert_eq!(
            filter.matches_text(&title),
            title.to_lowercase().contains(&query.to_lowercase())
        );
    }

    /// Any substring of the title, in any case, matches
    #[test]
    fn title_substrings_match(title in "[a-zA-Z]{1,20}", start in 0usize..20, len in 0usize..20) {
        let start = start.min(title.len());
        let end = (start + len).min(title.len());
        let query = title[start..end].to_uppercase();
        prop_assert!(Filter::new(query, "all").matches_text(&title));
    }

    /// Category selection follows the tag rules for every kind
    #[test]
    fn category_follows_tag_rules(kind in kind_strategy(), selection in selection_strategy()) {
        let tag = kind.tag().to_lowercase();
        let expected = if selection == "all" {
            true
        } else if selection == "link" {
            tag == "url"
        } else {
            tag.contains(selection.as_str())
        };
        prop_assert_eq!(Category::from(selection.as_str()).matches(kind), expected);
    }

    /// A card is visible iff both the text and the category match
    #[test]
    fn card_visibility_is_conjunction(
        kind in kind_strategy(),
        title in title_strategy(),
        query in "[a-z]{0,2}",
        selection in selection_strategy(),
    ) {
        let card = Card::from_resource(Resource::new(1, title.clone(), kind, "x"));
        let filter = Filter::new(query, selection.as_str());
        prop_assert_eq!(
            filter.matches_card(&card),
            filter.matches_text(&title) && filter.category.matches(kind)
        );
    }
}
