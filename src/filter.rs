//! Denylist filtering of feed items.

use crate::config;
use crate::feed::{Channel, Feed, Item};

/// The immutable rule set applied to every feed.
///
/// Rules are injected at construction rather than read from a global so
/// tests can supply their own lists. Production uses [`FilterRules::default`],
/// which sources the build-time lists in [`config`].
#[derive(Debug, Clone)]
pub struct FilterRules {
    deny_links: Vec<String>,
    deny_title_keywords: Vec<String>,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self::new(
            config::DENY_LINKS.iter().map(|s| s.to_string()).collect(),
            config::DENY_TITLE_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

impl FilterRules {
    /// Creates a rule set from an exact-match link denylist and a
    /// substring-match title keyword denylist.
    pub fn new(deny_links: Vec<String>, deny_title_keywords: Vec<String>) -> Self {
        Self {
            deny_links,
            deny_title_keywords,
        }
    }

    /// True when the item matches any denylist rule.
    ///
    /// A pure function of `item.link` and `item.title` only: the link must
    /// equal a denied link exactly, or the title must contain a denied
    /// keyword as a case-sensitive substring. Evaluation short-circuits on
    /// the first hit; rule order cannot change the result.
    pub fn should_exclude(&self, item: &Item) -> bool {
        self.deny_links.iter().any(|link| item.link == *link)
            || self
                .deny_title_keywords
                .iter()
                .any(|keyword| item.title.contains(keyword.as_str()))
    }

    /// Produces a new feed containing only the items that pass the rules.
    ///
    /// Channel metadata and the relative order of surviving items are
    /// preserved; duplicates are not collapsed. The input feed is left
    /// untouched. Never fails — zero surviving items is valid output.
    pub fn filter(&self, feed: &Feed) -> Feed {
        Feed {
            version: feed.version.clone(),
            channel: Channel {
                title: feed.channel.title.clone(),
                link: feed.channel.link.clone(),
                description: feed.channel.description.clone(),
                language: feed.channel.language.clone(),
                items: feed
                    .channel
                    .items
                    .iter()
                    .filter(|item| !self.should_exclude(item))
                    .cloned()
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn item(title: &str, link: &str) -> Item {
        Item {
            title: title.to_string(),
            link: link.to_string(),
            ..Item::default()
        }
    }

    fn feed_with_items(items: Vec<Item>) -> Feed {
        Feed {
            version: "2.0".to_string(),
            channel: Channel {
                title: "テストフィード".to_string(),
                link: "https://example.com".to_string(),
                description: "テスト用RSSフィード".to_string(),
                language: "ja".to_string(),
                items,
            },
        }
    }

    #[test]
    fn test_should_exclude_matches() {
        let rules = FilterRules::default();

        // Clean item passes
        assert!(!rules.should_exclude(&item("正常な記事タイトル", "https://example.com/article/1")));
        // Title keyword matches
        assert!(rules.should_exclude(&item("PR: 広告記事", "https://example.com/article/2")));
        assert!(rules.should_exclude(&item("【広告】キャンペーン情報", "https://example.com/article/3")));
        // Exact link match
        assert!(rules.should_exclude(&item("除外対象の記事", "https://example-news.com/article/123")));
    }

    #[test]
    fn test_link_match_is_exact_not_prefix() {
        let rules = FilterRules::default();
        assert!(!rules.should_exclude(&item("記事", "https://example-news.com/article/1234")));
    }

    #[test]
    fn test_title_match_is_case_sensitive() {
        let rules = FilterRules::default();
        assert!(!rules.should_exclude(&item("pr: lowercase", "https://example.com/a")));
    }

    #[test]
    fn test_filter_drops_denied_items_in_order() {
        let rules = FilterRules::default();
        let feed = feed_with_items(vec![
            item("正常な記事1", "https://example.com/article/1"),
            item("PR: 広告記事", "https://example.com/article/2"),
            item("正常な記事2", "https://example.com/article/3"),
            item("除外対象の記事", "https://example-news.com/article/123"),
        ]);

        let filtered = rules.filter(&feed);

        let titles: Vec<&str> = filtered
            .channel
            .items
            .iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(titles, vec!["正常な記事1", "正常な記事2"]);

        // Channel metadata is carried over unchanged
        assert_eq!(filtered.channel.title, feed.channel.title);
        assert_eq!(filtered.channel.language, feed.channel.language);
        assert_eq!(filtered.version, feed.version);

        // The input feed is not mutated
        assert_eq!(feed.channel.items.len(), 4);
    }

    #[test]
    fn test_filter_empty_feed() {
        let rules = FilterRules::default();
        let filtered = rules.filter(&feed_with_items(Vec::new()));
        assert!(filtered.channel.items.is_empty());
    }

    #[test]
    fn test_filter_keeps_duplicates() {
        let rules = FilterRules::default();
        let feed = feed_with_items(vec![
            item("同じ記事", "https://example.com/a"),
            item("同じ記事", "https://example.com/a"),
        ]);
        assert_eq!(rules.filter(&feed).channel.items.len(), 2);
    }

    #[test]
    fn test_injected_rules_override_defaults() {
        let rules = FilterRules::new(
            vec!["https://example.com/blocked".to_string()],
            vec!["spam".to_string()],
        );
        assert!(rules.should_exclude(&item("ok", "https://example.com/blocked")));
        assert!(rules.should_exclude(&item("pure spam here", "https://example.com/a")));
        // Default keywords no longer apply
        assert!(!rules.should_exclude(&item("PR: 広告記事", "https://example.com/a")));
    }

    fn arb_item() -> impl Strategy<Value = Item> {
        let title = prop_oneof![
            "[a-z ]{0,12}",
            Just("PR: sponsored".to_string()),
            Just("【広告】campaign".to_string()),
        ];
        let link = prop_oneof![
            "https://example\\.com/[a-z]{1,6}",
            Just("https://example-news.com/article/123".to_string()),
        ];
        (title, link).prop_map(|(title, link)| Item {
            title,
            link,
            ..Item::default()
        })
    }

    proptest! {
        #[test]
        fn filter_is_idempotent(items in prop::collection::vec(arb_item(), 0..16)) {
            let rules = FilterRules::default();
            let feed = feed_with_items(items);
            let once = rules.filter(&feed);
            let twice = rules.filter(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn surviving_items_are_an_ordered_subsequence(items in prop::collection::vec(arb_item(), 0..16)) {
            let rules = FilterRules::default();
            let feed = feed_with_items(items);
            let filtered = rules.filter(&feed);

            let mut originals = feed.channel.items.iter();
            for kept in &filtered.channel.items {
                prop_assert!(originals.any(|orig| orig == kept));
            }
        }

        #[test]
        fn exclusion_ignores_other_fields(item in arb_item(), guid in "[a-z0-9]{0,8}") {
            let rules = FilterRules::default();
            let mut decorated = item.clone();
            decorated.guid = guid;
            decorated.description = "unrelated".to_string();
            prop_assert_eq!(rules.should_exclude(&item), rules.should_exclude(&decorated));
        }
    }
}
