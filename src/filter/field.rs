//! Filterable item fields and their matchers.

use std::fmt;
use std::str::FromStr;

use crate::feed::FeedItem;
use crate::RssFilterError;

/// A feed item field that can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// Item title.
    Title,
    /// Item description.
    Description,
    /// Item author name.
    Author,
    /// Title, description or author.
    Content,
}

impl FilterField {
    /// All recognized fields.
    pub const ALL: [FilterField; 4] = [
        FilterField::Title,
        FilterField::Description,
        FilterField::Author,
        FilterField::Content,
    ];

    /// Query parameter name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Title => "title",
            FilterField::Description => "description",
            FilterField::Author => "author",
            FilterField::Content => "content",
        }
    }

    /// Check whether `item` matches a keyword on this field.
    ///
    /// `keyword` must already be lowercased.
    pub fn matches(&self, item: &FeedItem, keyword: &str) -> bool {
        match self {
            FilterField::Title => title_matches(item, keyword),
            FilterField::Description => description_matches(item, keyword),
            FilterField::Author => author_matches(item, keyword),
            FilterField::Content => {
                title_matches(item, keyword)
                    || description_matches(item, keyword)
                    || author_matches(item, keyword)
            }
        }
    }
}

impl FromStr for FilterField {
    type Err = RssFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(FilterField::Title),
            "description" => Ok(FilterField::Description),
            "author" => Ok(FilterField::Author),
            "content" => Ok(FilterField::Content),
            _ => Err(RssFilterError::InvalidField(s.to_string())),
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn contains_lowercase(haystack: &str, keyword: &str) -> bool {
    haystack.to_lowercase().contains(keyword)
}

fn title_matches(item: &FeedItem, keyword: &str) -> bool {
    contains_lowercase(&item.title, keyword)
}

fn description_matches(item: &FeedItem, keyword: &str) -> bool {
    contains_lowercase(&item.description, keyword)
}

/// An absent or empty author never matches.
fn author_matches(item: &FeedItem, keyword: &str) -> bool {
    match item.author.as_deref() {
        Some(author) if !author.is_empty() => contains_lowercase(author, keyword),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, description: &str, author: Option<&str>) -> FeedItem {
        FeedItem {
            title: title.to_string(),
            link: "https://example.com/item".to_string(),
            description: description.to_string(),
            author: author.map(str::to_string),
            published: None,
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("title".parse::<FilterField>().unwrap(), FilterField::Title);
        assert_eq!("TITLE".parse::<FilterField>().unwrap(), FilterField::Title);
        assert_eq!(
            "Description".parse::<FilterField>().unwrap(),
            FilterField::Description
        );
        assert_eq!("aUtHoR".parse::<FilterField>().unwrap(), FilterField::Author);
        assert_eq!("content".parse::<FilterField>().unwrap(), FilterField::Content);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "category".parse::<FilterField>().unwrap_err();
        assert!(matches!(err, RssFilterError::InvalidField(f) if f == "category"));
        assert!("".parse::<FilterField>().is_err());
        assert!("url".parse::<FilterField>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for field in FilterField::ALL {
            assert_eq!(field.to_string().parse::<FilterField>().unwrap(), field);
        }
    }

    #[test]
    fn test_title_matches_substring() {
        let it = item("Go 1.22 Release Notes", "", None);
        assert!(FilterField::Title.matches(&it, "go"));
        assert!(FilterField::Title.matches(&it, "release"));
        assert!(FilterField::Title.matches(&it, "1.22 rel"));
        assert!(!FilterField::Title.matches(&it, "python"));
    }

    #[test]
    fn test_description_matches() {
        let it = item("Title", "All about Rust ownership", None);
        assert!(FilterField::Description.matches(&it, "ownership"));
        assert!(FilterField::Description.matches(&it, "rust"));
        assert!(!FilterField::Description.matches(&it, "title"));
    }

    #[test]
    fn test_author_absent_never_matches() {
        let it = item("Title", "Body", None);
        assert!(!FilterField::Author.matches(&it, "anything"));
        assert!(!FilterField::Author.matches(&it, ""));
    }

    #[test]
    fn test_author_empty_never_matches() {
        let it = item("Title", "Body", Some(""));
        assert!(!FilterField::Author.matches(&it, ""));
    }

    #[test]
    fn test_author_matches() {
        let it = item("Title", "Body", Some("Jane Doe"));
        assert!(FilterField::Author.matches(&it, "jane"));
        assert!(FilterField::Author.matches(&it, "doe"));
        assert!(FilterField::Author.matches(&it, ""));
        assert!(!FilterField::Author.matches(&it, "john"));
    }

    #[test]
    fn test_content_is_or_of_fields() {
        let items = [
            item("Rust weekly", "news", None),
            item("Weekly", "rust news", None),
            item("Weekly", "news", Some("Rusty Crab")),
            item("Weekly", "news", None),
        ];
        let keyword = "rust";

        for it in &items {
            let expected = FilterField::Title.matches(it, keyword)
                || FilterField::Description.matches(it, keyword)
                || FilterField::Author.matches(it, keyword);
            assert_eq!(FilterField::Content.matches(it, keyword), expected);
        }

        assert!(FilterField::Content.matches(&items[0], keyword));
        assert!(FilterField::Content.matches(&items[1], keyword));
        assert!(FilterField::Content.matches(&items[2], keyword));
        assert!(!FilterField::Content.matches(&items[3], keyword));
    }

    #[test]
    fn test_matching_ignores_item_case() {
        let it = item("GOLANG TIPS", "", None);
        assert!(FilterField::Title.matches(&it, "golang"));
    }
}
