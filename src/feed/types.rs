//! Parsed source feed types.

/// One item of a source feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// Item title.
    pub title: String,
    /// Item link.
    pub link: String,
    /// Item description (summary, or content body when there is no summary).
    pub description: String,
    /// Display name of the first author.
    pub author: Option<String>,
    /// Publication date, exactly as written in the source.
    pub published: Option<String>,
}

/// A parsed source feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFeed {
    /// Channel title.
    pub title: String,
    /// Channel link.
    pub link: String,
    /// Channel description.
    pub description: String,
    /// Items in document order.
    pub items: Vec<FeedItem>,
}
