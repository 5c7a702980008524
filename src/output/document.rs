//! Output document model.

use serde::Serialize;

use crate::feed::{FeedItem, SourceFeed};
use crate::filter::{passes_all, Filter};

/// Value of the `version` attribute on the root element.
pub const RSS_VERSION: &str = "2.0";

/// Root `<rss>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename = "rss")]
pub struct RssDocument {
    #[serde(rename = "@version")]
    pub version: String,
    pub channel: RssChannel,
}

/// `<channel>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RssChannel {
    pub title: String,
    pub link: String,
    pub description: String,
    #[serde(rename = "item")]
    pub items: Vec<RssItem>,
}

/// `<item>` element. Empty optional fields are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RssItem {
    pub title: String,
    pub link: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "pubDate", skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
}

impl From<FeedItem> for RssItem {
    fn from(item: FeedItem) -> Self {
        Self {
            title: item.title,
            link: item.link,
            description: item.description,
            author: item.author.filter(|a| !a.is_empty()),
            pub_date: item.published.filter(|p| !p.is_empty()),
        }
    }
}

impl RssDocument {
    /// Build the output document from a source feed, keeping only the items
    /// that pass every filter.
    ///
    /// Channel metadata is always copied. Surviving items keep their
    /// relative order.
    pub fn filtered(feed: SourceFeed, filters: &[Filter]) -> Self {
        let items = feed
            .items
            .into_iter()
            .filter(|item| passes_all(item, filters))
            .map(RssItem::from)
            .collect();

        Self {
            version: RSS_VERSION.to_string(),
            channel: RssChannel {
                title: feed.title,
                link: feed.link,
                description: feed.description,
                items,
            },
        }
    }
}
