//! Source feed fetching and parsing.
//!
//! Feeds are fetched with a bounded HTTP client and parsed with `feed-rs`, so
//! both RSS and Atom sources are accepted.

pub mod fetcher;
mod raw;
pub mod types;

pub use fetcher::{parse_feed, validate_url, FeedFetcher};
pub use types::{FeedItem, SourceFeed};
