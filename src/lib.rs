//! rss-filter
//!
//! An HTTP function that fetches an RSS or Atom feed, keeps the items whose
//! fields contain the requested keywords and returns them as RSS 2.0.

pub mod config;
pub mod error;
pub mod feed;
pub mod filter;
pub mod handler;
pub mod logging;
pub mod output;
pub mod web;

pub use config::Config;
pub use error::{Result, RssFilterError};
pub use feed::{FeedFetcher, FeedItem, SourceFeed};
pub use filter::{parse_filters, passes_all, Filter, FilterField};
pub use handler::{handle, AppState, FilterResponse};
pub use output::{to_xml, RssDocument};
pub use web::{create_router, WebServer};
