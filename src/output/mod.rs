//! RSS 2.0 output document.
//!
//! The filtered feed is rebuilt as a plain RSS 2.0 `<rss>` document and
//! serialized with `quick-xml`.

pub mod document;
pub mod encode;

pub use document::{RssChannel, RssDocument, RssItem, RSS_VERSION};
pub use encode::{to_xml, CONTENT_TYPE, XML_DECLARATION};
