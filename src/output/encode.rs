//! XML serialization of the output document.

use quick_xml::se::Serializer;
use serde::Serialize;

use crate::error::{Result, RssFilterError};
use crate::output::document::RssDocument;

/// XML declaration written before the root element.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Content type of a serialized document.
pub const CONTENT_TYPE: &str = "application/rss+xml";

/// Serialize a document to an XML string, indented by two spaces.
pub fn to_xml(document: &RssDocument) -> Result<String> {
    let mut body = String::new();
    let mut serializer = Serializer::new(&mut body);
    serializer.indent(' ', 2);
    document
        .serialize(serializer)
        .map_err(|e| RssFilterError::Encoding(e.to_string()))?;

    Ok(format!("{XML_DECLARATION}\n{body}"))
}
