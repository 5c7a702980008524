//! Raw per-entry text that `feed-rs` normalizes away.
//!
//! `feed-rs` turns dates into timestamps and RSS `<author>` contacts into a
//! placeholder person, so the original strings are read here with a second
//! `quick-xml` pass over the same bytes. Entries are returned in document
//! order, one per `<item>` or `<entry>`.

use quick_xml::events::Event;
use quick_xml::Reader;

/// Date and author text of one entry, exactly as written in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RawEntry {
    pub_date: Option<String>,
    published: Option<String>,
    dc_date: Option<String>,
    updated: Option<String>,
    author: Option<String>,
    creator: Option<String>,
}

impl RawEntry {
    /// Publication date: `pubDate`, `published`, `dc:date`, then `updated`.
    pub(crate) fn date(&self) -> Option<String> {
        self.pub_date
            .clone()
            .or_else(|| self.published.clone())
            .or_else(|| self.dc_date.clone())
            .or_else(|| self.updated.clone())
    }

    /// Author contact text: RSS `<author>`, then `dc:creator`.
    ///
    /// Atom authors carry their name in a child element and are not
    /// captured here.
    pub(crate) fn contact(&self) -> Option<&str> {
        self.author.as_deref().or(self.creator.as_deref())
    }

    fn slot(&mut self, field: RawField) -> &mut Option<String> {
        match field {
            RawField::PubDate => &mut self.pub_date,
            RawField::Published => &mut self.published,
            RawField::DcDate => &mut self.dc_date,
            RawField::Updated => &mut self.updated,
            RawField::Author => &mut self.author,
            RawField::Creator => &mut self.creator,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawField {
    PubDate,
    Published,
    DcDate,
    Updated,
    Author,
    Creator,
}

impl RawField {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"pubDate" => Some(RawField::PubDate),
            b"published" => Some(RawField::Published),
            b"date" => Some(RawField::DcDate),
            b"updated" => Some(RawField::Updated),
            b"author" => Some(RawField::Author),
            b"creator" => Some(RawField::Creator),
            _ => None,
        }
    }
}

fn is_entry(name: &[u8]) -> bool {
    name == b"item" || name == b"entry"
}

/// Collect raw entry text from feed bytes.
///
/// Only direct children of an entry are read. On malformed XML the entries
/// read so far are returned.
pub(crate) fn scan_entries(bytes: &[u8]) -> Vec<RawEntry> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();

    let mut depth = 0usize;
    let mut current: Option<(usize, RawEntry)> = None;
    let mut field: Option<RawField> = None;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.local_name();
                match current.as_ref().map(|(d, _)| *d) {
                    None if is_entry(name.as_ref()) => {
                        current = Some((depth, RawEntry::default()));
                    }
                    Some(entry_depth) if depth == entry_depth + 1 => {
                        field = RawField::from_local_name(name.as_ref());
                        text.clear();
                    }
                    _ => {}
                }
                depth += 1;
            }
            Ok(Event::Text(e)) => {
                if let (Some(_), Some((entry_depth, _))) = (field, &current) {
                    if depth == entry_depth + 2 {
                        match e.unescape() {
                            Ok(t) => text.push_str(&t),
                            Err(_) => text.push_str(&String::from_utf8_lossy(&e)),
                        }
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if let (Some(_), Some((entry_depth, _))) = (field, &current) {
                    if depth == entry_depth + 2 {
                        text.push_str(&String::from_utf8_lossy(&e));
                    }
                }
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                match current.as_ref().map(|(d, _)| *d) {
                    Some(entry_depth) if depth == entry_depth + 1 => {
                        if let (Some(f), Some((_, entry))) = (field.take(), current.as_mut()) {
                            let value = text.trim();
                            let slot = entry.slot(f);
                            if slot.is_none() && !value.is_empty() {
                                *slot = Some(value.to_string());
                            }
                        }
                    }
                    Some(entry_depth) if depth == entry_depth => {
                        if let Some((_, entry)) = current.take() {
                            entries.push(entry);
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    entries
}

/// Display name from an RSS contact string.
///
/// `jane@example.com (Jane Doe)` and `Jane Doe <jane@example.com>` give
/// `Jane Doe`; anything else is returned trimmed.
pub(crate) fn contact_name(contact: &str) -> String {
    let contact = contact.trim();

    if let (Some(open), true) = (contact.rfind('('), contact.ends_with(')')) {
        let name = contact[open + 1..contact.len() - 1].trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }

    if let (Some(open), true) = (contact.find('<'), contact.ends_with('>')) {
        let name = contact[..open].trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }

    contact.to_string()
}
