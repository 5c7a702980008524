//! Source feed fetcher.
//!
//! Fetching is bounded by the timeouts, redirect limit and size limit from
//! [`FetchConfig`]. Target URLs are checked before any request is made so the
//! service cannot be pointed at loopback or private network hosts.

use std::net::IpAddr;
use std::time::Duration;

use feed_rs::model::{Link, Person};
use feed_rs::parser;
use reqwest::Client;
use tracing::debug;

use crate::config::FetchConfig;
use crate::error::{Result, RssFilterError};
use crate::feed::raw::{self, contact_name};
use crate::feed::types::{FeedItem, SourceFeed};

/// Hostname suffixes that resolve inside a private network.
const FORBIDDEN_HOST_SUFFIXES: &[&str] = &[
    ".local",
    ".localhost",
    ".internal",
    ".intranet",
    ".corp",
    ".home",
    ".lan",
];

/// Fetches and parses source feeds.
#[derive(Debug, Clone)]
pub struct FeedFetcher {
    client: Client,
    max_feed_size: u64,
    allow_private_hosts: bool,
}

impl FeedFetcher {
    /// Create a fetcher from the fetch configuration.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .read_timeout(Duration::from_secs(config.read_timeout_secs))
            .timeout(Duration::from_secs(config.total_timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| RssFilterError::Fetch(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            max_feed_size: config.max_feed_size_bytes,
            allow_private_hosts: config.allow_private_hosts,
        })
    }

    /// Fetch and parse the feed at `url`.
    ///
    /// Failures are not retried.
    pub async fn fetch(&self, url: &str) -> Result<SourceFeed> {
        validate_url(url, self.allow_private_hosts)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RssFilterError::Fetch(format!("failed to fetch feed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RssFilterError::Fetch(format!("HTTP error: {status}")));
        }

        if let Some(content_length) = response.content_length() {
            self.check_size(content_length)?;
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RssFilterError::Fetch(format!("failed to read response: {e}")))?;
        self.check_size(bytes.len() as u64)?;

        debug!(url, bytes = bytes.len(), "fetched source feed");
        parse_feed(&bytes)
    }

    fn check_size(&self, size: u64) -> Result<()> {
        if size > self.max_feed_size {
            return Err(RssFilterError::Fetch(format!(
                "feed too large: {} bytes (max {} bytes)",
                size, self.max_feed_size
            )));
        }
        Ok(())
    }
}

/// Validate a feed URL before fetching it.
///
/// Only `http` and `https` are accepted. Unless `allow_private_hosts` is set,
/// loopback, private, link-local and internal hosts are rejected too.
pub fn validate_url(url: &str, allow_private_hosts: bool) -> Result<()> {
    let parsed =
        url::Url::parse(url).map_err(|e| RssFilterError::Fetch(format!("invalid URL: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(RssFilterError::Fetch(format!(
                "unsupported URL scheme: {scheme}"
            )));
        }
    }

    let host = parsed
        .host()
        .ok_or_else(|| RssFilterError::Fetch("URL has no host".to_string()))?;

    if allow_private_hosts {
        return Ok(());
    }

    let ip = match host {
        url::Host::Domain(domain) => {
            if is_forbidden_hostname(domain) {
                return Err(RssFilterError::Fetch(format!("forbidden host: {domain}")));
            }
            return Ok(());
        }
        url::Host::Ipv4(ipv4) => IpAddr::V4(ipv4),
        url::Host::Ipv6(ipv6) => IpAddr::V6(ipv6),
    };

    if is_private_ip(&ip) {
        return Err(RssFilterError::Fetch(format!(
            "private IP address not allowed: {ip}"
        )));
    }
    Ok(())
}

fn is_forbidden_hostname(host: &str) -> bool {
    let host = host.to_lowercase();
    host == "localhost"
        || FORBIDDEN_HOST_SUFFIXES
            .iter()
            .any(|suffix| host.ends_with(suffix))
}

fn is_private_ip(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(ipv4) => {
            ipv4.is_loopback()
                || ipv4.is_private()
                || ipv4.is_link_local()
                || ipv4.is_broadcast()
                || ipv4.is_unspecified()
                || ipv4.is_documentation()
        }
        IpAddr::V6(ipv6) => {
            let first = ipv6.segments()[0];
            ipv6.is_loopback()
                || ipv6.is_unspecified()
                // Unique local: fc00::/7
                || (first & 0xfe00) == 0xfc00
                // Link-local: fe80::/10
                || (first & 0xffc0) == 0xfe80
        }
    }
}

/// Parse RSS or Atom bytes into a [`SourceFeed`].
///
/// Text is kept verbatim. Missing titles, links and descriptions become empty
/// strings. Dates and author contacts are taken from the source text rather
/// than from `feed-rs`, which normalizes both.
pub fn parse_feed(bytes: &[u8]) -> Result<SourceFeed> {
    let feed = parser::parse(bytes)
        .map_err(|e| RssFilterError::Fetch(format!("failed to parse feed: {e}")))?;

    let mut raw_entries = raw::scan_entries(bytes);
    if raw_entries.len() != feed.entries.len() {
        debug!(
            parsed = feed.entries.len(),
            scanned = raw_entries.len(),
            "Raw entry scan out of step, dropping raw dates and contacts"
        );
        raw_entries.clear();
    }
    let mut raw_entries = raw_entries.into_iter();

    let items = feed
        .entries
        .into_iter()
        .map(|entry| {
            let raw = raw_entries.next().unwrap_or_default();
            let author = raw
                .contact()
                .map(contact_name)
                .or_else(|| entry.authors.first().and_then(person_name))
                .filter(|name| !name.is_empty());

            FeedItem {
                title: entry.title.map(|t| t.content).unwrap_or_default(),
                link: primary_link(&entry.links),
                description: entry
                    .summary
                    .map(|t| t.content)
                    .or(entry.content.and_then(|c| c.body))
                    .unwrap_or_default(),
                author,
                published: raw.date(),
            }
        })
        .collect();

    Ok(SourceFeed {
        title: feed.title.map(|t| t.content).unwrap_or_default(),
        link: primary_link(&feed.links),
        description: feed.description.map(|d| d.content).unwrap_or_default(),
        items,
    })
}

/// Display name of a parsed person.
///
/// RSS contacts come through `feed-rs` as a person named `author` with the
/// contact text in `email`.
fn person_name(person: &Person) -> Option<String> {
    let name = person.name.trim();
    if !name.is_empty() && name != "author" {
        return Some(name.to_string());
    }
    person.email.as_deref().map(contact_name)
}

/// Pick the alternate (HTML) link, falling back to the first one.
fn primary_link(links: &[Link]) -> String {
    links
        .iter()
        .find(|link| matches!(link.rel.as_deref(), None | Some("alternate")))
        .or_else(|| links.first())
        .map(|link| link.href.clone())
        .unwrap_or_default()
}
