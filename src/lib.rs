//! # feedfinder
//!
//! Finds the RSS and Atom feeds an HTML page advertises through
//! `<link type="application/rss+xml">` and `<link type="application/atom+xml">`
//! elements in its head, and resolves their hrefs to absolute URLs.
//!
//! ```text
//! bytes ─► scraper::Html ─► walker ─► resolve ─► Vec<FeedLink>
//! ```
//!
//! Pages can be supplied in memory ([`find_feeds`]), read from disk or
//! downloaded ([`FeedFinder::find_from_file`], [`FeedFinder::find_from_url`]).
//! Feed documents themselves are never fetched or parsed.
//!
//! ## Modules
//!
//! - [`feed`]: link discovery, URL resolution and page fetching
//! - [`config`]: fetch/decoding settings loaded from TOML
//! - [`util`]: URL validation for fetched pages

pub mod config;
pub mod feed;
pub mod util;

pub use config::{Config, ConfigError};
pub use feed::{
    fetch_page, find_feeds, find_feeds_from_file, find_feeds_from_url, find_links, resolve,
    FeedFinder, FeedKind, FeedLink, FetchError, FindError, ResolveError,
};
