//! Feed discovery for HTML pages.
//!
//! Finding the feeds a page advertises is a two-step pipeline:
//!
//! - `walker` - walks the parsed document head and picks out `<link>`
//!   elements whose `type` is an RSS or Atom MIME type
//! - `resolve` - turns each raw `href` into an absolute URL
//!   using the page URL as base
//!
//! Page bytes come from the caller, from disk, or from [`fetch_page`], which
//! downloads a page with a single GET request.
//!
//! # Example
//!
//! ```no_run
//! use feedfinder::{find_feeds, Config, FeedFinder};
//!
//! # async fn run() -> Result<(), feedfinder::FindError> {
//! // In-memory page
//! let html = br#"<head><link type="application/atom+xml" href="atom.xml"></head>"#;
//! let feeds = find_feeds(html, "https://example.com/blog/")?;
//! assert_eq!(feeds[0].url, "https://example.com/blog/atom.xml");
//!
//! // Page on the web
//! let finder = FeedFinder::new(Config::default())?;
//! for feed in finder.find_from_url("https://example.com/blog/").await? {
//!     println!("{} {}", feed.kind, feed.url);
//! }
//! # Ok(())
//! # }
//! ```

mod fetcher;
mod finder;
mod link;
mod resolve;
mod walker;

pub use fetcher::{fetch_page, FetchError};
pub use finder::{find_feeds, find_feeds_from_file, find_feeds_from_url, FeedFinder, FindError};
pub use link::{FeedKind, FeedLink};
pub use resolve::{resolve, ResolveError};
pub use walker::find_links;
