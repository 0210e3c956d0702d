use super::fetcher::{fetch_page, FetchError};
use super::link::FeedLink;
use super::resolve::ResolveError;
use super::walker::find_links;
use crate::config::Config;
use scraper::Html;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors returned by the feed finding entry points.
#[derive(Debug, Error)]
pub enum FindError {
    /// The page is not valid UTF-8 and `lossy_utf8` is off
    #[error("cannot parse HTML: {0}")]
    Parse(#[from] std::str::Utf8Error),
    /// The page could not be downloaded
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The page file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A relative feed href needed a base URL that does not parse
    #[error(transparent)]
    InvalidBaseUrl(#[from] ResolveError),
}

/// Finds the RSS/Atom feeds advertised in the head of an HTML page.
///
/// Relative hrefs are resolved against `base_url` (see [`resolve`](crate::resolve)).
/// The result lists feeds in document order, duplicates included. Bytes that
/// are not valid UTF-8 are replaced with U+FFFD, so pages in legacy encodings
/// still yield their (ASCII) feed links.
///
/// # Errors
///
/// [`FindError::InvalidBaseUrl`] if a relative href needs `base_url` and it
/// does not parse.
///
/// # Examples
///
/// ```
/// use feedfinder::{find_feeds, FeedKind};
///
/// let html = br#"<head><link rel="alternate" type="application/rss+xml" href="/rss.xml"></head>"#;
/// let feeds = find_feeds(html, "https://example.com/blog/").unwrap();
/// assert_eq!(feeds[0].url, "https://example.com/rss.xml");
/// assert_eq!(feeds[0].kind, FeedKind::Rss);
/// ```
pub fn find_feeds(html: &[u8], base_url: &str) -> Result<Vec<FeedLink>, FindError> {
    scan(&String::from_utf8_lossy(html), base_url)
}

/// Finds feeds on the page at `url`, using [`Config::default()`].
///
/// See [`FeedFinder::find_from_url`].
pub async fn find_feeds_from_url(url: &str) -> Result<Vec<FeedLink>, FindError> {
    FeedFinder::new(Config::default())?.find_from_url(url).await
}

/// Finds feeds in an HTML file, using [`Config::default()`].
///
/// See [`FeedFinder::find_from_file`].
pub async fn find_feeds_from_file(
    path: impl AsRef<Path>,
    base_url: &str,
) -> Result<Vec<FeedLink>, FindError> {
    FeedFinder::new(Config::default())?
        .find_from_file(path, base_url)
        .await
}

fn scan(html: &str, base_url: &str) -> Result<Vec<FeedLink>, FindError> {
    let document = Html::parse_document(html);
    Ok(find_links(&document, base_url)?)
}

/// Feed finder bound to an HTTP client and a [`Config`].
///
/// Cheap to clone; the inner [`reqwest::Client`] shares its connection pool.
#[derive(Debug, Clone)]
pub struct FeedFinder {
    client: reqwest::Client,
    config: Config,
}

impl FeedFinder {
    /// Builds a finder with its own HTTP client using the configured user agent.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the HTTP client cannot be built
    /// (e.g. TLS backend initialization failure).
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds a finder around a caller-configured client.
    ///
    /// `config.user_agent` is not applied to `client`.
    pub fn with_client(client: reqwest::Client, config: Config) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Like [`find_feeds`], but rejects invalid UTF-8 with [`FindError::Parse`]
    /// when `lossy_utf8` is off.
    pub fn find(&self, html: &[u8], base_url: &str) -> Result<Vec<FeedLink>, FindError> {
        let html = if self.config.lossy_utf8 {
            String::from_utf8_lossy(html)
        } else {
            Cow::Borrowed(std::str::from_utf8(html)?)
        };
        scan(&html, base_url)
    }

    /// Downloads the page at `url` and finds its feeds, with `url` as base URL.
    ///
    /// A status code of 400 or above fails before the body is read or parsed.
    ///
    /// # Errors
    ///
    /// [`FindError::Fetch`] for any download failure (see [`fetch_page`]),
    /// otherwise the errors of [`FeedFinder::find`].
    pub async fn find_from_url(&self, url: &str) -> Result<Vec<FeedLink>, FindError> {
        let bytes = fetch_page(&self.client, url, &self.config).await?;
        self.find(&bytes, url)
    }

    /// Reads an HTML file and finds its feeds, resolving against `base_url`.
    ///
    /// # Errors
    ///
    /// [`FindError::Io`] if the file cannot be read, otherwise the errors of
    /// [`FeedFinder::find`].
    pub async fn find_from_file(
        &self,
        path: impl AsRef<Path>,
        base_url: &str,
    ) -> Result<Vec<FeedLink>, FindError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| FindError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.find(&bytes, base_url)
    }
}
