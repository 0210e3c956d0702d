use serde::{Deserialize, Serialize};
use std::fmt;

const RSS_MIME: &str = "application/rss+xml";
const ATOM_MIME: &str = "application/atom+xml";

/// Syndication format advertised by a `<link>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    Rss,
    Atom,
}

impl FeedKind {
    /// Maps a `type` attribute value to a feed kind.
    ///
    /// Only the exact MIME strings `application/rss+xml` and
    /// `application/atom+xml` are recognized.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            RSS_MIME => Some(Self::Rss),
            ATOM_MIME => Some(Self::Atom),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Rss => RSS_MIME,
            Self::Atom => ATOM_MIME,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rss => "rss",
            Self::Atom => "atom",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feed advertised by a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedLink {
    /// Feed URL, absolute whenever a valid base URL was supplied
    pub url: String,
    /// RSS or Atom
    #[serde(rename = "type")]
    pub kind: FeedKind,
}

impl FeedLink {
    pub fn new(url: impl Into<String>, kind: FeedKind) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }
}
