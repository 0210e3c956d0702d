use super::link::{FeedKind, FeedLink};
use super::resolve::{resolve, ResolveError};
use scraper::{Html, Node};

/// Collects the feed `<link>` elements of a parsed document, in document order.
///
/// Walks the tree depth-first, pre-order, and never descends into `<body>`:
/// feeds are only looked for in the document head. That is a simplification,
/// since HTML allows `<link>` in the body, but it keeps the walk short on
/// large pages.
///
/// A `<link>` is emitted when its `type` is one of the two feed MIME types and
/// its `href` is non-empty. Only the first `type` and the first `href` of an
/// element are considered. Duplicates are kept.
///
/// # Errors
///
/// A relative href that cannot be resolved against `base_url` aborts the walk
/// with [`ResolveError`]; no partial list is returned.
pub fn find_links(document: &Html, base_url: &str) -> Result<Vec<FeedLink>, ResolveError> {
    let mut links = Vec::new();
    // Explicit stack: deeply nested documents must not exhaust the call stack
    let mut stack = vec![document.tree.root()];

    while let Some(node) = stack.pop() {
        if let Node::Element(element) = node.value() {
            match element.name() {
                "body" => {
                    tracing::trace!("Reached <body>, skipping subtree");
                    continue;
                }
                "link" => {
                    if let Some((href, kind)) = feed_attrs(element.attrs()) {
                        let url = resolve(href, base_url)?;
                        tracing::debug!(url = %url, kind = %kind, "Found feed link");
                        links.push(FeedLink { url, kind });
                    }
                }
                _ => {}
            }
        }

        // Reverse order so the first child is popped first
        let mut child = node.last_child();
        while let Some(c) = child {
            stack.push(c);
            child = c.prev_sibling();
        }
    }

    tracing::debug!(count = links.len(), "Finished scanning document head");
    Ok(links)
}

/// Returns the raw href and feed kind of a `<link>`, if it declares a feed.
fn feed_attrs<'a>(
    attrs: impl Iterator<Item = (&'a str, &'a str)>,
) -> Option<(&'a str, FeedKind)> {
    let mut type_attr = None;
    let mut href_attr = None;

    for (name, value) in attrs {
        match name {
            "type" if type_attr.is_none() => type_attr = Some(value),
            "href" if href_attr.is_none() => href_attr = Some(value),
            _ => {}
        }
    }

    let kind = FeedKind::from_mime(type_attr?)?;
    let href = href_attr.filter(|h| !h.is_empty())?;
    Some((href, kind))
}
