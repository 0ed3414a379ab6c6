//! Link-tag and body-image passes.
//!
//! Simpler variants of the extraction engine: icon link tags and body
//! `<img>` elements append straight to the page's image list with no
//! priority suppression and no deduplication.

use dom_query::{Document, Selection};
use url::Url;

use crate::coerce;
use crate::filters::LinkFilter;
use crate::result::{Image, ImageSource, Page};
use crate::url_utils;

/// Run one link-tag pass for `filter` over the document.
///
/// Every matching `<link>` tag with an `href` yields one image entry.
#[must_use]
pub(crate) fn extract_link(
    filter: &LinkFilter,
    doc: &Document,
    base: &Url,
    original: Page,
) -> Page {
    let mut page = original;

    for node in doc.select("link").nodes() {
        let link = Selection::from(*node);

        let Some(rel) = link.attr(filter.key) else {
            continue;
        };
        if !filter.pattern.is_match(&rel.to_lowercase()) {
            continue;
        }

        let Some(href) = link.attr("href") else {
            continue;
        };

        page.images.push(Image {
            src: url_utils::resolve_url(&href, base),
            source: filter.source,
            width: None,
            height: None,
            alt: None,
        });
    }

    page
}

/// Collect every `<img>` element in the document body.
///
/// Each element with a `src` yields one image entry with its alt text
/// (empty string when the attribute is missing) and any coercible
/// width/height attributes.
#[must_use]
pub(crate) fn extract_body_images(doc: &Document, base: &Url, original: Page) -> Page {
    let mut page = original;

    for node in doc.select("img").nodes() {
        let img = Selection::from(*node);

        let Some(src) = img.attr("src") else {
            continue;
        };
        if src.trim().is_empty() {
            continue;
        }

        let alt = img.attr("alt").map_or_else(String::new, |a| a.to_string());

        page.images.push(Image {
            src: url_utils::resolve_url(&src, base),
            source: ImageSource::BodyImage,
            width: img.attr("width").and_then(|w| coerce::coerce_int(&w)),
            height: img.attr("height").and_then(|h| coerce::coerce_int(&h)),
            alt: Some(alt),
        });
    }

    page
}
