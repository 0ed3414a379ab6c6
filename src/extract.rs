//! Extraction orchestration.
//!
//! Builds one page record from raw HTML: normalize the text, parse the tag
//! tree, run the source passes in priority order, then fill the url/title
//! fallbacks.

use dom_query::Document;
use tracing::debug;
use url::Url;

use crate::coerce;
use crate::error::{Error, Result};
use crate::filters;
use crate::link_tags;
use crate::meta_tags;
use crate::options::Options;
use crate::result::Page;

/// Extract a page record from raw HTML fetched from `url`.
pub(crate) fn extract_page(html: &str, url: &str, options: &Options) -> Result<Page> {
    let cleaned = coerce::clean_text(html);
    if cleaned.is_empty() {
        return Err(Error::EmptyContent);
    }

    let base = Url::parse(url)?;
    let doc = parse_document(&cleaned)?;

    Ok(assemble(&doc, &base, url, options))
}

fn parse_document(html: &str) -> Result<Document> {
    let doc = Document::from(html);
    if doc.select("html").nodes().is_empty() {
        return Err(Error::Parse("document has no root element".to_string()));
    }
    Ok(doc)
}

/// Run the source passes in priority order and fill fallbacks.
///
/// Priority tree:
/// 1. Open Graph
/// 2. Twitter Card
/// 3. Generic meta content (description, keywords, title)
///
/// Icon and body-image passes only append to `images` and take no part in
/// scalar priority.
fn assemble(doc: &Document, base: &Url, url: &str, options: &Options) -> Page {
    let mut page = Page::default();

    if options.open_graph {
        page = meta_tags::extract_meta(&filters::OPEN_GRAPH, doc, base, page);
    }
    if options.twitter_card {
        page = meta_tags::extract_meta(&filters::TWITTER_CARD, doc, base, page);
    }
    page = meta_tags::extract_meta(&filters::GENERIC, doc, base, page);

    if options.touch_icon {
        page = link_tags::extract_link(&filters::TOUCH_ICON, doc, base, page);
    }
    if options.favicon {
        page = link_tags::extract_link(&filters::FAVICON, doc, base, page);
    }
    if options.all_images {
        page = link_tags::extract_body_images(doc, base, page);
    }

    if page.url.is_none() {
        page.url = Some(url.to_string());
    }
    if page.title.is_none() {
        page.title = Some(document_title(doc));
    }

    debug!(
        url,
        images = page.images.len(),
        videos = page.videos.len(),
        "assembled page record"
    );

    page
}

/// Text of the document's title element, empty when there is none.
fn document_title(doc: &Document) -> String {
    doc.select("title").text().trim().to_string()
}
