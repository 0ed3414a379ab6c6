//! Meta-tag extraction engine.
//!
//! One pass applies a [`MetaFilter`](crate::filters::MetaFilter) against the
//! parsed document: matched scalar properties are written into the page
//! record unless an earlier pass already set them, and image/video
//! properties are collected into at most one pending record apiece, appended
//! at the end of the pass. Malformed individual tags are skipped, never
//! fatal.

use dom_query::{Document, Selection};
use tracing::trace;
use url::Url;

use crate::coerce;
use crate::filters::{MediaField, MetaFilter, PageField, Target};
use crate::result::{Image, ImageSource, Page, Video};
use crate::url_utils;

impl Page {
    pub(crate) fn has(&self, field: PageField) -> bool {
        match field {
            PageField::Url => self.url.is_some(),
            PageField::Title => self.title.is_some(),
            PageField::Description => self.description.is_some(),
            PageField::Locale => self.locale.is_some(),
            PageField::Keywords => !self.keywords.is_empty(),
        }
    }

    pub(crate) fn set(&mut self, field: PageField, value: &str) {
        match field {
            PageField::Url => self.url = Some(value.to_string()),
            PageField::Title => self.title = Some(value.to_string()),
            PageField::Description => self.description = Some(value.to_string()),
            PageField::Locale => self.locale = Some(value.to_string()),
            PageField::Keywords => self.keywords = coerce::split_keywords(value),
        }
    }
}

/// Image record being collected over one pass.
#[derive(Debug, Default)]
struct PendingImage {
    src: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

impl PendingImage {
    fn collect(&mut self, field: MediaField, value: &str, base: &Url) {
        match field {
            MediaField::Src => self.src = Some(url_utils::resolve_url(value, base)),
            MediaField::Width => {
                if let Some(n) = coerce::coerce_int(value) {
                    self.width = Some(n);
                }
            }
            MediaField::Height => {
                if let Some(n) = coerce::coerce_int(value) {
                    self.height = Some(n);
                }
            }
            MediaField::ContentType => {}
        }
    }

    /// A group without a source URL is not an image; stray dimension
    /// properties are dropped.
    fn into_image(self, source: ImageSource) -> Option<Image> {
        let src = self.src?;
        Some(Image {
            src,
            source,
            width: self.width,
            height: self.height,
            alt: None,
        })
    }
}

/// Video record being collected over one pass.
#[derive(Debug, Default)]
struct PendingVideo {
    src: Option<String>,
    content_type: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

impl PendingVideo {
    fn collect(&mut self, field: MediaField, value: &str) {
        match field {
            // Video URLs are carried as declared, no resolution forced.
            MediaField::Src => self.src = Some(value.to_string()),
            MediaField::ContentType => self.content_type = Some(value.to_string()),
            MediaField::Width => {
                if let Some(n) = coerce::coerce_int(value) {
                    self.width = Some(n);
                }
            }
            MediaField::Height => {
                if let Some(n) = coerce::coerce_int(value) {
                    self.height = Some(n);
                }
            }
        }
    }

    fn is_empty(&self) -> bool {
        self.src.is_none()
            && self.content_type.is_none()
            && self.width.is_none()
            && self.height.is_none()
    }

    fn into_video(self) -> Video {
        Video {
            src: self.src,
            content_type: self.content_type,
            width: self.width,
            height: self.height,
        }
    }
}

/// Run one meta-tag pass for `filter` over the document.
///
/// Scalar fields already present in `original` are left untouched, which is
/// what enforces the source priority order: whoever runs first wins.
#[must_use]
pub(crate) fn extract_meta(
    filter: &MetaFilter,
    doc: &Document,
    base: &Url,
    original: Page,
) -> Page {
    let mut page = original;
    let mut image = PendingImage::default();
    let mut video = PendingVideo::default();

    for node in doc.select("meta").nodes() {
        let meta = Selection::from(*node);

        let Some(prop) = meta.attr(filter.key) else {
            continue;
        };
        let prop = prop.to_lowercase();
        if !filter.pattern.is_match(&prop) {
            continue;
        }

        let Some(value) = meta.attr("content") else {
            continue;
        };
        let value = value.to_string();

        let Some(rule) = filter.rules.iter().find(|rule| rule.prop == prop) else {
            continue;
        };

        match rule.target {
            Target::Page(field) => {
                if !page.has(field) {
                    trace!(source = filter.name, prop = %prop, "setting field");
                    page.set(field, &value);
                }
            }
            Target::Image(field) => {
                if !value.is_empty() {
                    image.collect(field, &value, base);
                }
            }
            Target::Video(field) => {
                if !value.is_empty() {
                    video.collect(field, &value);
                }
            }
        }
    }

    if let Some(source) = filter.image_source {
        if let Some(image) = image.into_image(source) {
            page.images.push(image);
        }
    }
    if !video.is_empty() {
        page.videos.push(video.into_video());
    }

    page
}
