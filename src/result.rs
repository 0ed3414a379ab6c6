//! Result types for metadata extraction output.
//!
//! This module defines the normalized record returned for one fetched page,
//! including the aggregated image and video entries.

use serde::{Deserialize, Serialize};

/// Identifies which source contributed an image record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// Open Graph `og:image` tag group.
    Og,
    /// Twitter Card `twitter:image` tag group.
    Twitter,
    /// Apple touch icon link tag.
    TouchIcon,
    /// Favicon link tag.
    Favicon,
    /// `<img>` element in the page body.
    BodyImage,
}

/// A single image discovered in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Absolute image URL.
    pub src: String,

    /// Source that contributed this image.
    #[serde(rename = "type")]
    pub source: ImageSource,

    /// Declared width in pixels, when present and well-formed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Declared height in pixels, when present and well-formed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Alt text. Only populated for body images, empty string when the
    /// attribute is missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A video or player reference collected from one meta tag group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Video or player URL, as declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Declared content type (e.g. `video/mp4`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Declared width in pixels, when present and well-formed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Declared height in pixels, when present and well-formed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Normalized metadata record for one page.
///
/// Scalar fields are filled by the highest-priority source that supplies
/// them and never overwritten by a later pass. `images` and `videos` are
/// always present, possibly empty. After assembly `url` and `title` are
/// always set (`title` may be empty when the document has no title element).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Canonical page URL, falling back to the requested URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Page title, falling back to the document title element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Page description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Declared locale (e.g. `en_US`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Keywords, split from the comma-delimited keywords meta tag.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    /// Images contributed by all enabled sources, in pass order.
    #[serde(default)]
    pub images: Vec<Image>,

    /// Videos contributed by meta tag groups, in pass order.
    #[serde(default)]
    pub videos: Vec<Video>,
}
