//! # pagemeta
//!
//! Web page metadata extraction library.
//!
//! Fetches a page and returns a normalized metadata record - title,
//! description, canonical URL, images and videos - read from Open Graph,
//! Twitter Card and generic meta tags, icon link tags, and optionally the
//! images in the page body.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagemeta::extract;
//!
//! let html = r#"<html><head>
//! <meta property="og:title" content="My Page">
//! <meta name="description" content="About my page.">
//! </head></html>"#;
//!
//! let page = extract(html, "https://example.com/p")?;
//! assert_eq!(page.title.as_deref(), Some("My Page"));
//! assert_eq!(page.description.as_deref(), Some("About my page."));
//! # Ok::<(), pagemeta::Error>(())
//! ```
//!
//! Fetching over HTTP goes through a [`Client`]:
//!
//! ```rust,no_run
//! # async fn run() -> pagemeta::Result<()> {
//! let page = pagemeta::fetch("https://example.com/article").await?;
//! println!("{}", serde_json::to_string_pretty(&page).unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! ## Source priority
//!
//! Scalar fields obey a fixed priority tree - Open Graph, then Twitter
//! Card, then generic meta content. A field set by an earlier source is
//! never overwritten by a later one. Icon links and body images only append
//! to the `images` list.

mod coerce;
mod error;
mod extract;
mod fetch;
mod filters;
mod link_tags;
mod meta_tags;
mod options;
mod result;

/// Character encoding detection and transcoding.
pub mod encoding;

/// URL utilities for absolute-URL checks and resolution.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::Client;
pub use options::{Options, Overrides};
pub use result::{Image, ImageSource, Page, Video};

/// Extracts a metadata record from an HTML document using default options.
///
/// `url` is the address the document was retrieved from; it anchors
/// relative URL resolution and the canonical-URL fallback.
///
/// # Example
///
/// ```rust
/// use pagemeta::extract;
///
/// let html = "<html><head><title>Hello</title></head></html>";
/// let page = extract(html, "https://example.com/")?;
/// assert_eq!(page.title.as_deref(), Some("Hello"));
/// # Ok::<(), pagemeta::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str, url: &str) -> Result<Page> {
    extract_with_options(html, url, &Options::default())
}

/// Extracts a metadata record from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use pagemeta::{extract_with_options, Options};
///
/// let html = r#"<html><body><img src="/i.png" alt="pic"></body></html>"#;
/// let options = Options {
///     all_images: true,
///     ..Options::default()
/// };
/// let page = extract_with_options(html, "https://example.com/", &options)?;
/// assert_eq!(page.images.len(), 1);
/// # Ok::<(), pagemeta::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, url: &str, options: &Options) -> Result<Page> {
    extract::extract_page(html, url, options)
}

/// Extracts a metadata record from HTML bytes with automatic encoding
/// detection.
///
/// Detects the charset from meta tags and converts to UTF-8 before
/// extraction; invalid characters are replaced rather than failing.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes(html: &[u8], url: &str) -> Result<Page> {
    let html_str = encoding::transcode_to_utf8(html, None);
    extract(&html_str, url)
}

/// Fetches `url` and extracts its metadata record using default options.
///
/// Convenience wrapper constructing a throwaway [`Client`]; use a
/// [`Client`] directly to reuse connections or set instance defaults.
#[allow(clippy::missing_errors_doc)]
pub async fn fetch(url: &str) -> Result<Page> {
    Client::new()?.fetch(url).await
}
