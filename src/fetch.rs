//! HTTP fetch orchestration.
//!
//! The [`Client`] pairs a reusable HTTP client with instance-level default
//! options. A fetch resolves effective options, retrieves and transcodes
//! the document, and hands it to the extraction pipeline. Network failures
//! map to [`Error::Fetch`]; response status is not interpreted here, the
//! body of a non-success response is parsed like any other.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::debug;
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};
use crate::extract;
use crate::options::{Options, Overrides};
use crate::result::Page;

const USER_AGENT: &str = concat!("pagemeta/", env!("CARGO_PKG_VERSION"));
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Reusable fetch client with instance-level default options.
///
/// # Example
///
/// ```rust,no_run
/// use pagemeta::{Client, Options};
///
/// # async fn run() -> pagemeta::Result<()> {
/// let client = Client::with_options(Options {
///     all_images: true,
///     ..Options::default()
/// })?;
/// let page = client.fetch("https://example.com/article").await?;
/// println!("{:?}", page.title);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    options: Options,
}

impl Client {
    /// Create a client with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(Options::default())
    }

    /// Create a client with the given instance-level default options.
    pub fn with_options(options: Options) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));

        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .default_headers(headers)
            .build()
            .map_err(|err| Error::Fetch(err.to_string()))?;

        Ok(Self { http, options })
    }

    /// The instance-level default options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Fetch `url` and extract its metadata record using the instance
    /// defaults.
    pub async fn fetch(&self, url: &str) -> Result<Page> {
        self.fetch_with(url, &Overrides::default()).await
    }

    /// Fetch `url` with per-call option overrides; unset overrides fall
    /// back to the instance defaults.
    pub async fn fetch_with(&self, url: &str, overrides: &Overrides) -> Result<Page> {
        let options = self.options.merged(overrides);
        let target = Url::parse(url)?;
        let html = self.retrieve_content(target).await?;
        extract::extract_page(&html, url, &options)
    }

    async fn retrieve_content(&self, url: Url) -> Result<String> {
        debug!(url = %url, "fetching page");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| Error::Fetch(err.to_string()))?;

        let declared = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(encoding::header_charset);

        let body = response
            .bytes()
            .await
            .map_err(|err| Error::Fetch(err.to_string()))?;

        Ok(encoding::transcode_to_utf8(&body, declared.as_deref()))
    }
}
