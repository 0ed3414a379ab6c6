//! Configuration options for metadata extraction.
//!
//! The `Options` struct controls which metadata sources are consulted.
//! `Overrides` carries per-call adjustments that are merged over a client's
//! instance-level defaults.

/// Configuration options for metadata extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use pagemeta::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     all_images: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Read Open Graph meta tags. These have top priority on return values.
    ///
    /// Default: `true`
    pub open_graph: bool,

    /// Read Twitter Card meta tags.
    ///
    /// Default: `true`
    pub twitter_card: bool,

    /// Collect Apple touch icons into the response `images` list.
    ///
    /// Default: `true`
    pub touch_icon: bool,

    /// Collect favicons into the response `images` list.
    ///
    /// Default: `true`
    pub favicon: bool,

    /// Collect every `<img>` inside the page body into the response
    /// `images` list.
    ///
    /// Default: `false`
    pub all_images: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            open_graph: true,
            twitter_card: true,
            touch_icon: true,
            favicon: true,
            all_images: false,
        }
    }
}

/// Per-call option overrides.
///
/// Fields left as `None` fall back to the defaults they are merged over,
/// so a caller only names the options it wants to change.
///
/// # Example
///
/// ```rust
/// use pagemeta::{Options, Overrides};
///
/// let overrides = Overrides {
///     favicon: Some(false),
///     ..Overrides::default()
/// };
/// let effective = Options::default().merged(&overrides);
/// assert!(!effective.favicon);
/// assert!(effective.open_graph);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Override for [`Options::open_graph`].
    pub open_graph: Option<bool>,
    /// Override for [`Options::twitter_card`].
    pub twitter_card: Option<bool>,
    /// Override for [`Options::touch_icon`].
    pub touch_icon: Option<bool>,
    /// Override for [`Options::favicon`].
    pub favicon: Option<bool>,
    /// Override for [`Options::all_images`].
    pub all_images: Option<bool>,
}

impl Options {
    /// Merge per-call overrides over these options, supplied values winning.
    #[must_use]
    pub fn merged(&self, overrides: &Overrides) -> Self {
        Self {
            open_graph: overrides.open_graph.unwrap_or(self.open_graph),
            twitter_card: overrides.twitter_card.unwrap_or(self.twitter_card),
            touch_icon: overrides.touch_icon.unwrap_or(self.touch_icon),
            favicon: overrides.favicon.unwrap_or(self.favicon),
            all_images: overrides.all_images.unwrap_or(self.all_images),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert!(opts.open_graph);
        assert!(opts.twitter_card);
        assert!(opts.touch_icon);
        assert!(opts.favicon);
        assert!(!opts.all_images);
    }

    #[test]
    fn test_merged_empty_overrides_keeps_defaults() {
        let opts = Options::default();
        assert_eq!(opts.merged(&Overrides::default()), opts);
    }

    #[test]
    fn test_merged_applies_supplied_fields_only() {
        let opts = Options::default();
        let merged = opts.merged(&Overrides {
            open_graph: Some(false),
            all_images: Some(true),
            ..Overrides::default()
        });

        assert!(!merged.open_graph);
        assert!(merged.all_images);
        assert!(merged.twitter_card);
        assert!(merged.touch_icon);
        assert!(merged.favicon);
    }

    #[test]
    fn test_merged_can_restore_a_disabled_default() {
        let opts = Options {
            favicon: false,
            ..Options::default()
        };
        let merged = opts.merged(&Overrides {
            favicon: Some(true),
            ..Overrides::default()
        });

        assert!(merged.favicon);
    }
}
