//! Declarative per-source filter tables.
//!
//! Each metadata source is described as data: an attribute to match on, a
//! compiled value pattern, and a table routing matched properties to output
//! slots. The extraction engine is generic over these tables, so adding a
//! source means adding a table here, never touching the engine.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::result::ImageSource;

/// Output slot for a matched scalar property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageField {
    /// Canonical page URL.
    Url,
    /// Page title.
    Title,
    /// Page description.
    Description,
    /// Declared locale.
    Locale,
    /// Comma-delimited keywords list.
    Keywords,
}

/// Output slot inside a pending image or video record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaField {
    /// Source URL of the image or video.
    Src,
    /// Width in pixels.
    Width,
    /// Height in pixels.
    Height,
    /// Declared content type (videos only).
    ContentType,
}

/// Where a matched meta property is routed.
///
/// Routing image/video properties into their own sub-record targets keeps
/// them out of the scalar namespace, so a property mapped to `src` can
/// never collide with a top-level field of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Write into the accumulating page record, first writer wins.
    Page(PageField),
    /// Collect into the pass's pending image record.
    Image(MediaField),
    /// Collect into the pass's pending video record.
    Video(MediaField),
}

/// One matched-property-to-output mapping inside a filter.
#[derive(Debug)]
pub struct MetaRule {
    /// Matched attribute value, lowercase.
    pub prop: &'static str,
    /// Output slot the value is routed to.
    pub target: Target,
}

/// Declarative description of one meta-tag metadata source.
pub struct MetaFilter {
    /// Source name, for diagnostics.
    pub name: &'static str,
    /// Attribute the source declares its property names in
    /// (`property` for Open Graph, `name` otherwise).
    pub key: &'static str,
    /// Pattern an attribute value must satisfy to belong to this source.
    pub pattern: &'static LazyLock<Regex>,
    /// Tag stamped onto an image record aggregated from this source.
    /// `None` for sources with no image concept.
    pub image_source: Option<ImageSource>,
    /// Property routing table.
    pub rules: &'static [MetaRule],
}

/// Declarative description of one link-tag icon source.
pub struct LinkFilter {
    /// Source name, for diagnostics.
    pub name: &'static str,
    /// Attribute to match on (`rel`).
    pub key: &'static str,
    /// Pattern the attribute value must satisfy.
    pub pattern: &'static LazyLock<Regex>,
    /// Tag stamped onto every image record this source yields.
    pub source: ImageSource,
}

static OPEN_GRAPH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^og:").expect("valid regex"));

static TWITTER_CARD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^twitter:").expect("valid regex"));

static GENERIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(description|keywords|title)").expect("valid regex"));

static TOUCH_ICON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(apple-touch-icon|apple-touch-icon-precomposed)").expect("valid regex")
});

static FAVICON_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(shortcut icon|icon)").expect("valid regex"));

/// Open Graph meta tags (<http://ogp.me/>).
pub static OPEN_GRAPH: MetaFilter = MetaFilter {
    name: "open_graph",
    key: "property",
    pattern: &OPEN_GRAPH_PATTERN,
    image_source: Some(ImageSource::Og),
    rules: &[
        MetaRule { prop: "og:url", target: Target::Page(PageField::Url) },
        MetaRule { prop: "og:title", target: Target::Page(PageField::Title) },
        MetaRule { prop: "og:description", target: Target::Page(PageField::Description) },
        MetaRule { prop: "og:locale", target: Target::Page(PageField::Locale) },
        MetaRule { prop: "og:image", target: Target::Image(MediaField::Src) },
        MetaRule { prop: "og:image:width", target: Target::Image(MediaField::Width) },
        MetaRule { prop: "og:image:height", target: Target::Image(MediaField::Height) },
        MetaRule { prop: "og:video", target: Target::Video(MediaField::Src) },
        MetaRule { prop: "og:video:width", target: Target::Video(MediaField::Width) },
        MetaRule { prop: "og:video:height", target: Target::Video(MediaField::Height) },
        MetaRule { prop: "og:video:type", target: Target::Video(MediaField::ContentType) },
    ],
};

/// Twitter Card meta tags (<https://developer.x.com/en/docs/x-for-websites/cards>).
pub static TWITTER_CARD: MetaFilter = MetaFilter {
    name: "twitter_card",
    key: "name",
    pattern: &TWITTER_CARD_PATTERN,
    image_source: Some(ImageSource::Twitter),
    rules: &[
        MetaRule { prop: "twitter:url", target: Target::Page(PageField::Url) },
        MetaRule { prop: "twitter:title", target: Target::Page(PageField::Title) },
        MetaRule { prop: "twitter:description", target: Target::Page(PageField::Description) },
        MetaRule { prop: "twitter:image", target: Target::Image(MediaField::Src) },
        MetaRule { prop: "twitter:image:width", target: Target::Image(MediaField::Width) },
        MetaRule { prop: "twitter:image:height", target: Target::Image(MediaField::Height) },
        MetaRule { prop: "twitter:player", target: Target::Video(MediaField::Src) },
        MetaRule { prop: "twitter:player:width", target: Target::Video(MediaField::Width) },
        MetaRule { prop: "twitter:player:height", target: Target::Video(MediaField::Height) },
        MetaRule { prop: "twitter:player:content_type", target: Target::Video(MediaField::ContentType) },
    ],
};

/// Generic meta tags. Lowest priority, fills remaining gaps.
pub static GENERIC: MetaFilter = MetaFilter {
    name: "generic",
    key: "name",
    pattern: &GENERIC_PATTERN,
    image_source: None,
    rules: &[
        MetaRule { prop: "title", target: Target::Page(PageField::Title) },
        MetaRule { prop: "description", target: Target::Page(PageField::Description) },
        MetaRule { prop: "keywords", target: Target::Page(PageField::Keywords) },
    ],
};

/// Apple touch icon link tags.
pub static TOUCH_ICON: LinkFilter = LinkFilter {
    name: "touch_icon",
    key: "rel",
    pattern: &TOUCH_ICON_PATTERN,
    source: ImageSource::TouchIcon,
};

/// Favicon link tags.
pub static FAVICON: LinkFilter = LinkFilter {
    name: "favicon",
    key: "rel",
    pattern: &FAVICON_PATTERN,
    source: ImageSource::Favicon,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_match_case_insensitively() {
        assert!(OPEN_GRAPH.pattern.is_match("og:title"));
        assert!(OPEN_GRAPH.pattern.is_match("OG:Title"));
        assert!(TWITTER_CARD.pattern.is_match("twitter:image"));
        assert!(!OPEN_GRAPH.pattern.is_match("twitter:title"));
    }

    #[test]
    fn test_generic_pattern_is_prefix_anchored() {
        assert!(GENERIC_PATTERN.is_match("description"));
        assert!(GENERIC_PATTERN.is_match("keywords"));
        assert!(!GENERIC_PATTERN.is_match("og:description"));
    }

    #[test]
    fn test_icon_patterns() {
        assert!(TOUCH_ICON_PATTERN.is_match("apple-touch-icon"));
        assert!(TOUCH_ICON_PATTERN.is_match("apple-touch-icon-precomposed"));
        assert!(!TOUCH_ICON_PATTERN.is_match("icon"));

        assert!(FAVICON_PATTERN.is_match("icon"));
        assert!(FAVICON_PATTERN.is_match("shortcut icon"));
        assert!(!FAVICON_PATTERN.is_match("apple-touch-icon"));
    }

    #[test]
    fn test_every_rule_prop_satisfies_its_filter_pattern() {
        for filter in [&OPEN_GRAPH, &TWITTER_CARD, &GENERIC] {
            for rule in filter.rules {
                assert!(
                    filter.pattern.is_match(rule.prop),
                    "{} does not match its own pattern in {}",
                    rule.prop,
                    filter.name
                );
            }
        }
    }

    #[test]
    fn test_sources_with_image_rules_declare_a_stamp() {
        for filter in [&OPEN_GRAPH, &TWITTER_CARD, &GENERIC] {
            let has_image_rules = filter
                .rules
                .iter()
                .any(|rule| matches!(rule.target, Target::Image(_)));
            assert_eq!(has_image_rules, filter.image_source.is_some());
        }
    }
}
