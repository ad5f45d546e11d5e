//! Tolerant, regex-based matching of `<Image ...>` elements.
//!
//! This is not a JSX parser. The props text of an element runs up to the
//! first `>`, so a `>` inside an attribute value (an arrow function, a
//! comparison) cuts the element short.

use std::sync::LazyLock;

use regex::Regex;

static IMAGE_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<Image\s+([^>]+)>").unwrap());

static ALT_ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\balt\s*=").unwrap());

/// One `<Image ...>` element found in a file's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOccurrence<'a> {
    /// Byte offset of the leading `<`.
    pub offset: usize,
    /// Everything between `<Image` and the closing `>`, leading whitespace excluded.
    pub props: &'a str,
}

impl TagOccurrence<'_> {
    pub fn has_alt_attribute(&self) -> bool {
        has_alt_attribute(self.props)
    }

    /// The element re-wrapped as `<Image {props}>`.
    pub fn tag_text(&self) -> String {
        format!("<Image {}>", self.props)
    }
}

/// All non-overlapping image elements in `content`, left to right.
pub fn find_image_tags(content: &str) -> impl Iterator<Item = TagOccurrence<'_>> {
    IMAGE_TAG_REGEX.captures_iter(content).filter_map(|caps| {
        let whole = caps.get(0)?;
        let props = caps.get(1)?;
        Some(TagOccurrence {
            offset: whole.start(),
            props: props.as_str(),
        })
    })
}

/// Whether the props text carries an `alt` attribute.
///
/// `alt` must be a whole word followed by optional whitespace and `=`.
/// Matching is case-sensitive, so `Alt=` and `salt=` do not count.
pub fn has_alt_attribute(props: &str) -> bool {
    ALT_ATTRIBUTE_REGEX.is_match(props)
}

/// 1-based line number of a byte offset.
///
/// # Panics
///
/// Panics if `offset` is greater than `content.len()`.
pub fn line_number(content: &str, offset: usize) -> usize {
    content.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}
