//! Teaser resolution: the image and excerpt shown in list views.
//!
//! Both fallback chains are total. A record with no usable image yields
//! [`TeaserImage::Placeholder`] rather than an error, and a record with no
//! stored teaser text falls back to a truncated, tag-stripped body excerpt.

use std::sync::OnceLock;

use regex::Regex;

use super::content::ContentRecord;

/// Resolved teaser image for a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeaserImage {
    /// A usable image URL, explicit or scavenged from the body.
    Url(String),
    /// Nothing usable; the view renders a placeholder block.
    Placeholder,
}

impl TeaserImage {
    /// The resolved URL, if one exists.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url.as_str()),
            Self::Placeholder => None,
        }
    }
}

static BODY_IMG_RE: OnceLock<Regex> = OnceLock::new();

fn body_img_regex() -> &'static Regex {
    BODY_IMG_RE.get_or_init(|| {
        // First <img> tag with a single- or double-quoted src attribute.
        let pattern = r#"(?i)<img[^>]+src\s*=\s*(?:"([^"]+)"|'([^']+)')"#;
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("teaser image regex failed to compile: {error}"))
    })
}

/// Extract the first image URL from an HTML body, if any.
pub fn first_image_src(body: &str) -> Option<&str> {
    let captures = body_img_regex().captures(body)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str())
}

/// Resolve the teaser image for a record.
///
/// Fallback order: explicit teaser image, explicit featured image, first
/// `<img>` in the body, placeholder.
pub fn resolve_image(record: &ContentRecord) -> TeaserImage {
    record
        .teaser_image()
        .or_else(|| record.featured_image())
        .or_else(|| first_image_src(record.body()))
        .map_or(TeaserImage::Placeholder, |url| {
            TeaserImage::Url(url.to_owned())
        })
}

/// Remove HTML tags from a fragment, keeping only text content.
///
/// Mirrors the loose semantics of a tag scan: anything from `<` to the next
/// `>` is dropped, and an unterminated tag swallows the rest of the input.
pub fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text
}

/// Resolve the teaser excerpt for a record.
///
/// Uses the stored teaser text when present; otherwise strips tags from the
/// body and truncates to `budget` characters at a word-safe boundary with a
/// trailing ellipsis.
pub fn resolve_excerpt(record: &ContentRecord, budget: usize) -> String {
    match record.teaser_text() {
        Some(text) if !text.trim().is_empty() => text.trim().to_owned(),
        _ => excerpt_from_body(record.body(), budget),
    }
}

/// Build an excerpt from an HTML body: strip tags, collapse surrounding
/// whitespace, truncate to `budget` characters, append `...` if truncated.
pub fn excerpt_from_body(body: &str, budget: usize) -> String {
    let text = strip_tags(body);
    let text = text.trim();
    if text.chars().count() <= budget {
        return text.to_owned();
    }

    let head: String = text.chars().take(budget).collect();
    // Cut back to the last word boundary so no word is split mid-way. A
    // single unbroken run longer than the budget is kept as-is.
    let truncated = match head.rfind(char::is_whitespace) {
        Some(boundary) if boundary > 0 => head[..boundary].trim_end(),
        _ => head.as_str(),
    };
    format!("{truncated}...")
}
