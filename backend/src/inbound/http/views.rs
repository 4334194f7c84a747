//! Template registry and view models for the public pages.
//!
//! Templates are compiled into the binary with `include_str!` so a deployed
//! server never depends on a template directory being present. Date
//! formatting happens here, in Rust, so the templates only ever see plain
//! strings.

use serde::Serialize;
use tera::Tera;

use crate::domain::teaser::{self, TeaserImage};
use crate::domain::{ContentKind, ContentRecord, SiteSettings};

/// Excerpt budget for article teasers, in characters.
pub const ARTICLE_TEASER_BUDGET: usize = 150;

/// Excerpt budget for photobook teasers, in characters.
pub const PHOTOBOOK_TEASER_BUDGET: usize = 120;

/// Date format used in teaser metadata and detail headers.
const DISPLAY_DATE_FORMAT: &str = "%-d %B %Y";

/// Build the template registry from the embedded template sources.
///
/// # Errors
/// Returns [`tera::Error`] when a template fails to parse, which is a build
/// defect rather than a runtime condition.
pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates([
        ("base.html", include_str!("../../../templates/base.html")),
        ("home.html", include_str!("../../../templates/home.html")),
        (
            "listing.html",
            include_str!("../../../templates/listing.html"),
        ),
        (
            "detail.html",
            include_str!("../../../templates/detail.html"),
        ),
        (
            "contact.html",
            include_str!("../../../templates/contact.html"),
        ),
        (
            "not_found.html",
            include_str!("../../../templates/not_found.html"),
        ),
    ])?;
    Ok(tera)
}

/// A content record flattened for list rendering.
#[derive(Debug, Clone, Serialize)]
pub struct TeaserView {
    pub title: String,
    pub url: String,
    pub image: Option<String>,
    pub date: String,
    pub excerpt: String,
}

impl TeaserView {
    /// Flatten a record into its teaser representation, applying both
    /// fallback chains.
    pub fn from_record(record: &ContentRecord) -> Self {
        let budget = excerpt_budget(record.kind());
        let image = match teaser::resolve_image(record) {
            TeaserImage::Url(url) => Some(url),
            TeaserImage::Placeholder => None,
        };
        Self {
            title: record.title().to_owned(),
            url: record.url(),
            image,
            date: format_display_date(record),
            excerpt: teaser::resolve_excerpt(record, budget),
        }
    }
}

/// Excerpt budget for a content kind. Pages never appear in listings, so
/// they share the article budget if one is ever rendered.
pub const fn excerpt_budget(kind: ContentKind) -> usize {
    match kind {
        ContentKind::Article | ContentKind::Page => ARTICLE_TEASER_BUDGET,
        ContentKind::Photobook => PHOTOBOOK_TEASER_BUDGET,
    }
}

/// Human-readable publication date for a record.
pub fn format_display_date(record: &ContentRecord) -> String {
    record.display_date().format(DISPLAY_DATE_FORMAT).to_string()
}

/// Base template context shared by every page: the settings block.
pub fn base_context(settings: &SiteSettings) -> tera::Context {
    let mut context = tera::Context::new();
    context.insert("settings", settings);
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContentDraft, ContentId, ContentStatus, Slug};
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn record(kind: ContentKind) -> ContentRecord {
        let created = Utc
            .with_ymd_and_hms(2025, 9, 14, 10, 30, 0)
            .single()
            .expect("valid timestamp");
        ContentRecord::new(ContentDraft {
            id: ContentId::new(1),
            kind,
            title: "Light and Shadow".to_owned(),
            slug: Slug::new("light-and-shadow").expect("valid slug"),
            body: r#"<p>Chasing contrast.</p><img src="/uploads/contrast.jpg">"#.to_owned(),
            teaser_text: None,
            teaser_image: None,
            featured_image: None,
            status: ContentStatus::Published,
            sort_order: 0,
            published_at: Some(created),
            created_at: created,
            updated_at: created,
            deleted_at: None,
        })
        .expect("valid record")
    }

    #[rstest]
    fn templates_parse() {
        build_templates().expect("embedded templates should parse");
    }

    #[rstest]
    fn teaser_view_flattens_record() {
        let view = TeaserView::from_record(&record(ContentKind::Article));
        assert_eq!(view.title, "Light and Shadow");
        assert_eq!(view.url, "/article/light-and-shadow");
        assert_eq!(view.image.as_deref(), Some("/uploads/contrast.jpg"));
        assert_eq!(view.date, "14 September 2025");
        assert_eq!(view.excerpt, "Chasing contrast.");
    }

    #[rstest]
    fn teaser_view_serialises_to_the_shape_templates_consume() {
        let view = TeaserView::from_record(&record(ContentKind::Photobook));
        let value = serde_json::to_value(&view).expect("view serialises");
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Light and Shadow",
                "url": "/photobook/light-and-shadow",
                "image": "/uploads/contrast.jpg",
                "date": "14 September 2025",
                "excerpt": "Chasing contrast.",
            })
        );
    }

    #[rstest]
    #[case(ContentKind::Article, ARTICLE_TEASER_BUDGET)]
    #[case(ContentKind::Photobook, PHOTOBOOK_TEASER_BUDGET)]
    #[case(ContentKind::Page, ARTICLE_TEASER_BUDGET)]
    fn budgets_follow_kind(#[case] kind: ContentKind, #[case] expected: usize) {
        assert_eq!(excerpt_budget(kind), expected);
    }

    #[rstest]
    fn base_context_carries_settings() {
        let context = base_context(&SiteSettings::default());
        let rendered = context
            .get("settings")
            .expect("settings present")
            .to_string();
        assert!(rendered.contains("Dalthaus Photography"));
    }
}
