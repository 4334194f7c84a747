//! Content data model.
//!
//! A [`ContentRecord`] is one row of the `content` table: an article, a
//! photobook, or a standalone page. Records are created as drafts, move to
//! published (which stamps `published_at`), and may be soft-deleted at any
//! time by setting `deleted_at`. The public read path never hard-deletes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::slug::is_valid_slug;

/// Validation errors returned by [`ContentRecord::new`] and the wire-string
/// parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentValidationError {
    UnknownKind { value: String },
    UnknownStatus { value: String },
    EmptyTitle,
    InvalidSlug { value: String },
}

impl fmt::Display for ContentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind { value } => {
                write!(f, "unknown content kind: {value:?}")
            }
            Self::UnknownStatus { value } => {
                write!(f, "unknown content status: {value:?}")
            }
            Self::EmptyTitle => write!(f, "content title must not be empty"),
            Self::InvalidSlug { value } => write!(
                f,
                "content slug {value:?} must be lowercase letters, digits, or hyphens",
            ),
        }
    }
}

impl std::error::Error for ContentValidationError {}

/// Stable content identifier (auto-increment primary key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(i64);

impl ContentId {
    /// Wrap a raw database identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three kinds of content served by the public site.
///
/// The kind is fixed at creation; the wire strings match the `content.type`
/// enum column (`article`, `photobook`, `page`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Article,
    Photobook,
    Page,
}

impl ContentKind {
    /// Wire string stored in the database.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Photobook => "photobook",
            Self::Page => "page",
        }
    }

    /// Path prefix for detail URLs (`/article/{slug}`, `/photobook/{slug}`).
    ///
    /// Pages hang directly off the site root.
    pub const fn url_prefix(self) -> &'static str {
        match self {
            Self::Article => "/article",
            Self::Photobook => "/photobook",
            Self::Page => "",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = ContentValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "article" => Ok(Self::Article),
            "photobook" => Ok(Self::Photobook),
            "page" => Ok(Self::Page),
            other => Err(ContentValidationError::UnknownKind {
                value: other.to_owned(),
            }),
        }
    }
}

/// Publication status gating public visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Published,
}

impl ContentStatus {
    /// Wire string stored in the database.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentStatus {
    type Err = ContentValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(ContentValidationError::UnknownStatus {
                value: other.to_owned(),
            }),
        }
    }
}

/// URL-safe unique identifier for a content record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validate and construct a [`Slug`].
    pub fn new(value: impl Into<String>) -> Result<Self, ContentValidationError> {
        let raw = value.into();
        if !is_valid_slug(&raw) {
            return Err(ContentValidationError::InvalidSlug { value: raw });
        }
        Ok(Self(raw))
    }

    /// Borrow the slug as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl TryFrom<String> for Slug {
    type Error = ContentValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Field bundle for constructing a [`ContentRecord`].
#[derive(Debug, Clone)]
pub struct ContentDraft {
    pub id: ContentId,
    pub kind: ContentKind,
    pub title: String,
    pub slug: Slug,
    pub body: String,
    pub teaser_text: Option<String>,
    pub teaser_image: Option<String>,
    pub featured_image: Option<String>,
    pub status: ContentStatus,
    pub sort_order: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// One row of the `content` table.
///
/// ## Invariants
/// - `title` is non-empty once trimmed.
/// - A record is publicly visible iff `status == Published` and
///   `deleted_at` is unset; see [`ContentRecord::is_publicly_visible`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRecord {
    id: ContentId,
    kind: ContentKind,
    title: String,
    slug: Slug,
    body: String,
    teaser_text: Option<String>,
    teaser_image: Option<String>,
    featured_image: Option<String>,
    status: ContentStatus,
    sort_order: i32,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl ContentRecord {
    /// Validate a draft and construct a record.
    pub fn new(draft: ContentDraft) -> Result<Self, ContentValidationError> {
        if draft.title.trim().is_empty() {
            return Err(ContentValidationError::EmptyTitle);
        }
        let ContentDraft {
            id,
            kind,
            title,
            slug,
            body,
            teaser_text,
            teaser_image,
            featured_image,
            status,
            sort_order,
            published_at,
            created_at,
            updated_at,
            deleted_at,
        } = draft;
        Ok(Self {
            id,
            kind,
            title,
            slug,
            body,
            teaser_text,
            teaser_image,
            featured_image,
            status,
            sort_order,
            published_at,
            created_at,
            updated_at,
            deleted_at,
        })
    }

    /// Record identifier.
    pub const fn id(&self) -> ContentId {
        self.id
    }

    /// Content kind, fixed at creation.
    pub const fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Display title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// URL slug.
    pub const fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Full HTML body.
    pub fn body(&self) -> &str {
        self.body.as_str()
    }

    /// Stored teaser text, if an editor provided one.
    pub fn teaser_text(&self) -> Option<&str> {
        self.teaser_text.as_deref()
    }

    /// Explicit teaser image reference, if any.
    pub fn teaser_image(&self) -> Option<&str> {
        self.teaser_image.as_deref()
    }

    /// Explicit featured image reference, if any.
    pub fn featured_image(&self) -> Option<&str> {
        self.featured_image.as_deref()
    }

    /// Publication status.
    pub const fn status(&self) -> ContentStatus {
        self.status
    }

    /// Manual ordering weight; lower values list first.
    pub const fn sort_order(&self) -> i32 {
        self.sort_order
    }

    /// When the record was published, if it ever was.
    pub const fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    /// Creation timestamp.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last-modification timestamp.
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Soft-deletion timestamp; `Some` means invisible everywhere public.
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Whether the record may appear on the public site.
    ///
    /// Soft deletion wins over status: a published record with `deleted_at`
    /// set is invisible.
    pub const fn is_publicly_visible(&self) -> bool {
        matches!(self.status, ContentStatus::Published) && self.deleted_at.is_none()
    }

    /// Detail-page URL for this record (`/article/{slug}` and friends).
    pub fn url(&self) -> String {
        format!("{}/{}", self.kind.url_prefix(), self.slug)
    }

    /// Date shown in teaser metadata: `published_at` with a `created_at`
    /// fallback for legacy rows published before the column existed.
    pub const fn display_date(&self) -> DateTime<Utc> {
        match self.published_at {
            Some(at) => at,
            None => self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn draft(status: ContentStatus, deleted: bool) -> ContentDraft {
        let created = Utc.with_ymd_and_hms(2025, 8, 29, 12, 0, 0).single();
        let created = created.expect("valid timestamp");
        ContentDraft {
            id: ContentId::new(1),
            kind: ContentKind::Article,
            title: "The title is about the dog!".to_owned(),
            slug: Slug::new("welcome").expect("valid slug"),
            body: "<p>The quick brown fox jumped over the lazy dog.</p>".to_owned(),
            teaser_text: None,
            teaser_image: None,
            featured_image: None,
            status,
            sort_order: 0,
            published_at: None,
            created_at: created,
            updated_at: created,
            deleted_at: deleted.then_some(created),
        }
    }

    #[rstest]
    #[case("article", ContentKind::Article)]
    #[case("photobook", ContentKind::Photobook)]
    #[case("page", ContentKind::Page)]
    fn kind_round_trips_through_wire_strings(#[case] wire: &str, #[case] kind: ContentKind) {
        assert_eq!(wire.parse::<ContentKind>().expect("known kind"), kind);
        assert_eq!(kind.as_str(), wire);
    }

    #[rstest]
    fn unknown_kind_is_rejected() {
        let err = "gallery".parse::<ContentKind>().expect_err("unknown kind");
        assert_eq!(
            err,
            ContentValidationError::UnknownKind {
                value: "gallery".to_owned()
            }
        );
    }

    #[rstest]
    #[case("welcome-to-dalthaus-net")]
    #[case("street-photography-2")]
    fn valid_slugs_are_accepted(#[case] value: &str) {
        let slug = Slug::new(value).expect("valid slug");
        assert_eq!(slug.as_str(), value);
    }

    #[rstest]
    #[case("")]
    #[case("Has Spaces")]
    #[case("UPPER")]
    #[case(" padded ")]
    fn invalid_slugs_are_rejected(#[case] value: &str) {
        assert!(Slug::new(value).is_err());
    }

    #[rstest]
    fn blank_title_is_rejected() {
        let mut d = draft(ContentStatus::Draft, false);
        d.title = "   ".to_owned();
        let err = ContentRecord::new(d).expect_err("blank title rejected");
        assert_eq!(err, ContentValidationError::EmptyTitle);
    }

    #[rstest]
    #[case(ContentStatus::Published, false, true)]
    #[case(ContentStatus::Published, true, false)]
    #[case(ContentStatus::Draft, false, false)]
    #[case(ContentStatus::Draft, true, false)]
    fn visibility_requires_published_and_not_deleted(
        #[case] status: ContentStatus,
        #[case] deleted: bool,
        #[case] visible: bool,
    ) {
        let record = ContentRecord::new(draft(status, deleted)).expect("valid record");
        assert_eq!(record.is_publicly_visible(), visible);
    }

    #[rstest]
    fn article_url_uses_kind_prefix() {
        let record = ContentRecord::new(draft(ContentStatus::Published, false));
        let record = record.expect("valid record");
        assert_eq!(record.url(), "/article/welcome");
    }
}
