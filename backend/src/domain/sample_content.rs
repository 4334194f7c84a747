//! Static sample content and fixture port implementations.
//!
//! The public pages must never show a raw error to a visitor. When the
//! database is unreachable the handlers log the failure and render these
//! records instead, and when the server is started without a pool the
//! fixture repositories below stand in for the real adapters.

use std::num::NonZeroU32;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;

use super::contact::ContactMessage;
use super::content::{
    ContentDraft, ContentId, ContentKind, ContentRecord, ContentStatus, Slug,
};
use super::listing;
use super::ports::{
    ContactMessageRepository, ContactRepositoryError, ContentRepository, ContentRepositoryError,
    SettingsRepository, SettingsRepositoryError,
};
use super::settings::SiteSettings;

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid sample timestamp {year}-{month}-{day}"))
}

fn sample(
    id: i64,
    kind: ContentKind,
    title: &str,
    slug: &str,
    body: &str,
    created: DateTime<Utc>,
) -> ContentRecord {
    let draft = ContentDraft {
        id: ContentId::new(id),
        kind,
        title: title.to_owned(),
        slug: Slug::new(slug).unwrap_or_else(|err| panic!("invalid sample slug: {err}")),
        body: body.to_owned(),
        teaser_text: None,
        teaser_image: None,
        featured_image: None,
        status: ContentStatus::Published,
        sort_order: 0,
        published_at: Some(created),
        created_at: created,
        updated_at: created,
        deleted_at: None,
    };
    ContentRecord::new(draft).unwrap_or_else(|err| panic!("invalid sample record: {err}"))
}

/// Sample articles shown when the database is unavailable.
pub fn sample_articles() -> Vec<ContentRecord> {
    vec![
        sample(
            1,
            ContentKind::Article,
            "Ramchargers Conquer The Automatic",
            "ramchargers-conquer-the-automatic",
            "<p>In the early 1960s, a renegade group of Chrysler engineers known as \
             The Ramchargers were rewriting the rules of drag racing. Operating out \
             of Detroit...</p>",
            day(2025, 9, 1),
        ),
        sample(
            2,
            ContentKind::Article,
            "The title is about the dog!",
            "welcome",
            "<p>The quick brown fox jumped over the lazy dog's back but landed in \
             the snow bank...giving the dog a good laugh as he was...</p>",
            day(2025, 8, 29),
        ),
        sample(
            3,
            ContentKind::Article,
            "Street Photography in Urban Landscapes",
            "street-photography-urban",
            "<p>Capturing the essence of city life through the lens requires \
             patience, timing, and an eye for the extraordinary in the ordinary...</p>",
            day(2025, 8, 25),
        ),
        sample(
            4,
            ContentKind::Article,
            "Light and Shadow: The Art of Portrait Photography",
            "light-shadow-portraits",
            "<p>Understanding how light interacts with the human form is fundamental \
             to creating compelling portraits that speak to the soul...</p>",
            day(2025, 8, 20),
        ),
    ]
}

/// Sample photobooks shown when the database is unavailable.
pub fn sample_photobooks() -> Vec<ContentRecord> {
    vec![
        sample(
            101,
            ContentKind::Photobook,
            "The Storyteller's Legacy",
            "storytellers-legacy",
            "<p>Once upon a time, in a small village nestled between rolling hills \
             and ancient forests, there lived a young photographer named Elena. She \
             had inherited...</p>",
            day(2025, 8, 29),
        ),
        sample(
            102,
            ContentKind::Photobook,
            "Moments in Time",
            "moments-in-time",
            "<p>A collection of candid moments captured during street photography \
             sessions across various cities, showcasing the beauty of everyday \
             life...</p>",
            day(2025, 8, 15),
        ),
        sample(
            103,
            ContentKind::Photobook,
            "Natural Wonders",
            "natural-wonders",
            "<p>Exploring the breathtaking landscapes and wildlife found in national \
             parks, captured through the lens of environmental photography...</p>",
            day(2025, 8, 10),
        ),
    ]
}

/// Sample records of one kind.
pub fn sample_records(kind: ContentKind) -> Vec<ContentRecord> {
    match kind {
        ContentKind::Article => sample_articles(),
        ContentKind::Photobook => sample_photobooks(),
        // No sample pages exist: fabricating an About page body would be
        // worse than the 404 the handler renders instead.
        ContentKind::Page => Vec::new(),
    }
}

/// In-memory [`ContentRepository`] backed by the sample records.
///
/// Used when the server runs without a database pool and by tests that need
/// a repository honouring the full listing contract.
#[derive(Debug, Clone, Default)]
pub struct SampleContentRepository;

#[async_trait]
impl ContentRepository for SampleContentRepository {
    async fn fetch_published(
        &self,
        kind: ContentKind,
        limit: NonZeroU32,
    ) -> Result<Vec<ContentRecord>, ContentRepositoryError> {
        Ok(listing::select_published(sample_records(kind), kind, limit))
    }

    async fn find_published_by_slug(
        &self,
        kind: ContentKind,
        slug: &str,
    ) -> Result<Option<ContentRecord>, ContentRepositoryError> {
        let records = sample_records(kind);
        Ok(listing::find_listed_by_slug(records.iter(), kind, slug).cloned())
    }
}

/// Contact fixture that logs and discards submissions.
#[derive(Debug, Clone, Default)]
pub struct FixtureContactMessageRepository;

#[async_trait]
impl ContactMessageRepository for FixtureContactMessageRepository {
    async fn insert(&self, message: &ContactMessage) -> Result<(), ContactRepositoryError> {
        debug!(from = message.email(), "discarding contact message (fixture)");
        Ok(())
    }
}

/// Settings fixture serving the declared defaults.
#[derive(Debug, Clone, Default)]
pub struct FixtureSettingsRepository;

#[async_trait]
impl SettingsRepository for FixtureSettingsRepository {
    async fn load(&self) -> Result<SiteSettings, SettingsRepositoryError> {
        Ok(SiteSettings::default())
    }
}
