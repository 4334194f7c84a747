//! MySQL-backed published-content read adapter.
//!
//! Implements the repository contract in SQL: visibility is enforced with
//! `status = 'published' AND deleted_at IS NULL`, ordering is
//! `sort_order ASC, created_at DESC`, and the row cap is a `LIMIT`. The
//! in-memory listing rules in `domain::listing` mirror these semantics.

use std::num::NonZeroU32;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::content::{
    ContentDraft, ContentId, ContentKind, ContentRecord, ContentStatus,
    Slug,
};
use crate::domain::ports::{ContentRepository, ContentRepositoryError};

use super::diesel_helpers::{diesel_error_message, pool_error_message};
use super::models::ContentRow;
use super::pool::{DbPool, PoolError};
use super::schema::content;

/// Diesel-backed implementation of the content read port.
#[derive(Clone)]
pub struct DieselContentRepository {
    pool: DbPool,
}

impl DieselContentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ContentRepositoryError {
    ContentRepositoryError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> ContentRepositoryError {
    ContentRepositoryError::query(diesel_error_message(error, "content read"))
}

/// Convert a database row into a domain record.
///
/// Rows that fail domain validation (unknown kind or status strings, broken
/// slugs) indicate schema drift and surface as query errors rather than
/// panics.
fn row_to_record(row: ContentRow) -> Result<ContentRecord, ContentRepositoryError> {
    let kind: ContentKind = row
        .kind
        .parse()
        .map_err(|err| ContentRepositoryError::query(format!("content row {}: {err}", row.id)))?;
    let status: ContentStatus = row
        .status
        .parse()
        .map_err(|err| ContentRepositoryError::query(format!("content row {}: {err}", row.id)))?;
    let slug = Slug::new(row.slug)
        .map_err(|err| ContentRepositoryError::query(format!("content row {}: {err}", row.id)))?;

    ContentRecord::new(ContentDraft {
        id: ContentId::new(row.id),
        kind,
        title: row.title,
        slug,
        body: row.body,
        teaser_text: row.teaser_text,
        teaser_image: row.teaser_image,
        featured_image: row.featured_image,
        status,
        sort_order: row.sort_order,
        published_at: row.published_at.map(|at| at.and_utc()),
        created_at: row.created_at.and_utc(),
        updated_at: row.updated_at.and_utc(),
        deleted_at: row.deleted_at.map(|at| at.and_utc()),
    })
    .map_err(|err| ContentRepositoryError::query(format!("content row: {err}")))
}

#[async_trait]
impl ContentRepository for DieselContentRepository {
    async fn fetch_published(
        &self,
        kind: ContentKind,
        limit: NonZeroU32,
    ) -> Result<Vec<ContentRecord>, ContentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ContentRow> = content::table
            .filter(content::kind.eq(kind.as_str()))
            .filter(content::status.eq(ContentStatus::Published.as_str()))
            .filter(content::deleted_at.is_null())
            .order((content::sort_order.asc(), content::created_at.desc()))
            .limit(i64::from(limit.get()))
            .select(ContentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn find_published_by_slug(
        &self,
        kind: ContentKind,
        slug: &str,
    ) -> Result<Option<ContentRecord>, ContentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ContentRow> = content::table
            .filter(content::slug.eq(slug))
            .filter(content::kind.eq(kind.as_str()))
            .filter(content::status.eq(ContentStatus::Published.as_str()))
            .filter(content::deleted_at.is_null())
            .select(ContentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_record).transpose()
    }
}
