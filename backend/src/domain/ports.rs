//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of returning `anyhow::Result`. The page
//! handlers, not the adapters, decide what a failure means for the visitor:
//! the data layer reports, the caller degrades.

use std::num::NonZeroU32;

use async_trait::async_trait;
use thiserror::Error;

use super::contact::ContactMessage;
use super::content::{ContentKind, ContentRecord};
use super::settings::SiteSettings;

/// Errors surfaced by [`ContentRepository`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentRepositoryError {
    /// Database connectivity failures.
    #[error("content repository connection failed: {message}")]
    Connection { message: String },
    /// Query execution or row conversion failures.
    #[error("content repository query failed: {message}")]
    Query { message: String },
}

impl ContentRepositoryError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Errors surfaced by [`ContactMessageRepository`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactRepositoryError {
    /// Database connectivity failures.
    #[error("contact repository connection failed: {message}")]
    Connection { message: String },
    /// Insert failures.
    #[error("contact message insert failed: {message}")]
    Write { message: String },
}

impl ContactRepositoryError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for write failures.
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
}

/// Errors surfaced by [`SettingsRepository`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsRepositoryError {
    /// Database connectivity failures.
    #[error("settings repository connection failed: {message}")]
    Connection { message: String },
    /// Query failures.
    #[error("settings repository query failed: {message}")]
    Query { message: String },
}

impl SettingsRepositoryError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Read port for published content.
///
/// Both operations must honour the visibility invariant: records with
/// `status != published` or `deleted_at` set are never returned.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Fetch up to `limit` visible records of `kind`, ordered by
    /// `sort_order` ascending then `created_at` descending.
    async fn fetch_published(
        &self,
        kind: ContentKind,
        limit: NonZeroU32,
    ) -> Result<Vec<ContentRecord>, ContentRepositoryError>;

    /// Fetch the visible record of `kind` with the given slug, if any.
    async fn find_published_by_slug(
        &self,
        kind: ContentKind,
        slug: &str,
    ) -> Result<Option<ContentRecord>, ContentRepositoryError>;
}

/// Write port for contact form submissions.
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Persist one submission. A plain single-row insert; no transaction
    /// coordination beyond the database's own atomicity.
    async fn insert(&self, message: &ContactMessage) -> Result<(), ContactRepositoryError>;
}

/// Read port for site settings.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Load the typed settings snapshot for one request.
    async fn load(&self) -> Result<SiteSettings, SettingsRepositoryError>;
}
