//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and remain testable without a database.

use std::sync::Arc;

use tera::Tera;

use crate::domain::ports::{ContactMessageRepository, ContentRepository, SettingsRepository};
use crate::domain::sample_content::{
    FixtureContactMessageRepository, FixtureSettingsRepository, SampleContentRepository,
};

/// Dependency bundle for the public page handlers.
#[derive(Clone)]
pub struct PagesState {
    pub content: Arc<dyn ContentRepository>,
    pub contact: Arc<dyn ContactMessageRepository>,
    pub settings: Arc<dyn SettingsRepository>,
    pub templates: Tera,
}

impl PagesState {
    /// Construct state from explicit port implementations.
    ///
    /// # Errors
    /// Returns [`tera::Error`] when the embedded templates fail to parse.
    pub fn new(
        content: Arc<dyn ContentRepository>,
        contact: Arc<dyn ContactMessageRepository>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Result<Self, tera::Error> {
        Ok(Self {
            content,
            contact,
            settings,
            templates: super::views::build_templates()?,
        })
    }

    /// State backed entirely by fixtures, used when no database pool is
    /// configured and by tests.
    ///
    /// # Errors
    /// Returns [`tera::Error`] when the embedded templates fail to parse.
    pub fn fixtures() -> Result<Self, tera::Error> {
        Self::new(
            Arc::new(SampleContentRepository),
            Arc::new(FixtureContactMessageRepository),
            Arc::new(FixtureSettingsRepository),
        )
    }
}
