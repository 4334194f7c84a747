//! MySQL-backed site settings read adapter.
//!
//! Loads the whole key/value table and folds it into the typed
//! [`SiteSettings`] struct; defaults cover absent keys so a fresh install
//! renders sensibly before anything is configured.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{SettingsRepository, SettingsRepositoryError};
use crate::domain::settings::SiteSettings;

use super::diesel_helpers::{diesel_error_message, pool_error_message};
use super::models::SettingRow;
use super::pool::{DbPool, PoolError};
use super::schema::settings;

/// Diesel-backed implementation of the settings port.
#[derive(Clone)]
pub struct DieselSettingsRepository {
    pool: DbPool,
}

impl DieselSettingsRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SettingsRepositoryError {
    SettingsRepositoryError::connection(pool_error_message(error))
}

#[async_trait]
impl SettingsRepository for DieselSettingsRepository {
    async fn load(&self) -> Result<SiteSettings, SettingsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<SettingRow> = settings::table
            .select(SettingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| {
                SettingsRepositoryError::query(diesel_error_message(err, "settings read"))
            })?;

        Ok(SiteSettings::from_pairs(
            rows.into_iter().map(|row| (row.name, row.value)),
        ))
    }
}
