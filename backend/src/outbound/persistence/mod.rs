//! Persistence adapters backed by Diesel and MySQL.

mod diesel_contact_repository;
mod diesel_content_repository;
mod diesel_helpers;
mod diesel_settings_repository;
mod models;
pub(crate) mod schema;

pub mod pool;

pub use diesel_contact_repository::DieselContactMessageRepository;
pub use diesel_content_repository::DieselContentRepository;
pub use diesel_settings_repository::DieselSettingsRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
