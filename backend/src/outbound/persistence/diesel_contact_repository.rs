//! MySQL-backed contact message write adapter.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::contact::ContactMessage;
use crate::domain::ports::{ContactMessageRepository, ContactRepositoryError};

use super::diesel_helpers::{diesel_error_message, pool_error_message};
use super::models::NewContactMessageRow;
use super::pool::{DbPool, PoolError};
use super::schema::contact_messages;

/// Diesel-backed implementation of the contact message port.
#[derive(Clone)]
pub struct DieselContactMessageRepository {
    pool: DbPool,
}

impl DieselContactMessageRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ContactRepositoryError {
    ContactRepositoryError::connection(pool_error_message(error))
}

#[async_trait]
impl ContactMessageRepository for DieselContactMessageRepository {
    async fn insert(&self, message: &ContactMessage) -> Result<(), ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewContactMessageRow {
            name: message.name(),
            email: message.email(),
            subject: message.subject(),
            message: message.message(),
        };

        diesel::insert_into(contact_messages::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| {
                ContactRepositoryError::write(diesel_error_message(err, "contact insert"))
            })
    }
}
