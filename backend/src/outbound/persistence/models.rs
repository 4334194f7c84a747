//! Diesel row structs used by the persistence adapters.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{contact_messages, content, settings};

/// Queryable row for the `content` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = content)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub(crate) struct ContentRow {
    pub id: i64,
    pub kind: String,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub teaser_text: Option<String>,
    pub teaser_image: Option<String>,
    pub featured_image: Option<String>,
    pub status: String,
    pub sort_order: i32,
    pub published_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

/// Insertable row for contact form submissions.
///
/// `id` and `created_at` are filled by the database.
#[derive(Debug, Insertable)]
#[diesel(table_name = contact_messages)]
pub(crate) struct NewContactMessageRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

/// Queryable row for the `settings` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = settings)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub(crate) struct SettingRow {
    pub name: String,
    pub value: String,
}
