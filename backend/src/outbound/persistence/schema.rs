//! Diesel table definitions for the MySQL schema.
//!
//! These definitions must match the deployed schema exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Articles, photobooks, and standalone pages.
    ///
    /// `type` and `status` are MySQL enum columns read as strings. A row is
    /// publicly visible only when `status = 'published'` and `deleted_at`
    /// is NULL.
    content (id) {
        /// Primary key (auto-increment).
        id -> Bigint,
        /// Content kind: `article`, `photobook`, or `page`.
        #[sql_name = "type"]
        kind -> Varchar,
        /// Display title.
        title -> Varchar,
        /// Unique URL slug.
        slug -> Varchar,
        /// Full HTML body.
        body -> Longtext,
        /// Optional editor-provided teaser text.
        teaser_text -> Nullable<Text>,
        /// Optional explicit teaser image path.
        teaser_image -> Nullable<Varchar>,
        /// Optional explicit featured image path.
        featured_image -> Nullable<Varchar>,
        /// Publication status: `draft` or `published`.
        status -> Varchar,
        /// Manual listing order; lower lists first.
        sort_order -> Integer,
        /// Publication timestamp, set on first publish.
        published_at -> Nullable<Datetime>,
        /// Row creation timestamp.
        created_at -> Datetime,
        /// Last modification timestamp.
        updated_at -> Datetime,
        /// Soft-deletion timestamp; non-NULL rows are invisible publicly.
        deleted_at -> Nullable<Datetime>,
    }
}

diesel::table! {
    /// Contact form submissions.
    contact_messages (id) {
        /// Primary key (auto-increment).
        id -> Bigint,
        /// Sender name.
        name -> Varchar,
        /// Sender email address.
        email -> Varchar,
        /// Subject line.
        subject -> Varchar,
        /// Message body.
        message -> Text,
        /// Submission timestamp.
        created_at -> Datetime,
    }
}

diesel::table! {
    /// Key/value site settings.
    settings (name) {
        /// Setting key.
        name -> Varchar,
        /// Raw string value; typed interpretation happens in the domain.
        value -> Text,
    }
}
