//! Domain entities, listing rules, and ports.
//!
//! Purpose: define the strongly typed content model used by the HTTP pages
//! and the persistence layer, plus the pure listing/teaser rules those
//! layers share. Keep types immutable and document invariants in each
//! type's Rustdoc.
//!
//! Public surface:
//! - `ContentRecord`, `ContentKind`, `ContentStatus`, `Slug` — the content
//!   model and its visibility invariant.
//! - `listing`, `teaser` — pure query/fallback rules.
//! - `ports` — repository traits with typed errors.
//! - `sample_content` — degrade-path fixtures.

pub mod contact;
pub mod content;
pub mod listing;
pub mod ports;
pub mod sample_content;
pub mod settings;
pub(crate) mod slug;
pub mod teaser;

pub use self::contact::{ContactMessage, ContactValidationError};
pub use self::content::{
    ContentDraft, ContentId, ContentKind, ContentRecord, ContentStatus, ContentValidationError,
    Slug,
};
pub use self::settings::SiteSettings;
