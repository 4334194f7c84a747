//! Listing rules for the published-content read path.
//!
//! These pure functions define the one query contract the public site relies
//! on: visible records of a kind, ordered by `sort_order` ascending with
//! ties broken by `created_at` descending, capped at a limit. The in-memory
//! fixture repository applies them directly and the Diesel adapter mirrors
//! them in SQL, so the contract is testable without a database.

use std::cmp::Ordering;
use std::num::NonZeroU32;

use super::content::{ContentKind, ContentRecord};

/// Whether `record` belongs in a public listing of `kind`.
pub fn is_listed(record: &ContentRecord, kind: ContentKind) -> bool {
    record.kind() == kind && record.is_publicly_visible()
}

/// Listing order: `sort_order` ascending, then `created_at` descending.
pub fn listing_order(a: &ContentRecord, b: &ContentRecord) -> Ordering {
    a.sort_order()
        .cmp(&b.sort_order())
        .then_with(|| b.created_at().cmp(&a.created_at()))
}

/// Apply the full listing contract to an in-memory record set.
pub fn select_published(
    records: impl IntoIterator<Item = ContentRecord>,
    kind: ContentKind,
    limit: NonZeroU32,
) -> Vec<ContentRecord> {
    let mut selected: Vec<ContentRecord> = records
        .into_iter()
        .filter(|record| is_listed(record, kind))
        .collect();
    selected.sort_by(listing_order);
    selected.truncate(limit.get() as usize);
    selected
}

/// Find the visible record of `kind` with the given slug, if any.
pub fn find_listed_by_slug<'a>(
    records: impl IntoIterator<Item = &'a ContentRecord>,
    kind: ContentKind,
    slug: &str,
) -> Option<&'a ContentRecord> {
    records
        .into_iter()
        .find(|record| is_listed(record, kind) && record.slug().as_str() == slug)
}
