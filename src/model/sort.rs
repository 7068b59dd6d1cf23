// Display ordering for the synthesized groups
use super::link::{FavoriteEntry, RecentEntry};

/// Order favorites by their serialized JSON text.
///
/// Whole entries are compared as text rather than by a chosen field. Since
/// `id` serializes first, this sorts by id.
pub fn sort_favorites(entries: &mut [FavoriteEntry]) {
    entries.sort_by_cached_key(|entry| serde_json::to_string(entry).unwrap_or_default());
}

/// Most recent first. On equal timestamps the entry appended later wins.
pub fn sort_recents(entries: &mut [RecentEntry]) {
    entries.reverse();
    entries.sort_by(|a, b| b.last_access_timestamp.cmp(&a.last_access_timestamp));
}
