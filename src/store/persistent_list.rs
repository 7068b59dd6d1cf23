use super::KeyValueStore;
use crate::error::Result;
use crate::model::{FavoriteEntry, RecentEntry};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

pub const FAVORITE_LINKS: PersistentList<FavoriteEntry> = PersistentList::new("favoriteLinks");
pub const RECENT_LINKS: PersistentList<RecentEntry> = PersistentList::new("recentLinks");

/// An ordered list of entries stored as one JSON array under `key`.
///
/// There is no partial update; callers read the whole list, change it and
/// write it back.
#[derive(Debug)]
pub struct PersistentList<T> {
    key: &'static str,
    _entry: PhantomData<fn() -> T>,
}

impl<T> Clone for PersistentList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PersistentList<T> {}

impl<T> PersistentList<T>
where
    T: Serialize + DeserializeOwned,
{
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _entry: PhantomData,
        }
    }

    /// Absent or unparsable values read as an empty list.
    pub fn read<S: KeyValueStore + ?Sized>(&self, store: &S) -> Vec<T> {
        let Some(raw) = store.get(self.key) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(key = self.key, error = %e, "discarding unparsable stored list");
                Vec::new()
            }
        }
    }

    pub fn write<S: KeyValueStore + ?Sized>(&self, store: &mut S, entries: &[T]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        store.set(self.key, raw)
    }
}
