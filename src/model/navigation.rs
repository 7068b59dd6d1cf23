// Navigation model - groups, links, favorites and recents
use super::group::{Group, FAVORITES_GROUP_ID, RECENTS_GROUP_ID};
use super::link::{normalize_id, FavoriteEntry, Link, LinkHandle, RecentEntry};
use super::sort::{sort_favorites, sort_recents};
use crate::error::{Result, SidebarError};
use crate::location::Location;
use crate::store::{KeyValueStore, FAVORITE_LINKS, RECENT_LINKS};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

pub const RECENTS_CAPACITY: usize = 3;

/// Result of flipping a link's favorite state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavoriteToggle {
    pub id: String,
    pub favorite: bool,
    /// Every link instance now carrying `id`, favorites group included.
    pub affected: Vec<LinkHandle>,
}

pub struct NavigationModel<S> {
    store: S,
    location: Location,
    groups: Vec<Group>,
    links: Vec<Link>,
    favorite_ids: HashSet<String>,
    next_handle: u64,
    clock: fn() -> DateTime<Utc>,
}

impl<S: KeyValueStore> NavigationModel<S> {
    /// Favorites come first, then recents, then whatever gets declared.
    pub fn new(store: S, location: Location) -> Self {
        let favorite_ids = FAVORITE_LINKS
            .read(&store)
            .into_iter()
            .map(|entry| entry.id)
            .collect();

        let mut model = Self {
            store,
            location,
            groups: vec![Group::favorites(), Group::recents()],
            links: Vec::new(),
            favorite_ids,
            next_handle: 0,
            clock: Utc::now,
        };
        model.rebuild_favorites();
        model.rebuild_recents();
        model
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Groups in render order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn link(&self, handle: LinkHandle) -> Option<&Link> {
        self.links.iter().find(|link| link.handle == handle)
    }

    pub fn group_links<'a>(&'a self, group_id: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |link| link.group_id() == group_id)
    }

    /// The declared link for the current page, if any.
    pub fn active_link(&self) -> Option<&Link> {
        self.links
            .iter()
            .find(|link| link.active && link.group_id() != RECENTS_GROUP_ID)
    }

    pub fn add_link(&mut self, group_title: &str, text: &str, path: &str) -> Result<LinkHandle> {
        let group_id = normalize_id(group_title);
        if !self.groups.iter().any(|group| group.id == group_id) {
            tracing::debug!(group = %group_id, "registering navigation group");
            self.groups.push(Group::new(group_title));
        }

        let handle = self.allocate_handle();
        let mut link = Link::new(handle, text, path, &group_id);
        link.favorite = self.favorite_ids.contains(&link.id);
        let is_current = self.location.matches(path);
        self.links.push(link);

        // a failed recents write must not keep the page from rendering
        if is_current {
            if let Err(e) = self.register_visit(handle) {
                tracing::warn!(path, error = %e, "failed to persist visit");
            }
        }
        Ok(handle)
    }

    /// Mark `handle` as the current page and move it to the tail of the
    /// persisted recents, evicting the oldest entry once the list is full.
    ///
    /// The in-memory state changes even when persisting fails.
    pub fn register_visit(&mut self, handle: LinkHandle) -> Result<()> {
        let now = (self.clock)();
        self.link_mut(handle)?;
        for link in &mut self.links {
            link.active = false;
        }
        let link = self.link_mut(handle)?;
        link.active = true;
        link.last_access = Some(now);
        let entry = RecentEntry {
            id: link.id.clone(),
            text: link.text.clone(),
            path: link.path.clone(),
            last_access_timestamp: now,
        };

        let mut recents = RECENT_LINKS.read(&self.store);
        recents.retain(|recent| recent.id != entry.id);
        while recents.len() >= RECENTS_CAPACITY {
            recents.remove(0);
        }
        tracing::debug!(id = %entry.id, "registering visit");
        recents.push(entry);
        let written = RECENT_LINKS.write(&mut self.store, &recents);

        self.rebuild_recents_from(recents);
        written
    }

    /// Flip the favorite state of `handle` against the stored list, rebuild
    /// the favorites group from storage and sync every link sharing the id.
    pub fn toggle_favorite(&mut self, handle: LinkHandle) -> Result<FavoriteToggle> {
        let link = self.link(handle).ok_or(SidebarError::UnknownLink(handle))?;
        let favorite = !link.favorite;
        let entry = FavoriteEntry::from(link);

        // Reread so writes from other windows survive.
        let mut favorites = FAVORITE_LINKS.read(&self.store);
        favorites.retain(|existing| existing.id != entry.id);
        if favorite {
            favorites.push(entry.clone());
        }
        FAVORITE_LINKS.write(&mut self.store, &favorites)?;
        tracing::debug!(id = %entry.id, favorite, "toggled favorite");

        if favorite {
            self.favorite_ids.insert(entry.id.clone());
        } else {
            self.favorite_ids.remove(&entry.id);
        }
        self.rebuild_favorites();

        let mut affected = Vec::new();
        for link in self.links.iter_mut().filter(|link| link.id == entry.id) {
            link.favorite = favorite;
            affected.push(link.handle);
        }

        Ok(FavoriteToggle {
            id: entry.id,
            favorite,
            affected,
        })
    }

    fn rebuild_favorites(&mut self) {
        self.links.retain(|link| link.group_id() != FAVORITES_GROUP_ID);

        let mut favorites = FAVORITE_LINKS.read(&self.store);
        sort_favorites(&mut favorites);
        for entry in favorites {
            let handle = self.allocate_handle();
            let mut link = Link::new(handle, &entry.text, &entry.path, FAVORITES_GROUP_ID);
            link.favorite = true;
            self.links.push(link);
        }
    }

    fn rebuild_recents(&mut self) {
        let recents = RECENT_LINKS.read(&self.store);
        self.rebuild_recents_from(recents);
    }

    fn rebuild_recents_from(&mut self, mut recents: Vec<RecentEntry>) {
        self.links.retain(|link| link.group_id() != RECENTS_GROUP_ID);

        sort_recents(&mut recents);
        for entry in recents {
            let handle = self.allocate_handle();
            let mut link = Link::new(handle, &entry.text, &entry.path, RECENTS_GROUP_ID);
            link.favorite = self.favorite_ids.contains(&link.id);
            link.last_access = Some(entry.last_access_timestamp);
            self.links.push(link);
        }
    }

    fn link_mut(&mut self, handle: LinkHandle) -> Result<&mut Link> {
        self.links
            .iter_mut()
            .find(|link| link.handle == handle)
            .ok_or(SidebarError::UnknownLink(handle))
    }

    fn allocate_handle(&mut self) -> LinkHandle {
        let handle = LinkHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }
}
