mod group;
mod link;
mod navigation;
mod sort;

pub use group::{Group, FAVORITES_GROUP_ID, RECENTS_GROUP_ID};
pub use link::{normalize_id, FavoriteEntry, Link, LinkHandle, RecentEntry};
pub use navigation::{FavoriteToggle, NavigationModel, RECENTS_CAPACITY};
pub use sort::{sort_favorites, sort_recents};
