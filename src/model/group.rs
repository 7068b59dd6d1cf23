use super::link::normalize_id;

pub const FAVORITES_GROUP_ID: &str = "favorites";
pub const RECENTS_GROUP_ID: &str = "recents";

const FAVORITES_TITLE: &str = "Favorites";
const RECENTS_TITLE: &str = "Recents";

/// A titled section of the sidebar. Members are whatever links carry this
/// group's id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub id: String,
    pub title: String,
}

impl Group {
    pub fn new(title: &str) -> Self {
        Self {
            id: normalize_id(title),
            title: title.to_string(),
        }
    }

    pub fn favorites() -> Self {
        Self::new(FAVORITES_TITLE)
    }

    pub fn recents() -> Self {
        Self::new(RECENTS_TITLE)
    }
}
