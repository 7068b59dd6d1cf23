use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Turn a display title into an identifier: lowercase, with each run of
/// whitespace collapsed into a single `_`.
///
/// Different texts may normalize to the same id; such links are treated as
/// the same link for favorites and recents.
pub fn normalize_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                id.push('_');
            }
            in_whitespace = true;
        } else {
            id.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    id
}

/// Refers to one link instance in a model. Ids repeat across groups, handles
/// never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkHandle(pub(crate) u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    pub handle: LinkHandle,
    pub id: String,
    pub text: String,
    pub path: String,
    group_id: String,
    pub favorite: bool,
    pub active: bool,
    pub last_access: Option<DateTime<Utc>>,
}

impl Link {
    pub(crate) fn new(handle: LinkHandle, text: &str, path: &str, group_id: &str) -> Self {
        Self {
            handle,
            id: normalize_id(text),
            text: text.to_string(),
            path: path.to_string(),
            group_id: group_id.to_string(),
            favorite: false,
            active: false,
            last_access: None,
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }
}

/// Durable record of a favorited link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: String,
    pub text: String,
    pub path: String,
}

impl From<&Link> for FavoriteEntry {
    fn from(link: &Link) -> Self {
        Self {
            id: link.id.clone(),
            text: link.text.clone(),
            path: link.path.clone(),
        }
    }
}

/// Durable record of a visited link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEntry {
    pub id: String,
    pub text: String,
    pub path: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_access_timestamp: DateTime<Utc>,
}
