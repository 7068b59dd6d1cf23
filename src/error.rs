use crate::model::LinkHandle;

#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    #[error("sidebar container `#{0}` not found in document")]
    MissingContainer(String),
    #[error("invalid page location `{location}`: {source}")]
    InvalidLocation {
        location: String,
        #[source]
        source: url::ParseError,
    },
    #[error("no link registered for {0:?}")]
    UnknownLink(LinkHandle),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode stored value: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode config: {0}")]
    ConfigEncode(#[from] toml::ser::Error),
    #[error("could not determine config directory")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, SidebarError>;
