// Current page location
use crate::error::{Result, SidebarError};
use url::Url;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    pub fn parse(location: &str) -> Result<Self> {
        let url = Url::parse(location).map_err(|source| SidebarError::InvalidLocation {
            location: location.to_string(),
            source,
        })?;
        Ok(Self { url })
    }

    pub fn pathname(&self) -> &str {
        self.url.path()
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Whether `path`, resolved against this location, names the same page.
    /// Query and fragment are ignored on both sides.
    pub fn matches(&self, path: &str) -> bool {
        match self.url.join(path) {
            Ok(target) => target.path() == self.url.path(),
            Err(_) => false,
        }
    }

    /// The location reached by following `path` from this page.
    pub fn resolve(&self, path: &str) -> Result<Self> {
        let url = self.url.join(path).map_err(|source| SidebarError::InvalidLocation {
            location: path.to_string(),
            source,
        })?;
        Ok(Self { url })
    }
}
