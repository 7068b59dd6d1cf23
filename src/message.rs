use crate::model::LinkHandle;

/// What a click on a sidebar node asks the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    Navigate(String),

    // Favorites
    ToggleFavorite(LinkHandle),
}
