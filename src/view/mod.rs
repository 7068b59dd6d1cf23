mod panel;
mod render;

pub use panel::paint_sidebar;
pub use render::{
    RenderCoordinator, ACTIVE_CLASS, FAVORITE_ICON_CLASS, GROUP_CLASS, GROUP_TITLE_CLASS,
    ICON_FONT_CLASS, LINKS_CONTAINER_CLASS, LINK_CLASS, SIDEBAR_CONTAINER_ID, STAR_BORDER_ICON,
    STAR_ICON,
};
