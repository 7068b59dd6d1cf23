pub mod app;
pub mod bootstrap;
pub mod config;
pub mod dom;
pub mod error;
pub mod location;
pub mod logging;
pub mod message;
pub mod model;
pub mod sidebar;
pub mod store;
pub mod style;
pub mod view;

pub use error::{Result, SidebarError};
pub use sidebar::Sidebar;
