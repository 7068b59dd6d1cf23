// Page bootstrap: declare the configured navigation, then draw once
use crate::config::NavigationGroup;
use crate::dom::Document;
use crate::error::Result;
use crate::sidebar::Sidebar;
use crate::store::KeyValueStore;

pub fn register<S, D>(sidebar: &mut Sidebar<S, D>, groups: &[NavigationGroup]) -> Result<()>
where
    S: KeyValueStore,
    D: Document,
{
    for group in groups {
        for link in &group.links {
            sidebar.add_link(&group.title, &link.text, &link.path)?;
        }
    }
    sidebar.draw();
    Ok(())
}
