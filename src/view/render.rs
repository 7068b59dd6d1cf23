// Materializes the navigation model into sidebar nodes
use crate::dom::{Document, NodeId};
use crate::error::{Result, SidebarError};
use crate::message::Message;
use crate::model::{Group, Link, LinkHandle, NavigationModel, RECENTS_GROUP_ID};
use crate::store::KeyValueStore;
use std::collections::HashMap;

pub const SIDEBAR_CONTAINER_ID: &str = "sidebar_navigation";

pub const GROUP_CLASS: &str = "navigation-group";
pub const GROUP_TITLE_CLASS: &str = "navigation-group-title";
pub const LINKS_CONTAINER_CLASS: &str = "navigation-links-container";
pub const LINK_CLASS: &str = "navigation-link";
pub const FAVORITE_ICON_CLASS: &str = "favorite-icon";
pub const ICON_FONT_CLASS: &str = "material-icons";
pub const ACTIVE_CLASS: &str = "active";

pub const STAR_ICON: &str = "star";
pub const STAR_BORDER_ICON: &str = "star_border";
const ADD_FAVORITE_TITLE: &str = "Add to Favorites";
const REMOVE_FAVORITE_TITLE: &str = "Remove from Favorites";

#[derive(Clone, Copy, Debug)]
struct GroupNodes {
    links_container: NodeId,
}

/// Keeps the sidebar nodes in step with a [`NavigationModel`].
///
/// Holds node ids only; all link state is read from the model on every draw.
#[derive(Debug)]
pub struct RenderCoordinator {
    root: NodeId,
    groups: HashMap<String, GroupNodes>,
    icons: HashMap<LinkHandle, NodeId>,
}

impl RenderCoordinator {
    /// Fails when the host document has no sidebar container.
    pub fn attach<D: Document>(document: &D) -> Result<Self> {
        let root = document
            .find_by_id(SIDEBAR_CONTAINER_ID)
            .ok_or_else(|| SidebarError::MissingContainer(SIDEBAR_CONTAINER_ID.to_string()))?;

        Ok(Self {
            root,
            groups: HashMap::new(),
            icons: HashMap::new(),
        })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Rendered favorite icon for `handle`, if that link is on screen.
    pub fn icon(&self, handle: LinkHandle) -> Option<NodeId> {
        self.icons.get(&handle).copied()
    }

    /// Rebuild the whole sidebar. Groups without members are left out.
    pub fn draw<S, D>(&mut self, model: &NavigationModel<S>, document: &mut D)
    where
        S: KeyValueStore,
        D: Document,
    {
        document.empty(self.root);
        self.groups.clear();
        self.icons.clear();

        for group in model.groups() {
            let links: Vec<&Link> = model.group_links(&group.id).collect();
            if links.is_empty() {
                continue;
            }
            let node = self.draw_group(group, &links, document);
            document.append_child(self.root, node);
        }
        tracing::debug!(groups = self.groups.len(), links = self.icons.len(), "drew sidebar");
    }

    /// Repopulate one group's links in place.
    ///
    /// A group that is not on screen yet, or has no members left, forces a
    /// full draw so group order holds and no empty group remains.
    pub fn redraw_group<S, D>(&mut self, model: &NavigationModel<S>, document: &mut D, group_id: &str)
    where
        S: KeyValueStore,
        D: Document,
    {
        let links: Vec<&Link> = model.group_links(group_id).collect();
        let Some(nodes) = self.groups.get(group_id).copied() else {
            self.draw(model, document);
            return;
        };
        if links.is_empty() {
            self.draw(model, document);
            return;
        }

        self.icons.retain(|&handle, _| model.link(handle).is_some());
        document.empty(nodes.links_container);
        for link in links {
            let node = self.draw_link(link, document);
            document.append_child(nodes.links_container, node);
        }
    }

    /// Reapply the favorite icon for each rendered link in `handles`.
    pub fn refresh_favorite_icons<S, D>(
        &self,
        model: &NavigationModel<S>,
        document: &mut D,
        handles: &[LinkHandle],
    ) where
        S: KeyValueStore,
        D: Document,
    {
        for &handle in handles {
            if let (Some(icon), Some(link)) = (self.icon(handle), model.link(handle)) {
                apply_favorite_icon(document, icon, link.favorite);
            }
        }
    }

    fn draw_group<D: Document>(&mut self, group: &Group, links: &[&Link], document: &mut D) -> NodeId {
        let node = document.create_element("div");
        document.add_class(node, GROUP_CLASS);

        let title = document.create_element("span");
        document.add_class(title, GROUP_TITLE_CLASS);
        document.set_text(title, &group.title);

        let links_container = document.create_element("div");
        document.add_class(links_container, LINKS_CONTAINER_CLASS);

        document.append_child(node, title);
        document.append_child(node, links_container);

        for link in links {
            let link_node = self.draw_link(link, document);
            document.append_child(links_container, link_node);
        }

        self.groups
            .insert(group.id.clone(), GroupNodes { links_container });
        node
    }

    fn draw_link<D: Document>(&mut self, link: &Link, document: &mut D) -> NodeId {
        let anchor = document.create_element("a");
        document.set_attribute(anchor, "href", &link.path);
        document.add_class(anchor, LINK_CLASS);
        // recents copies are never styled as the current page
        if link.active && link.group_id() != RECENTS_GROUP_ID {
            document.add_class(anchor, ACTIVE_CLASS);
        }
        document.on_click(anchor, Message::Navigate(link.path.clone()));

        let label = document.create_element("span");
        document.set_text(label, &link.text);

        let icon = document.create_element("button");
        document.add_class(icon, FAVORITE_ICON_CLASS);
        document.add_class(icon, ICON_FONT_CLASS);
        apply_favorite_icon(document, icon, link.favorite);
        document.on_click(icon, Message::ToggleFavorite(link.handle));

        document.append_child(anchor, label);
        document.append_child(anchor, icon);

        self.icons.insert(link.handle, icon);
        anchor
    }
}

fn apply_favorite_icon<D: Document>(document: &mut D, icon: NodeId, favorite: bool) {
    if favorite {
        document.set_text(icon, STAR_ICON);
        document.set_attribute(icon, "title", REMOVE_FAVORITE_TITLE);
        document.add_class(icon, ACTIVE_CLASS);
    } else {
        document.set_text(icon, STAR_BORDER_ICON);
        document.set_attribute(icon, "title", ADD_FAVORITE_TITLE);
        document.remove_class(icon, ACTIVE_CLASS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeTree;
    use crate::location::Location;
    use crate::model::{FavoriteEntry, FAVORITES_GROUP_ID};
    use crate::store::{MemoryStore, FAVORITE_LINKS};

    fn demo_model(page: &str, store: MemoryStore) -> NavigationModel<MemoryStore> {
        let location = Location::parse(&format!("http://localhost/{page}")).unwrap();
        let mut model = NavigationModel::new(store, location);
        model.add_link("Transactions", "Instruction", "instruction.html").unwrap();
        model.add_link("Transactions", "Enrollment", "enrollment.html").unwrap();
        for i in 1..=4 {
            model
                .add_link("Reports", &format!("Report {i}"), &format!("report_{i}.html"))
                .unwrap();
        }
        model
    }

    fn group_titles(tree: &NodeTree, root: NodeId) -> Vec<String> {
        tree.find_by_class(root, GROUP_TITLE_CLASS)
            .into_iter()
            .map(|id| tree.node(id).text.clone())
            .collect()
    }

    #[test]
    fn test_attach_requires_container() {
        let tree = NodeTree::new();
        assert!(matches!(
            RenderCoordinator::attach(&tree),
            Err(SidebarError::MissingContainer(_))
        ));
    }

    #[test]
    fn test_draw_skips_empty_groups() {
        let model = demo_model("index.html", MemoryStore::new());
        let mut tree = NodeTree::with_container(SIDEBAR_CONTAINER_ID);
        let mut view = RenderCoordinator::attach(&tree).unwrap();

        view.draw(&model, &mut tree);

        assert_eq!(group_titles(&tree, view.root()), ["Transactions", "Reports"]);
        assert_eq!(tree.children(view.root()).len(), 2);
    }

    #[test]
    fn test_draw_orders_groups_and_marks_active() {
        let mut store = MemoryStore::new();
        FAVORITE_LINKS
            .write(
                &mut store,
                &[FavoriteEntry {
                    id: "report_4".to_string(),
                    text: "Report 4".to_string(),
                    path: "report_4.html".to_string(),
                }],
            )
            .unwrap();
        let model = demo_model("enrollment.html", store);
        let mut tree = NodeTree::with_container(SIDEBAR_CONTAINER_ID);
        let mut view = RenderCoordinator::attach(&tree).unwrap();

        view.draw(&model, &mut tree);

        assert_eq!(
            group_titles(&tree, view.root()),
            ["Favorites", "Recents", "Transactions", "Reports"]
        );

        let active: Vec<_> = tree
            .find_by_class(view.root(), LINK_CLASS)
            .into_iter()
            .filter(|&id| tree.node(id).has_class(ACTIVE_CLASS))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(tree.node(active[0]).attribute("href"), Some("enrollment.html"));

        // the recents copy of enrollment exists but is not styled active
        let enrollment_links = tree
            .find_by_class(view.root(), LINK_CLASS)
            .into_iter()
            .filter(|&id| tree.node(id).attribute("href") == Some("enrollment.html"))
            .count();
        assert_eq!(enrollment_links, 2);
    }

    #[test]
    fn test_link_nodes_carry_icon_state_and_messages() {
        let mut store = MemoryStore::new();
        FAVORITE_LINKS
            .write(
                &mut store,
                &[FavoriteEntry {
                    id: "report_1".to_string(),
                    text: "Report 1".to_string(),
                    path: "report_1.html".to_string(),
                }],
            )
            .unwrap();
        let model = demo_model("index.html", store);
        let mut tree = NodeTree::with_container(SIDEBAR_CONTAINER_ID);
        let mut view = RenderCoordinator::attach(&tree).unwrap();
        view.draw(&model, &mut tree);

        let report_1 = model
            .group_links("reports")
            .find(|l| l.id == "report_1")
            .unwrap();
        let icon = tree.node(view.icon(report_1.handle).unwrap());
        assert_eq!(icon.text, STAR_ICON);
        assert_eq!(icon.attribute("title"), Some("Remove from Favorites"));
        assert!(icon.has_class(ACTIVE_CLASS));
        assert!(icon.has_class(ICON_FONT_CLASS));
        assert_eq!(
            icon.click_message(),
            Some(&Message::ToggleFavorite(report_1.handle))
        );

        let report_2 = model
            .group_links("reports")
            .find(|l| l.id == "report_2")
            .unwrap();
        let icon = tree.node(view.icon(report_2.handle).unwrap());
        assert_eq!(icon.text, STAR_BORDER_ICON);
        assert_eq!(icon.attribute("title"), Some("Add to Favorites"));
        assert!(!icon.has_class(ACTIVE_CLASS));
    }

    #[test]
    fn test_redraw_group_replaces_links_in_place() {
        let mut model = demo_model("index.html", MemoryStore::new());
        let mut tree = NodeTree::with_container(SIDEBAR_CONTAINER_ID);
        let mut view = RenderCoordinator::attach(&tree).unwrap();

        let report_1 = model.group_links("reports").next().unwrap().handle;
        let report_2 = model.group_links("reports").nth(1).unwrap().handle;
        model.toggle_favorite(report_1).unwrap();
        view.draw(&model, &mut tree);
        let favorites_group = tree.children(view.root())[0];

        model.toggle_favorite(report_2).unwrap();
        view.redraw_group(&model, &mut tree, FAVORITES_GROUP_ID);

        assert_eq!(tree.children(view.root())[0], favorites_group);
        let favorites: Vec<_> = model.group_links(FAVORITES_GROUP_ID).collect();
        assert_eq!(favorites.len(), 2);
        for link in favorites {
            let icon = view.icon(link.handle).unwrap();
            assert!(tree.is_attached(icon));
        }
    }

    #[test]
    fn test_redraw_of_emptied_group_removes_it() {
        let mut model = demo_model("index.html", MemoryStore::new());
        let mut tree = NodeTree::with_container(SIDEBAR_CONTAINER_ID);
        let mut view = RenderCoordinator::attach(&tree).unwrap();

        let report_1 = model.group_links("reports").next().unwrap().handle;
        model.toggle_favorite(report_1).unwrap();
        view.draw(&model, &mut tree);
        assert_eq!(group_titles(&tree, view.root())[0], "Favorites");

        model.toggle_favorite(report_1).unwrap();
        view.redraw_group(&model, &mut tree, FAVORITES_GROUP_ID);
        assert_eq!(group_titles(&tree, view.root()), ["Transactions", "Reports"]);
    }
}
