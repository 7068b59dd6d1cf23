// One sidebar per page: model, view and document wired together
use crate::dom::Document;
use crate::error::Result;
use crate::location::Location;
use crate::message::Message;
use crate::model::{LinkHandle, NavigationModel, FAVORITES_GROUP_ID};
use crate::store::KeyValueStore;
use crate::view::RenderCoordinator;

pub struct Sidebar<S, D> {
    model: NavigationModel<S>,
    view: RenderCoordinator,
    document: D,
}

impl<S: KeyValueStore, D: Document> Sidebar<S, D> {
    pub fn new(store: S, location: Location, document: D) -> Result<Self> {
        let view = RenderCoordinator::attach(&document)?;
        let model = NavigationModel::new(store, location);
        Ok(Self {
            model,
            view,
            document,
        })
    }

    pub fn model(&self) -> &NavigationModel<S> {
        &self.model
    }

    pub fn view(&self) -> &RenderCoordinator {
        &self.view
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn add_link(&mut self, group_title: &str, text: &str, path: &str) -> Result<LinkHandle> {
        self.model.add_link(group_title, text, path)
    }

    pub fn draw(&mut self) {
        self.view.draw(&self.model, &mut self.document);
    }

    /// Toggle, redraw the favorites group, then bring every icon for the
    /// same id in line.
    pub fn toggle_favorite(&mut self, handle: LinkHandle) -> Result<()> {
        let toggle = self.model.toggle_favorite(handle)?;
        self.view
            .redraw_group(&self.model, &mut self.document, FAVORITES_GROUP_ID);
        self.view
            .refresh_favorite_icons(&self.model, &mut self.document, &toggle.affected);
        Ok(())
    }

    /// Apply a message that stays within this page. Navigation leaves the
    /// page, so it is handed back to the caller.
    pub fn update(&mut self, message: Message) -> Result<Option<String>> {
        match message {
            Message::ToggleFavorite(handle) => {
                self.toggle_favorite(handle)?;
                Ok(None)
            }
            Message::Navigate(path) => Ok(Some(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap;
    use crate::config::default_navigation;
    use crate::dom::NodeTree;
    use crate::store::{MemoryStore, FAVORITE_LINKS};
    use crate::view::{ACTIVE_CLASS, GROUP_TITLE_CLASS, LINK_CLASS, SIDEBAR_CONTAINER_ID, STAR_ICON};

    fn page(path: &str, store: MemoryStore) -> Sidebar<MemoryStore, NodeTree> {
        let location = Location::parse(&format!("http://localhost/{path}")).unwrap();
        let mut sidebar =
            Sidebar::new(store, location, NodeTree::with_container(SIDEBAR_CONTAINER_ID)).unwrap();
        bootstrap::register(&mut sidebar, &default_navigation()).unwrap();
        sidebar
    }

    fn titles(sidebar: &Sidebar<MemoryStore, NodeTree>) -> Vec<String> {
        let tree = sidebar.document();
        tree.find_by_class(sidebar.view().root(), GROUP_TITLE_CLASS)
            .into_iter()
            .map(|id| tree.node(id).text.clone())
            .collect()
    }

    fn icon_texts_for(sidebar: &Sidebar<MemoryStore, NodeTree>, id: &str) -> Vec<String> {
        sidebar
            .model()
            .links()
            .iter()
            .filter(|link| link.id == id)
            .filter_map(|link| sidebar.view().icon(link.handle))
            .map(|icon| sidebar.document().node(icon).text.clone())
            .collect()
    }

    #[test]
    fn test_favoriting_report_2() {
        let mut sidebar = page("index.html", MemoryStore::new());
        assert_eq!(titles(&sidebar), ["Transactions", "Reports"]);

        let report_2 = sidebar
            .model()
            .group_links("reports")
            .find(|link| link.text == "Report 2")
            .map(|link| link.handle)
            .unwrap();
        let icon = sidebar.view().icon(report_2).unwrap();
        let message = sidebar.document().click(icon).unwrap();
        assert_eq!(sidebar.update(message).unwrap(), None);

        assert_eq!(
            sidebar.model().store().get("favoriteLinks").as_deref(),
            Some(r#"[{"id":"report_2","text":"Report 2","path":"report_2.html"}]"#)
        );
        assert_eq!(titles(&sidebar), ["Favorites", "Transactions", "Reports"]);

        let tree = sidebar.document();
        let favorites_group = tree.children(sidebar.view().root())[0];
        let favorite_links = tree.find_by_class(favorites_group, LINK_CLASS);
        assert_eq!(favorite_links.len(), 1);
        assert_eq!(tree.node(favorite_links[0]).attribute("href"), Some("report_2.html"));

        assert_eq!(icon_texts_for(&sidebar, "report_2"), [STAR_ICON, STAR_ICON]);
    }

    #[test]
    fn test_icons_stay_in_sync_across_groups() {
        let mut sidebar = page("index.html", MemoryStore::new());
        let report_3 = sidebar
            .model()
            .group_links("reports")
            .find(|link| link.id == "report_3")
            .map(|link| link.handle)
            .unwrap();
        let report_4 = sidebar
            .model()
            .group_links("reports")
            .find(|link| link.id == "report_4")
            .map(|link| link.handle)
            .unwrap();

        sidebar.toggle_favorite(report_3).unwrap();
        sidebar.toggle_favorite(report_4).unwrap();

        // unfavorite through the favorites-group copy
        let copy = sidebar
            .model()
            .group_links(FAVORITES_GROUP_ID)
            .find(|link| link.id == "report_3")
            .map(|link| link.handle)
            .unwrap();
        sidebar.toggle_favorite(copy).unwrap();

        assert_eq!(icon_texts_for(&sidebar, "report_3"), ["star_border"]);
        assert_eq!(icon_texts_for(&sidebar, "report_4"), [STAR_ICON, STAR_ICON]);
        for link in sidebar.model().links() {
            let icon = sidebar.view().icon(link.handle).unwrap();
            assert_eq!(sidebar.document().node(icon).text == STAR_ICON, link.favorite);
        }
    }

    #[test]
    fn test_enrollment_page_and_next_load() {
        let sidebar = page("enrollment.html", MemoryStore::new());
        assert_eq!(titles(&sidebar), ["Recents", "Transactions", "Reports"]);

        let tree = sidebar.document();
        let active: Vec<_> = tree
            .find_by_class(sidebar.view().root(), LINK_CLASS)
            .into_iter()
            .filter(|&id| tree.node(id).has_class(ACTIVE_CLASS))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(tree.node(active[0]).attribute("href"), Some("enrollment.html"));

        // the store outlives the page
        let store = sidebar.model().store().clone();
        let next = page("report_1.html", store);
        let recents: Vec<_> = next
            .model()
            .group_links(crate::model::RECENTS_GROUP_ID)
            .map(|link| link.id.as_str())
            .collect();
        assert_eq!(recents.len(), 2);
        assert!(recents.contains(&"enrollment"));
        assert!(recents.contains(&"report_1"));
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: String) -> Result<()> {
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied).into())
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_page_renders_when_storage_is_read_only() {
        let location = Location::parse("http://localhost/enrollment.html").unwrap();
        let mut sidebar = Sidebar::new(
            ReadOnlyStore,
            location,
            NodeTree::with_container(SIDEBAR_CONTAINER_ID),
        )
        .unwrap();
        bootstrap::register(&mut sidebar, &default_navigation()).unwrap();

        let tree = sidebar.document();
        let titles: Vec<_> = tree
            .find_by_class(sidebar.view().root(), GROUP_TITLE_CLASS)
            .into_iter()
            .map(|id| tree.node(id).text.clone())
            .collect();
        assert_eq!(titles, ["Recents", "Transactions", "Reports"]);
        assert_eq!(tree.find_by_class(sidebar.view().root(), LINK_CLASS).len(), 7);

        // toggling still reports the write failure
        let report_1 = sidebar
            .model()
            .group_links("reports")
            .next()
            .map(|link| link.handle)
            .unwrap();
        assert!(sidebar.toggle_favorite(report_1).is_err());
    }

    #[test]
    fn test_navigate_is_handed_back() {
        let mut sidebar = page("index.html", MemoryStore::new());
        let message = Message::Navigate("report_1.html".to_string());
        assert_eq!(
            sidebar.update(message).unwrap(),
            Some("report_1.html".to_string())
        );
    }

    #[test]
    fn test_favorites_survive_reload() {
        let mut store = MemoryStore::new();
        FAVORITE_LINKS.write(&mut store, &[]).unwrap();
        let mut sidebar = page("index.html", store);
        let enrollment = sidebar
            .model()
            .group_links("transactions")
            .find(|link| link.id == "enrollment")
            .map(|link| link.handle)
            .unwrap();
        sidebar.toggle_favorite(enrollment).unwrap();

        let reloaded = page("index.html", sidebar.model().store().clone());
        assert_eq!(titles(&reloaded), ["Favorites", "Transactions", "Reports"]);
        assert_eq!(icon_texts_for(&reloaded, "enrollment"), [STAR_ICON, STAR_ICON]);
    }
}
