use crate::bootstrap;
use crate::config::Config;
use crate::dom::NodeTree;
use crate::error::Result;
use crate::location::Location;
use crate::message::Message;
use crate::sidebar::Sidebar;
use crate::store::FileStore;
use crate::style::{self, Theme};
use crate::view::{paint_sidebar, SIDEBAR_CONTAINER_ID};
use eframe::egui;
use std::time::Instant;

pub struct Waymark {
    config: Config,
    store: FileStore,
    sidebar: Sidebar<FileStore, NodeTree>,
    theme: Theme,
    sidebar_width: f32,
    shown_title: String,
    error_message: Option<(String, Instant)>,
}

impl Waymark {
    pub fn new(config: Config, store: FileStore) -> Result<Self> {
        let start = Location::parse(&config.page.origin)?.resolve(&config.page.start)?;
        let sidebar = Self::load_page(&config, store.clone(), start)?;
        let theme = Theme::from_config(&config.theme.mode);
        let sidebar_width = config
            .panel
            .sidebar_width
            .clamp(style::SIDEBAR_MIN, style::SIDEBAR_MAX);

        Ok(Self {
            config,
            store,
            sidebar,
            theme,
            sidebar_width,
            shown_title: String::new(),
            error_message: None,
        })
    }

    /// A fresh page: new document, new model, visit registered by bootstrap.
    fn load_page(
        config: &Config,
        store: FileStore,
        location: Location,
    ) -> Result<Sidebar<FileStore, NodeTree>> {
        tracing::info!(location = location.as_str(), "loading page");
        let document = NodeTree::with_container(SIDEBAR_CONTAINER_ID);
        let mut sidebar = Sidebar::new(store, location, document)?;
        bootstrap::register(&mut sidebar, &config.navigation)?;
        Ok(sidebar)
    }

    pub fn title(&self) -> String {
        format!("Waymark - {}", self.sidebar.model().location().pathname())
    }

    fn update_message(&mut self, message: Message) {
        let result = self
            .sidebar
            .update(message)
            .and_then(|navigation| match navigation {
                Some(path) => self.navigate(&path),
                None => Ok(()),
            });
        if let Err(e) = result {
            tracing::warn!(error = %e, "sidebar update failed");
            self.set_error(e.to_string());
        }
    }

    fn navigate(&mut self, path: &str) -> Result<()> {
        let location = self.sidebar.model().location().resolve(path)?;
        self.sidebar = Self::load_page(&self.config, self.store.clone(), location)?;
        Ok(())
    }

    fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    fn clear_expired_messages(&mut self) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= style::MESSAGE_TIMEOUT_SECS {
                self.error_message = None;
            }
        }
    }

    fn render_page(&self, ui: &mut egui::Ui) {
        let model = self.sidebar.model();
        ui.heading(match model.active_link() {
            Some(link) => link.text.as_str(),
            None => "Home",
        });
        ui.separator();
        ui.label(model.location().as_str());
        if let Some(link) = model.active_link() {
            if let Some(when) = link.last_access {
                ui.label(format!(
                    "Visited {}",
                    when.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S")
                ));
            }
        }
    }
}

impl eframe::App for Waymark {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.theme.visuals());
        self.clear_expired_messages();
        let title = self.title();
        if title != self.shown_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.shown_title = title;
        }

        let mut clicked = None;

        // --- Bottom Bar ---
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.sidebar.model().location().pathname());
                if let Some((err, _)) = &self.error_message {
                    ui.colored_label(egui::Color32::RED, format!(" | {}", err));
                }
            });
        });

        // --- Sidebar ---
        egui::SidePanel::left("sidebar_panel")
            .resizable(true)
            .default_width(self.sidebar_width)
            .width_range(style::SIDEBAR_MIN..=style::SIDEBAR_MAX)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                clicked = paint_sidebar(ui, self.sidebar.document(), self.sidebar.view().root());
            });

        // --- Page ---
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_page(ui);
        });

        if let Some(message) = clicked {
            self.update_message(message);
        }
    }
}
