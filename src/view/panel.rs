// Paints the sidebar node tree with egui
use super::render::{
    ACTIVE_CLASS, FAVORITE_ICON_CLASS, GROUP_CLASS, GROUP_TITLE_CLASS, LINKS_CONTAINER_CLASS,
    LINK_CLASS,
};
use crate::dom::{NodeId, NodeTree};
use crate::message::Message;
use crate::style;
use eframe::egui;

/// Draw every group under `root` and return the message of whatever was
/// clicked this frame.
pub fn paint_sidebar(ui: &mut egui::Ui, tree: &NodeTree, root: NodeId) -> Option<Message> {
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .id_salt("sidebar_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for &group in tree.children(root) {
                if !tree.node(group).has_class(GROUP_CLASS) {
                    continue;
                }
                if let Some(message) = paint_group(ui, tree, group) {
                    clicked = Some(message);
                }
                ui.add_space(style::GROUP_SPACING);
            }
        });

    clicked
}

fn paint_group(ui: &mut egui::Ui, tree: &NodeTree, group: NodeId) -> Option<Message> {
    let mut clicked = None;

    for &child in tree.children(group) {
        let node = tree.node(child);
        if node.has_class(GROUP_TITLE_CLASS) {
            ui.label(egui::RichText::new(&node.text).strong().small());
            ui.separator();
        } else if node.has_class(LINKS_CONTAINER_CLASS) {
            for &link in tree.children(child) {
                if tree.node(link).has_class(LINK_CLASS) {
                    if let Some(message) = paint_link(ui, tree, link) {
                        clicked = Some(message);
                    }
                }
            }
        }
    }

    clicked
}

fn paint_link(ui: &mut egui::Ui, tree: &NodeTree, link: NodeId) -> Option<Message> {
    let anchor = tree.node(link);
    let is_active = anchor.has_class(ACTIVE_CLASS);
    let default_color = ui.visuals().text_color();
    let mut clicked = None;

    ui.horizontal(|ui| {
        ui.set_min_height(style::ROW_HEIGHT);

        for &child in tree.children(link) {
            let node = tree.node(child);
            if node.has_class(FAVORITE_ICON_CLASS) {
                let color = if node.has_class(ACTIVE_CLASS) {
                    style::FAVORITE
                } else {
                    default_color
                };
                let mut button = ui.add(
                    egui::Button::new(
                        egui::RichText::new(style::icon_glyph(&node.text))
                            .size(style::ICON_SIZE)
                            .color(color),
                    )
                    .frame(false),
                );
                if let Some(title) = node.attribute("title") {
                    button = button.on_hover_text(title);
                }
                if button.clicked() {
                    clicked = tree.click(child);
                }
            } else {
                let color = if is_active { style::ACCENT } else { default_color };
                let mut text = egui::RichText::new(&node.text).color(color);
                if is_active {
                    text = text.strong();
                }
                let response = style::truncated_label_with_sense(ui, text, egui::Sense::click());
                if response.clicked() {
                    clicked = tree.click(link);
                }
            }
        }
    });

    clicked
}
