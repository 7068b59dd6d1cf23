use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Anything other than "light" means dark.
    pub fn from_config(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("light") {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Self::Light => egui::Visuals::light(),
            Self::Dark => egui::Visuals::dark(),
        }
    }
}

// --- Sizing ---
pub const ICON_SIZE: f32 = 14.0;
pub const ROW_HEIGHT: f32 = 24.0;
pub const GROUP_SPACING: f32 = 8.0;

// --- Panel constraints ---
pub const SIDEBAR_MIN: f32 = 140.0;
pub const SIDEBAR_MAX: f32 = 420.0;

// --- Colors ---
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);
pub const FAVORITE: egui::Color32 = egui::Color32::from_rgb(250, 200, 70);

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

/// Glyph for a Material icon name used by the sidebar nodes.
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "star" => "\u{2605}",
        "star_border" => "\u{2606}",
        _ => "?",
    }
}

/// Render a label that truncates overflowing text with an ellipsis and uses the provided sense.
pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}
