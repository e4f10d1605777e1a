use crate::catalog::AccentColor;
use crate::settings::ThemeMode;
use eframe::egui;
use eframe::egui::Color32;

/// Colors used by the hand-drawn parts of the window (header, sidebar,
/// cards). Widget defaults come from [`visuals_for`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg: Color32,
    pub bg_darker: Color32,
    pub card: Color32,
    pub card_hover: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub sidebar_active: Color32,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            bg: Color32::from_rgb(0x1e, 0x29, 0x3b),
            bg_darker: Color32::from_rgb(0x0f, 0x17, 0x2a),
            card: Color32::from_rgb(0x33, 0x41, 0x55),
            card_hover: Color32::from_rgb(0x47, 0x55, 0x69),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(0x94, 0xa3, 0xb8),
            sidebar_active: Color32::from_rgb(0x47, 0x55, 0x69),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color32::from_rgb(245, 246, 250),
            bg_darker: Color32::from_rgb(228, 231, 238),
            card: Color32::WHITE,
            card_hover: Color32::from_rgb(236, 239, 245),
            text_primary: Color32::from_rgb(0x1a, 0x1a, 0x1a),
            text_secondary: Color32::from_rgb(0x5f, 0x63, 0x68),
            sidebar_active: Color32::WHITE,
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

pub fn accent_to_color32(color: AccentColor) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

pub fn visuals_for(mode: ThemeMode) -> egui::Visuals {
    let palette = Palette::for_mode(mode);
    let mut visuals = match mode {
        ThemeMode::Dark => egui::Visuals::dark(),
        ThemeMode::Light => egui::Visuals::light(),
    };
    visuals.window_fill = palette.bg;
    visuals.panel_fill = palette.bg;
    visuals.extreme_bg_color = palette.card;
    visuals.override_text_color = Some(palette.text_primary);

    visuals.widgets.noninteractive.bg_fill = palette.bg;
    visuals.widgets.inactive.bg_fill = palette.card;
    visuals.widgets.inactive.weak_bg_fill = palette.card;
    visuals.widgets.hovered.bg_fill = palette.card_hover;
    visuals.widgets.hovered.weak_bg_fill = palette.card_hover;
    visuals.widgets.active.bg_fill = palette.card_hover;
    visuals.widgets.active.weak_bg_fill = palette.card_hover;
    visuals
}
