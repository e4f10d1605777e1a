mod error_dialog;
pub mod theme;

pub use error_dialog::ErrorDialog;

use crate::catalog::EntryId;
use crate::controller::{Card, ContentView, Controller, NO_RESULTS_MESSAGE};
use crate::launcher::{Launcher, SystemLauncher};
use crate::settings::Preferences;
use crate::zoom::Zoom;
use eframe::egui;
use eframe::egui::{Align, Color32, Layout, Margin, RichText, Sense, Stroke};
use theme::{accent_to_color32, Palette};

pub const WINDOW_TITLE: &str = "Unified Control Panel";
pub const APP_TITLE: &str = "⚙ Unified Control Panel";
pub const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"), " Modular");
pub const SIDEBAR_TITLE: &str = "CATEGORIES";
pub const SEARCH_PLACEHOLDER: &str = "Search settings...";

const HEADER_HEIGHT: f32 = 80.0;
const SIDEBAR_WIDTH: f32 = 250.0;

fn scale_ui<R>(ui: &mut egui::Ui, scale: f32, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    ui.scope(|ui| {
        if (scale - 1.0).abs() > f32::EPSILON {
            let mut style: egui::Style = (*ui.ctx().style()).clone();
            style.spacing.item_spacing *= scale;
            style.spacing.interact_size *= scale;
            style.spacing.button_padding *= scale;
            for font in style.text_styles.values_mut() {
                font.size *= scale;
            }
            ui.set_style(style);
        }
        add_contents(ui)
    })
    .inner
}

pub struct ControlPanelApp<L: Launcher = SystemLauncher> {
    controller: Controller<L>,
    query_input: String,
    zoom: Zoom,
    palette: Palette,
    error_dialog: ErrorDialog,
}

impl<L: Launcher> ControlPanelApp<L> {
    pub fn new(ctx: &egui::Context, controller: Controller<L>, prefs: &Preferences) -> Self {
        let mode = prefs.theme_mode();
        ctx.set_visuals(theme::visuals_for(mode));
        // Ctrl +/- drive our own zoom instead of egui's pixels-per-point zoom.
        ctx.options_mut(|o| o.zoom_with_keyboard = false);
        Self {
            query_input: controller.query().to_string(),
            controller,
            zoom: Zoom::default(),
            palette: Palette::for_mode(mode),
            error_dialog: ErrorDialog::default(),
        }
    }

    pub fn controller(&self) -> &Controller<L> {
        &self.controller
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn handle_zoom_input(&mut self, ctx: &egui::Context) {
        let (wheel, zoom_in, zoom_out, reset) = ctx.input_mut(|i| {
            let wheel = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Zoom(factor) => Some(*factor),
                    _ => None,
                })
                .fold(1.0_f32, |acc, f| acc * f);
            let zoom_in = i.consume_key(egui::Modifiers::COMMAND, egui::Key::Plus)
                | i.consume_key(egui::Modifiers::COMMAND, egui::Key::Equals);
            let zoom_out = i.consume_key(egui::Modifiers::COMMAND, egui::Key::Minus);
            let reset = i.consume_key(egui::Modifiers::COMMAND, egui::Key::Num0);
            (wheel, zoom_in, zoom_out, reset)
        });
        if zoom_in || wheel > 1.0 {
            self.zoom.zoom_in();
        } else if zoom_out || wheel < 1.0 {
            self.zoom.zoom_out();
        }
        if reset {
            self.zoom.reset();
        }
    }

    /// Run one frame: input, panels, and the error dialog.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.handle_zoom_input(ctx);
        self.header(ctx);
        self.sidebar(ctx);
        self.content(ctx);
        if self.error_dialog.ui(ctx) {
            self.controller.dismiss_error();
        }
    }

    pub fn error_dialog(&self) -> &ErrorDialog {
        &self.error_dialog
    }

    fn header(&mut self, ctx: &egui::Context) {
        let palette = self.palette;
        let scale = self.zoom.factor();
        let mut changed = false;
        egui::TopBottomPanel::top("header")
            .exact_height(HEADER_HEIGHT)
            .frame(
                egui::Frame::none()
                    .fill(palette.bg_darker)
                    .inner_margin(Margin::symmetric(20.0, 0.0)),
            )
            .show(ctx, |ui| {
                scale_ui(ui, scale, |ui| {
                    ui.horizontal_centered(|ui| {
                        ui.label(
                            RichText::new(APP_TITLE)
                                .size(20.0 * scale)
                                .strong()
                                .color(palette.text_primary),
                        );
                        ui.label(
                            RichText::new(APP_VERSION)
                                .size(9.0 * scale)
                                .color(palette.text_secondary),
                        );
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let resp = ui.add(
                                egui::TextEdit::singleline(&mut self.query_input)
                                    .hint_text(SEARCH_PLACEHOLDER)
                                    .desired_width(300.0 * scale),
                            );
                            ui.label(RichText::new("🔍").size(12.0 * scale));
                            changed = resp.changed();
                        });
                    });
                });
            });
        if changed {
            self.controller.set_query(&self.query_input);
        }
    }

    fn sidebar(&mut self, ctx: &egui::Context) {
        let palette = self.palette;
        let scale = self.zoom.factor();
        let mut clicked: Option<String> = None;
        egui::SidePanel::left("categories")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::none()
                    .fill(palette.bg_darker)
                    .inner_margin(Margin::symmetric(5.0, 10.0)),
            )
            .show(ctx, |ui| {
                scale_ui(ui, scale, |ui| {
                    ui.label(
                        RichText::new(SIDEBAR_TITLE)
                            .size(9.0 * scale)
                            .strong()
                            .color(palette.text_secondary),
                    );
                    ui.add_space(15.0);
                    for category in self.controller.catalog().list_categories() {
                        let active = self.controller.is_highlighted(&category.name);
                        let button = egui::Button::new(
                            RichText::new(format!("{}  {}", category.icon, category.name))
                                .size(14.0 * scale),
                        )
                        .fill(if active {
                            palette.sidebar_active
                        } else {
                            Color32::TRANSPARENT
                        })
                        .stroke(if active {
                            Stroke::new(1.0, accent_to_color32(category.color))
                        } else {
                            Stroke::NONE
                        })
                        .min_size(egui::vec2(ui.available_width(), 40.0 * scale));
                        if ui.add(button).clicked() {
                            clicked = Some(category.name.clone());
                        }
                        ui.add_space(2.0);
                    }
                });
            });
        if let Some(name) = clicked {
            if self.controller.show_category(&name).is_ok() {
                self.query_input.clear();
            }
        }
    }

    fn content(&mut self, ctx: &egui::Context) {
        let palette = self.palette;
        let scale = self.zoom.factor();
        let mut clicked: Option<EntryId> = None;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(palette.bg)
                    .inner_margin(Margin::same(20.0)),
            )
            .show(ctx, |ui| {
                scale_ui(ui, scale, |ui| {
                    let view = self.controller.view();
                    let title_size = if view.is_search() { 20.0 } else { 24.0 };
                    ui.label(
                        RichText::new(view.title())
                            .size(title_size * scale)
                            .strong()
                            .color(palette.text_primary),
                    );
                    if matches!(view, ContentView::NoResults { .. }) {
                        ui.vertical_centered(|ui| {
                            ui.add_space(50.0);
                            ui.label(
                                RichText::new(NO_RESULTS_MESSAGE)
                                    .size(14.0 * scale)
                                    .color(palette.text_secondary),
                            );
                        });
                        return;
                    }
                    if let Some(subtitle) = view.subtitle() {
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new(subtitle)
                                .size(10.0 * scale)
                                .color(palette.text_secondary),
                        );
                    }
                    ui.add_space(20.0);
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            for card in view.cards() {
                                if card_ui(ui, card, &palette, scale) {
                                    clicked = Some(card.id);
                                }
                                ui.add_space(5.0);
                            }
                        });
                });
            });
        if let Some(id) = clicked {
            let _ = self.controller.activate(id);
        }
        if let Some(err) = self.controller.error() {
            if !self.error_dialog.is_open() {
                self.error_dialog.open_for(err);
            }
        }
    }
}

/// Draw one setting card. Returns `true` when it was clicked anywhere.
fn card_ui(ui: &mut egui::Ui, card: &Card<'_>, palette: &Palette, scale: f32) -> bool {
    let accent = accent_to_color32(card.accent);
    let hover_id = ui.make_persistent_id(("card", card.id.category, card.id.entry));
    let hovered = ui
        .ctx()
        .data(|d| d.get_temp::<bool>(hover_id))
        .unwrap_or(false);
    let (fill, border) = if hovered {
        (palette.card_hover, accent)
    } else {
        (palette.card, palette.card_hover)
    };
    let inner = egui::Frame::none()
        .fill(fill)
        .stroke(Stroke::new(1.0, border))
        .rounding(8.0)
        .inner_margin(Margin::symmetric(20.0, 15.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let (bar, _) = ui.allocate_exact_size(egui::vec2(4.0, 36.0 * scale), Sense::hover());
                ui.painter().rect_filled(bar, 2.0, accent);
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&card.entry.name)
                            .size(13.0 * scale)
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.label(
                        RichText::new(&card.entry.description)
                            .size(9.5 * scale)
                            .color(palette.text_secondary),
                    );
                });
                // badge only, the card senses the click
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    egui::Frame::none()
                        .fill(accent)
                        .rounding(4.0)
                        .inner_margin(Margin::symmetric(10.0, 4.0))
                        .show(ui, |ui| {
                            ui.label(RichText::new("Open →").strong().color(Color32::WHITE));
                        });
                });
            });
        });
    let response = inner
        .response
        .interact(Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    ui.ctx()
        .data_mut(|d| d.insert_temp(hover_id, response.hovered()));
    response.clicked()
}

impl<L: Launcher> eframe::App for ControlPanelApp<L> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
