use crate::launcher::DispatchError;
use eframe::egui;

/// Blocking-style error window shown when an entry could not be launched.
#[derive(Debug, Clone)]
pub struct ErrorDialog {
    open: bool,
    title: String,
    message: String,
    dismiss_label: String,
}

impl Default for ErrorDialog {
    fn default() -> Self {
        Self {
            open: false,
            title: "Error".into(),
            message: String::new(),
            dismiss_label: "OK".into(),
        }
    }
}

impl ErrorDialog {
    pub fn open_for(&mut self, err: &DispatchError) {
        self.message = err.to_string();
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Draw the dialog. Returns `true` on the frame it gets dismissed.
    pub fn ui(&mut self, ctx: &egui::Context) -> bool {
        if !self.open {
            return false;
        }
        let mut dismissed = false;
        let mut open = true;
        egui::Window::new(self.title.clone())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.colored_label(ui.visuals().error_fg_color, "⚠");
                ui.label(&self.message);
                ui.add_space(8.0);
                if ui.button(&self.dismiss_label).clicked()
                    || ui.input(|i| i.key_pressed(egui::Key::Enter))
                {
                    dismissed = true;
                }
            });
        if !open {
            dismissed = true;
        }
        if dismissed {
            self.open = false;
        }
        dismissed
    }
}
