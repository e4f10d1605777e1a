use std::path::PathBuf;

use unified_control_panel::catalog::Catalog;
use unified_control_panel::controller::Controller;
use unified_control_panel::gui::{ControlPanelApp, WINDOW_TITLE};
use unified_control_panel::launcher::{Dispatcher, SystemLauncher};
use unified_control_panel::logging;
use unified_control_panel::settings::{self, load_or_init};

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let config_path = settings::default_path();
    let outcome = load_or_init(&config_path);
    let prefs = outcome.prefs;
    logging::init(prefs.debug_logging, prefs.log_file.as_ref().map(PathBuf::from));

    if let Some(err) = &outcome.recovered {
        tracing::warn!("config load error: {err}; using defaults");
    }
    if let Some(err) = &outcome.save_error {
        tracing::warn!("config save error: {err}");
    }

    let catalog = Catalog::builtin();
    tracing::info!(
        categories = catalog.list_categories().len(),
        entries = catalog.len(),
        "catalog loaded"
    );
    let controller = Controller::new(catalog, Dispatcher::new(SystemLauncher));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    tracing::info!("starting main loop");
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| Box::new(ControlPanelApp::new(&cc.egui_ctx, controller, &prefs))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the control panel window: {e}"))?;
    tracing::info!("application closed normally");
    Ok(())
}
