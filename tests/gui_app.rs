
use eframe::egui;
use mock_launcher::{small_catalog, MockLauncher};
use unified_control_panel::controller::Controller;
use unified_control_panel::gui::ControlPanelApp;
use unified_control_panel::launcher::Dispatcher;
use unified_control_panel::settings::Preferences;

fn new_app(ctx: &egui::Context, prefs: &Preferences) -> ControlPanelApp<MockLauncher> {
    let controller = Controller::new(small_catalog(), Dispatcher::new(MockLauncher::default()));
    ControlPanelApp::new(ctx, controller, prefs)
}

#[test]
fn dark_theme_by_default() {
    let ctx = egui::Context::default();
    let app = new_app(&ctx, &Preferences::default());
    assert!(ctx.style().visuals.dark_mode);
    assert_eq!(app.zoom().percent(), 100);
    assert_eq!(app.controller().catalog().list_categories().len(), 2);
}

#[test]
fn light_theme_from_preferences() {
    let ctx = egui::Context::default();
    let prefs = Preferences {
        theme: "light".into(),
        ..Preferences::default()
    };
    let _app = new_app(&ctx, &prefs);
    assert!(!ctx.style().visuals.dark_mode);
    assert!(!ctx.options(|o| o.zoom_with_keyboard));
}

fn zoom_frame(ctx: &egui::Context, app: &mut ControlPanelApp<MockLauncher>, event: egui::Event) {
    ctx.begin_frame(egui::RawInput {
        events: vec![event],
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(1200.0, 800.0),
        )),
        ..Default::default()
    });
    app.handle_zoom_input(ctx);
    let _ = ctx.end_frame();
}

fn command_key(key: egui::Key) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::COMMAND,
    }
}

#[test]
fn zoom_follows_keys_and_wheel() {
    let ctx = egui::Context::default();
    let mut app = new_app(&ctx, &Preferences::default());

    zoom_frame(&ctx, &mut app, command_key(egui::Key::Plus));
    assert_eq!(app.zoom().percent(), 110);
    zoom_frame(&ctx, &mut app, command_key(egui::Key::Equals));
    assert_eq!(app.zoom().percent(), 120);
    zoom_frame(&ctx, &mut app, egui::Event::Zoom(0.9));
    assert_eq!(app.zoom().percent(), 110);
    zoom_frame(&ctx, &mut app, egui::Event::Zoom(1.2));
    assert_eq!(app.zoom().percent(), 120);
    zoom_frame(&ctx, &mut app, command_key(egui::Key::Minus));
    assert_eq!(app.zoom().percent(), 110);
    zoom_frame(&ctx, &mut app, command_key(egui::Key::Num0));
    assert_eq!(app.zoom().percent(), 100);
}

#[test]
fn zoom_stops_at_bounds() {
    let ctx = egui::Context::default();
    let mut app = new_app(&ctx, &Preferences::default());
    for _ in 0..8 {
        zoom_frame(&ctx, &mut app, command_key(egui::Key::Minus));
    }
    assert_eq!(app.zoom().percent(), 50);
}

fn pointer_frame(
    ctx: &egui::Context,
    app: &mut ControlPanelApp<MockLauncher>,
    events: Vec<egui::Event>,
) {
    ctx.begin_frame(egui::RawInput {
        events,
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(1200.0, 800.0),
        )),
        ..Default::default()
    });
    app.ui(ctx);
    let _ = ctx.end_frame();
}

fn click_at(ctx: &egui::Context, app: &mut ControlPanelApp<MockLauncher>, pos: egui::Pos2) {
    let button = |pressed| egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::default(),
    };
    pointer_frame(ctx, app, vec![egui::Event::PointerMoved(pos)]);
    pointer_frame(ctx, app, vec![button(true)]);
    pointer_frame(ctx, app, vec![button(false)]);
}

#[test]
fn clicking_a_card_launches_its_entry() {
    let ctx = egui::Context::default();
    let launcher = MockLauncher::default();
    let controller = Controller::new(small_catalog(), Dispatcher::new(launcher.clone()));
    let mut app = ControlPanelApp::new(&ctx, controller, &Preferences::default());
    pointer_frame(&ctx, &mut app, Vec::new());

    // first card of "System", right of the sidebar and below the title
    click_at(&ctx, &mut app, egui::pos2(700.0, 215.0));
    assert_eq!(launcher.launched().len(), 1);
    assert!(!app.error_dialog().is_open());
}

#[test]
fn failed_launch_opens_the_error_dialog() {
    let ctx = egui::Context::default();
    let controller = Controller::new(
        small_catalog(),
        Dispatcher::new(MockLauncher::failing("access denied")),
    );
    let mut app = ControlPanelApp::new(&ctx, controller, &Preferences::default());
    pointer_frame(&ctx, &mut app, Vec::new());

    click_at(&ctx, &mut app, egui::pos2(700.0, 215.0));
    assert!(app.error_dialog().is_open());
    assert!(app.error_dialog().message().starts_with("Failed to open "));
    assert!(app.controller().error().is_some());

    let enter = egui::Event::Key {
        key: egui::Key::Enter,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::default(),
    };
    pointer_frame(&ctx, &mut app, vec![enter]);
    assert!(!app.error_dialog().is_open());
    assert!(app.controller().error().is_none());
}
