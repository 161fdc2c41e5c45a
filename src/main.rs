//! StringingTool-Editor.
//!
//! Interaktiver 3D-Editor für Punkte, Connections und Forcefield-gesteuerte
//! Bezier-Kurven mit egui.

use eframe::egui;
use stringing_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!(
            "StringingTool-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("StringingTool-Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "StringingTool-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let (events, viewport) = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        // Reihenfolge: erst alle Eingaben, dann Geometrie, dann Zeichnen
        self.process_events(events);
        let stats = self.controller.tick(&mut self.state);
        log::trace!("Frame-Update: {:?}", stats);

        if let Some((painter, rect)) = viewport {
            let scene = self
                .controller
                .build_render_scene(&self.state, [rect.width(), rect.height()]);
            render::paint_scene(&painter, rect, &scene);
            if !scene.has_content() {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Leere Szene. Punkte im Ordner \"Punkte\" hinzufügen",
                    egui::FontId::proportional(20.0),
                    egui::Color32::WHITE,
                );
            }
        }

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(
        &mut self,
        ctx: &egui::Context,
    ) -> (Vec<AppIntent>, Option<(egui::Painter, egui::Rect)>) {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        let manipulator = self
            .state
            .editor
            .manipulator
            .attached()
            .and_then(|target| self.state.scene.position(target.kind, target.id));

        let mut viewport = None;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_gray(30)))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    manipulator,
                    &self.state.options,
                ));

                viewport = Some((ui.painter_at(rect), rect));
            });

        (events, viewport)
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.editor.drag.is_some()
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
