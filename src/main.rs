//! CatmullRom-Editor.
//!
//! Interaktiver Editor für Catmull-Rom-Kurven über einem Hintergrundbild,
//! gebaut mit egui + wgpu.

use catmull_rom_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;
use eframe::egui_wgpu;
use std::sync::{Arc, Mutex};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren (RUST_LOG überschreibt den Standard-Level)
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("CatmullRom-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionaler Bildpfad als erstes Kommandozeilen-Argument
        let initial_image = std::env::args().nth(1);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("CatmullRom-Editor"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "CatmullRom-Editor",
            options,
            Box::new(|cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(EditorApp::new(render_state, initial_image)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: Arc<Mutex<render::Renderer>>,
    device: eframe::wgpu::Device,
    queue: eframe::wgpu::Queue,
    input: ui::InputState,
}

impl EditorApp {
    fn new(render_state: &egui_wgpu::RenderState, initial_image: Option<String>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut app = Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            renderer: Arc::new(Mutex::new(render::Renderer::new(render_state))),
            device: render_state.device.clone(),
            queue: render_state.queue.clone(),
            input: ui::InputState::new(),
        };

        if let Some(path) = initial_image {
            log::info!("Lade Bild aus Kommandozeile: {}", path);
            app.process_events(vec![AppIntent::ImageSelected { path }]);
        }

        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.sync_background_upload();

        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state, self.input.hover_world());
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.options,
                ));

                // Hintergrundfarbe hinter der Szene
                let [r, g, b] = self.state.options.clear_color;
                ui.painter()
                    .rect_filled(rect, 0.0, egui::Rgba::from_rgb(r, g, b));

                let scene = self
                    .controller
                    .build_render_scene(&self.state, viewport_size);

                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::SceneCallback {
                        renderer: self.renderer.clone(),
                        scene,
                        device: self.device.clone(),
                        queue: self.queue.clone(),
                    },
                );

                ui.painter().add(callback);

                if self.state.view.background_image.is_none() && self.state.curve_count() == 0 {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Klicken setzt Punkte · Enter/L schließt ab · Ctrl+O öffnet ein Bild",
                        egui::FontId::proportional(18.0),
                        egui::Color32::from_gray(200),
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("Fehler: {:#}", e));
            }
        }
    }

    fn sync_background_upload(&mut self) {
        if !self.state.view.background_dirty {
            return;
        }
        self.state.view.background_dirty = false;

        let Ok(mut renderer) = self.renderer.lock() else {
            log::error!("Renderer-Lock fehlgeschlagen (Mutex vergiftet)");
            return;
        };
        if let Some(image) = self.state.view.background_image.as_deref() {
            renderer.set_image(&self.device, &self.queue, image.image_data());
            log::info!("Hintergrundbild in Renderer hochgeladen");
        } else {
            renderer.clear_image();
            log::info!("Hintergrundbild aus Renderer entfernt");
        }
    }
}
