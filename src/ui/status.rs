//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
///
/// `hover_world` ist die Weltposition unter dem Mauszeiger, falls dieser
/// über dem Viewport liegt.
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, hover_world: Option<glam::Vec2>) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Aktive Punkte: {} | Kurven: {} | Punkte gesamt: {}",
                state.active_point_count(),
                state.curve_count(),
                state.editor.control_points.total_points()
            ));

            ui.separator();

            if let Some(image) = state.view.background_image.as_deref() {
                let (width, height) = image.dimensions();
                ui.label(format!(
                    "Bild: {} ({}x{}, {})",
                    image.source_label(),
                    width,
                    height,
                    state.view.image_style.label()
                ));
            } else {
                ui.label("Kein Bild geladen");
            }

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.3}, {:.3})",
                state.view.camera.zoom, state.view.camera.position.x, state.view.camera.position.y
            ));

            if let Some(world) = hover_world {
                ui.separator();
                ui.label(format!("Cursor: ({:.3}, {:.3})", world.x, world.y));
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
